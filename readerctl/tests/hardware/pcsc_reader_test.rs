#![cfg(feature = "pcsc")]

#[path = "common.rs"]
mod common;

use readerctl::types::{FeatureTag, ReaderInfoItem};
use serial_test::serial;

// These tests require a class 3 reader with a card inserted. They are
// marked `#[ignore]` so CI does not attempt to run them. Run manually with:
//
// cargo test -p readerctl --test hardware --features pcsc -- --ignored

#[test]
#[ignore]
#[serial]
fn lists_reader_features() -> anyhow::Result<()> {
    let Some(mut session) = common::open_session()? else {
        return Ok(());
    };
    let table = session.features()?;
    print!("{}", table);
    assert!(!table.is_empty());
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn reads_pace_capabilities() -> anyhow::Result<()> {
    let Some(mut session) = common::open_session()? else {
        return Ok(());
    };
    if session.features()?.contains(FeatureTag::EXECUTE_PACE) {
        let caps = session.pace_capabilities()?;
        println!("PACE capabilities: {:#04x}", caps.bits());
    }
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn reads_vendor_name() -> anyhow::Result<()> {
    let Some(mut session) = common::open_session()? else {
        return Ok(());
    };
    let vendor = session.reader_info_string(ReaderInfoItem::Vendor)?;
    println!("vendor: {}", vendor);
    Ok(())
}

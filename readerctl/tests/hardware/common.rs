#![cfg(feature = "pcsc")]

//! Shared helpers for real-reader tests.
//!
//! Opens the reader named by `READERCTL_READER` (substring match, default
//! "REINER SCT"). Returns `Ok(None)` when no such reader is attached so the
//! tests pass on machines without hardware.

use readerctl::session::ReaderSession;
use readerctl::transport::PcscTransport;
use readerctl::Error;

pub fn open_session() -> anyhow::Result<Option<ReaderSession<PcscTransport>>> {
    let _ = env_logger::builder().is_test(true).try_init();
    let keyword = std::env::var("READERCTL_READER").unwrap_or_else(|_| "REINER SCT".into());
    match PcscTransport::connect_matching(&keyword) {
        Ok(transport) => Ok(Some(ReaderSession::new(transport))),
        Err(Error::ReaderNotFound(_)) => Ok(None),
        Err(Error::Pcsc(pcsc::Error::NoReadersAvailable))
        | Err(Error::Pcsc(pcsc::Error::NoService))
        | Err(Error::Pcsc(pcsc::Error::NoSmartcard)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

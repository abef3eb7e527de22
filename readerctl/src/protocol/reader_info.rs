// readerctl-rs/readerctl/src/protocol/reader_info.rs

use crate::constants::{READER_INFO_CLA, READER_INFO_INS, READER_INFO_P1, SW_SUCCESS};
use crate::protocol::parser;
use crate::types::ReaderInfoItem;
use crate::{Error, Result};

/// Encode the vendor "get reader information" pseudo-APDU.
/// Layout: FF 9A 01 item 00
pub fn encode_reader_info(item: ReaderInfoItem) -> [u8; 5] {
    [
        READER_INFO_CLA,
        READER_INFO_INS,
        READER_INFO_P1,
        item as u8,
        0x00,
    ]
}

/// Decode the response: data + SW1 SW2. Only 90 00 is accepted.
pub fn decode_reader_info(data: &[u8]) -> Result<&[u8]> {
    parser::ensure_len(data, 2)?;
    let (body, sw) = data.split_at(data.len() - 2);
    if (sw[0], sw[1]) != SW_SUCCESS {
        return Err(Error::StatusWord {
            sw1: sw[0],
            sw2: sw[1],
        });
    }
    Ok(body)
}

/// Interpret reader information bytes as text, dropping trailing NULs.
pub fn reader_info_string(data: &[u8]) -> String {
    let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&data[..end]).into_owned()
}

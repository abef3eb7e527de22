// readerctl-rs/readerctl/src/constants.rs
//! Common protocol constants used across the crate

/// Control-code number of the PC/SC part 10 GET_FEATURE_REQUEST.
pub const GET_FEATURE_REQUEST: u32 = 3400;

/// Size of one TLV record in a feature-list response: tag(1) + len(1) + code(4)
pub const FEATURE_RECORD_LEN: usize = 6;

/// Declared length of the control-code field in a feature record
pub const FEATURE_CODE_LEN: u8 = 4;

/// Windows SCARD_CTL_CODE: device type FILE_DEVICE_SMARTCARD (0x31) in the high word
pub const WINDOWS_SMARTCARD_DEVICE: u32 = 0x31;

/// pcsc-lite SCARD_CTL_CODE base
pub const PCSCLITE_CTL_BASE: u32 = 0x4200_0000;

/// PACE function indices (first byte of an EXECUTE_PACE request)
pub const PACE_GET_READER_CAPABILITIES: u8 = 0x01;
pub const PACE_ESTABLISH_CHANNEL: u8 = 0x02;

/// Header of an EXECUTE_PACE request: index(1) + LE length(2)
pub const PACE_HEADER_LEN: usize = 3;

/// Offset of the capability byte in a GetReaderPACECapabilities response:
/// result(4) + output length(2)
pub const PACE_CAPABILITY_OFFSET: usize = 6;

/// Fixed header of a PIN_VERIFY_STRUCTURE up to (not including) ulDataLength
pub const PIN_VERIFY_HEADER_LEN: usize = 15;

/// ulDataLength(1) + three reserved bytes
pub const PIN_VERIFY_DATA_LEN_FIELD: usize = 4;

/// Class / instruction / P1 of the vendor "get reader information" pseudo-APDU
pub const READER_INFO_CLA: u8 = 0xFF;
pub const READER_INFO_INS: u8 = 0x9A;
pub const READER_INFO_P1: u8 = 0x01;

/// ISO 7816 success status word
pub const SW_SUCCESS: (u8, u8) = (0x90, 0x00);

// readerctl-rs/readerctl/src/protocol/ioctl.rs

use crate::constants::{GET_FEATURE_REQUEST, PCSCLITE_CTL_BASE, WINDOWS_SMARTCARD_DEVICE};
use crate::types::Platform;

/// SCARD_CTL_CODE for the given platform.
/// Windows: (0x31 << 16) | (code << 2)
/// pcsc-lite: 0x42000000 + code
pub fn control_identifier(code: u32, platform: Platform) -> u32 {
    match platform {
        Platform::Windows => (WINDOWS_SMARTCARD_DEVICE << 16) | (code << 2),
        Platform::Unix => PCSCLITE_CTL_BASE.wrapping_add(code),
    }
}

/// Identifier of the GET_FEATURE_REQUEST control command.
pub fn feature_request_identifier(platform: Platform) -> u32 {
    control_identifier(GET_FEATURE_REQUEST, platform)
}

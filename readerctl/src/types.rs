// readerctl-rs/readerctl/src/types.rs

use std::fmt;

use derive_more::{Display, From};

/// FeatureTag - Newtype Pattern (1 バイト)
///
/// Identifies a reader capability in the PC/SC part 10 feature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureTag(u8);

impl FeatureTag {
    pub const VERIFY_PIN_START: Self = Self(0x01);
    pub const VERIFY_PIN_FINISH: Self = Self(0x02);
    pub const MODIFY_PIN_START: Self = Self(0x03);
    pub const MODIFY_PIN_FINISH: Self = Self(0x04);
    pub const GET_KEY_PRESSED: Self = Self(0x05);
    pub const VERIFY_PIN_DIRECT: Self = Self(0x06);
    pub const MODIFY_PIN_DIRECT: Self = Self(0x07);
    pub const MCT_READER_DIRECT: Self = Self(0x08);
    pub const MCT_UNIVERSAL: Self = Self(0x09);
    pub const IFD_PIN_PROPERTIES: Self = Self(0x0A);
    pub const ABORT: Self = Self(0x0B);
    pub const SET_SPE_MESSAGE: Self = Self(0x0C);
    pub const VERIFY_PIN_DIRECT_APP_ID: Self = Self(0x0D);
    pub const MODIFY_PIN_DIRECT_APP_ID: Self = Self(0x0E);
    pub const WRITE_DISPLAY: Self = Self(0x0F);
    pub const GET_KEY: Self = Self(0x10);
    pub const IFD_DISPLAY_PROPERTIES: Self = Self(0x11);
    pub const GET_TLV_PROPERTIES: Self = Self(0x12);
    pub const CCID_ESC_COMMAND: Self = Self(0x13);
    pub const EXECUTE_PACE: Self = Self(0x20);

    pub const fn new(tag: u8) -> Self {
        Self(tag)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Symbolic PC/SC name of the tag, or `None` for tags outside the
    /// known table.
    pub fn name(&self) -> Option<&'static str> {
        let name = match self.0 {
            0x01 => "FEATURE_VERIFY_PIN_START",
            0x02 => "FEATURE_VERIFY_PIN_FINISH",
            0x03 => "FEATURE_MODIFY_PIN_START",
            0x04 => "FEATURE_MODIFY_PIN_FINISH",
            0x05 => "FEATURE_GET_KEY_PRESSED",
            0x06 => "FEATURE_VERIFY_PIN_DIRECT",
            0x07 => "FEATURE_MODIFY_PIN_DIRECT",
            0x08 => "FEATURE_MCT_READER_DIRECT",
            0x09 => "FEATURE_MCT_UNIVERSAL",
            0x0A => "FEATURE_IFD_PIN_PROPERTIES",
            0x0B => "FEATURE_ABORT",
            0x0C => "FEATURE_SET_SPE_MESSAGE",
            0x0D => "FEATURE_VERIFY_PIN_DIRECT_APP_ID",
            0x0E => "FEATURE_MODIFY_PIN_DIRECT_APP_ID",
            0x0F => "FEATURE_WRITE_DISPLAY",
            0x10 => "FEATURE_GET_KEY",
            0x11 => "FEATURE_IFD_DISPLAY_PROPERTIES",
            0x12 => "FEATURE_GET_TLV_PROPERTIES",
            0x13 => "FEATURE_CCID_ESC_COMMAND",
            0x20 => "FEATURE_EXECUTE_PACE",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for FeatureTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "unknown feature {:#04x}", self.0),
        }
    }
}

/// ControlCode (u32)
///
/// Assigned by the reader driver at connect time. Not portable across
/// readers or sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
#[display(fmt = "{:#010x}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlCode(u32);

impl ControlCode {
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    pub fn to_be_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

/// Platform selecting the SCARD_CTL_CODE formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// The platform this crate was compiled for.
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::host()
    }
}

/// PACE password identifiers (PinID byte of EstablishPACEChannel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinId(u8);

impl PinId {
    pub const MRZ: Self = Self(0x01);
    pub const CAN: Self = Self(0x02);
    pub const PIN: Self = Self(0x03);
    pub const PUK: Self = Self(0x04);

    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl From<u8> for PinId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

/// PACE capability bitmask returned by GetReaderPACECapabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaceCapabilities(u8);

impl PaceCapabilities {
    pub const DESTROY_CHANNEL: u8 = 0x10;
    pub const ESIGN: u8 = 0x20;
    pub const EID: u8 = 0x40;
    pub const GENERIC: u8 = 0x80;

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    /// True if every bit of `flag` is set.
    pub fn contains(&self, flag: u8) -> bool {
        self.0 & flag == flag
    }
}

/// Items readable through the vendor "get reader information" pseudo-APDU
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderInfoItem {
    Vendor = 0x01,
    Product = 0x03,
    Firmware = 0x06,
    Driver = 0x07,
}

// readerctl-rs/readerctl/src/protocol/pin_verify.rs

use crate::constants::{PIN_VERIFY_DATA_LEN_FIELD, PIN_VERIFY_HEADER_LEN};
use crate::protocol::writer::{FrameWriter, LenWidth, check_fits};
use crate::Result;

/// PIN_VERIFY_STRUCTURE for FEATURE_VERIFY_PIN_DIRECT.
///
/// Layout: 15 header bytes + data_len(1) + reserved(3) + command
///
/// The header fields are reader policy (timeouts, PIN block format, display
/// message) and are sent as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinVerifyDirectRequest {
    /// 0 = reader default
    pub time_out: u8,
    pub time_out2: u8,
    pub format_string: u8,
    pub pin_block_string: u8,
    pub pin_length_format: u8,
    pub min_pin_size: u8,
    pub max_pin_size: u8,
    pub entry_validation_condition: u8,
    pub number_message: u8,
    /// Written low byte first (0x0409 -> 09 04)
    pub lang_id: u16,
    pub msg_index: u8,
    pub teo_prologue: [u8; 3],
    pub command: Vec<u8>,
}

impl Default for PinVerifyDirectRequest {
    /// Six-digit ASCII PIN, OK-key validation, US English prompts.
    fn default() -> Self {
        Self {
            time_out: 0x00,
            time_out2: 0x00,
            format_string: 0x02,
            pin_block_string: 0x06,
            pin_length_format: 0x00,
            min_pin_size: 0x06,
            max_pin_size: 0x06,
            entry_validation_condition: 0x03,
            number_message: 0xFF,
            lang_id: 0x0409,
            msg_index: 0x00,
            teo_prologue: [0x00; 3],
            command: Vec::new(),
        }
    }
}

impl PinVerifyDirectRequest {
    pub fn with_command(mut self, command: impl Into<Vec<u8>>) -> Self {
        self.command = command.into();
        self
    }

    pub fn header(&self) -> [u8; PIN_VERIFY_HEADER_LEN] {
        let lang = self.lang_id.to_le_bytes();
        [
            self.time_out,
            self.time_out2,
            self.format_string,
            self.pin_block_string,
            self.pin_length_format,
            self.min_pin_size,
            self.max_pin_size,
            self.entry_validation_condition,
            self.number_message,
            lang[0],
            lang[1],
            self.msg_index,
            self.teo_prologue[0],
            self.teo_prologue[1],
            self.teo_prologue[2],
        ]
    }

    /// Encode the structure. Commands longer than 255 bytes are rejected.
    pub fn encode(&self) -> Result<Vec<u8>> {
        check_fits("application command", LenWidth::U8, self.command.len())?;
        let mut w = FrameWriter::new();
        w.extend(&self.header())
            .push(self.command.len() as u8)
            .extend(&[0x00; PIN_VERIFY_DATA_LEN_FIELD - 1])
            .extend(&self.command);
        w.finish()
    }
}

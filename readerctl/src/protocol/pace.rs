// readerctl-rs/readerctl/src/protocol/pace.rs

use crate::constants::{
    PACE_CAPABILITY_OFFSET, PACE_ESTABLISH_CHANNEL, PACE_GET_READER_CAPABILITIES,
};
use crate::protocol::parser;
use crate::protocol::writer::{FrameWriter, LenWidth};
use crate::types::{PaceCapabilities, PinId};
use crate::{Error, Result};

/// EstablishPACEChannel input.
///
/// Layout: 0x02 + len(2, LE) + pin_id(1) + len_chat(1) + chat + len_pin(1)
/// + pin + len_cert(2, LE) + cert_description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaceRequest {
    pub pin_id: PinId,
    pub chat: Option<Vec<u8>>,
    pub pin: Option<Vec<u8>>,
    pub cert_description: Option<Vec<u8>>,
}

impl PaceRequest {
    pub fn new(pin_id: PinId) -> Self {
        Self {
            pin_id,
            chat: None,
            pin: None,
            cert_description: None,
        }
    }

    pub fn with_chat(mut self, chat: impl Into<Vec<u8>>) -> Self {
        self.chat = Some(chat.into());
        self
    }

    pub fn with_pin(mut self, pin: impl Into<Vec<u8>>) -> Self {
        self.pin = Some(pin.into());
        self
    }

    pub fn with_cert_description(mut self, desc: impl Into<Vec<u8>>) -> Self {
        self.cert_description = Some(desc.into());
        self
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        encode_establish_channel(
            self.pin_id,
            self.chat.as_deref(),
            self.pin.as_deref(),
            self.cert_description.as_deref(),
        )
    }
}

/// Encode an EstablishPACEChannel control frame.
///
/// Absent chat/pin encode a single zero length byte; an absent certificate
/// description encodes two zero bytes.
pub fn encode_establish_channel(
    pin_id: PinId,
    chat: Option<&[u8]>,
    pin: Option<&[u8]>,
    cert_description: Option<&[u8]>,
) -> Result<Vec<u8>> {
    let mut w = FrameWriter::with_length_slot(&[PACE_ESTABLISH_CHANNEL], LenWidth::U16Le);
    w.push(pin_id.as_u8());
    w.length_prefixed("chat", LenWidth::U8, chat)?
        .length_prefixed("pin", LenWidth::U8, pin)?
        .length_prefixed("certificate description", LenWidth::U16Le, cert_description)?;
    w.finish()
}

/// Encode a GetReaderPACECapabilities control frame: 0x01 0x00 0x00
pub fn encode_get_capabilities() -> Vec<u8> {
    vec![PACE_GET_READER_CAPABILITIES, 0x00, 0x00]
}

/// Decoded EXECUTE_PACE response header.
///
/// The bytes after the result code depend on the PACE function and PinID
/// and are left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaceResult {
    pub result_code: u32,
    pub raw: Vec<u8>,
}

impl PaceResult {
    /// Decode a response; requires at least the 4-byte result code.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let result_code = parser::le_u32_at(data, 0)?;
        Ok(Self {
            result_code,
            raw: data.to_vec(),
        })
    }

    pub fn is_success(&self) -> bool {
        self.result_code == 0
    }

    /// Function-specific output following the result code.
    pub fn output(&self) -> &[u8] {
        &self.raw[4..]
    }

    /// Turn a nonzero result code into `Error::ProtocolFailure`.
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::ProtocolFailure {
                code: self.result_code,
            })
        }
    }
}

/// Decode a GetReaderPACECapabilities response.
///
/// Layout: result(4, LE) + output length(2) + capabilities(1)
pub fn decode_capabilities(data: &[u8]) -> Result<PaceCapabilities> {
    PaceResult::decode(data)?.into_result()?;
    let bits = parser::byte_at(data, PACE_CAPABILITY_OFFSET)?;
    Ok(PaceCapabilities::from_bits(bits))
}

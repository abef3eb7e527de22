// readerctl-rs/readerctl/src/transport/pcsc.rs

#![cfg(feature = "pcsc")]

use std::ffi::CStr;

use ::pcsc::{Card, Context, MAX_BUFFER_SIZE_EXTENDED, Protocols, Scope, ShareMode};
use log::debug;

use crate::transport::traits::Transport;
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Minimal PC/SC transport over an already-connected card. It is
/// feature-gated behind `--features pcsc` and requires the `pcsc` crate.
pub struct PcscTransport {
    card: Card,
    reader_name: String,
}

impl PcscTransport {
    /// Wrap a card handle obtained elsewhere.
    pub fn from_card(card: Card, reader_name: impl Into<String>) -> Self {
        Self {
            card,
            reader_name: reader_name.into(),
        }
    }

    /// Connect (shared, any protocol) to the first reader whose name
    /// contains `keyword`.
    pub fn connect_matching(keyword: &str) -> Result<Self> {
        let ctx = Context::establish(Scope::User)?;
        let readers = ctx.list_readers_owned()?;
        let reader = readers
            .iter()
            .find(|r| r.to_string_lossy().contains(keyword))
            .ok_or_else(|| Error::ReaderNotFound(keyword.to_string()))?;
        Self::connect(&ctx, reader)
    }

    pub fn connect(ctx: &Context, reader: &CStr) -> Result<Self> {
        let card = ctx.connect(reader, ShareMode::Shared, Protocols::ANY)?;
        let reader_name = reader.to_string_lossy().into_owned();
        debug!("connected to {}", reader_name);
        Ok(Self { card, reader_name })
    }

    pub fn reader_name(&self) -> &str {
        &self.reader_name
    }

    pub fn card(&self) -> &Card {
        &self.card
    }
}

impl Transport for PcscTransport {
    fn send_control(&mut self, identifier: u32, payload: &[u8]) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; MAX_BUFFER_SIZE_EXTENDED];
        let resp = self.card.control(identifier.into(), payload, &mut buf)?;
        Ok(resp.to_vec())
    }

    fn send_application_command(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; MAX_BUFFER_SIZE_EXTENDED];
        debug!("transmit {}", bytes_to_hex(command));
        let resp = self.card.transmit(command, &mut buf)?;
        Ok(resp.to_vec())
    }
}

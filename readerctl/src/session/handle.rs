// readerctl-rs/readerctl/src/session/handle.rs

use log::debug;

use crate::protocol::pace::{self, PaceRequest, PaceResult};
use crate::protocol::pin_verify::PinVerifyDirectRequest;
use crate::protocol::{FeatureTable, reader_info};
use crate::session::config::SessionConfig;
use crate::session::resolver;
use crate::transport::Transport;
use crate::types::{ControlCode, FeatureTag, PaceCapabilities, ReaderInfoItem};
use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
use crate::Result;

/// One card session: a transport plus the per-session feature list.
///
/// Control codes are assigned by the reader driver at connect time, so a
/// cached feature list never outlives the session that fetched it. Every
/// exchange takes `&mut self`; share a session across threads behind a
/// `Mutex`.
pub struct ReaderSession<T: Transport> {
    transport: T,
    config: SessionConfig,
    features: Option<FeatureTable>,
}

impl<T: Transport> ReaderSession<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, SessionConfig::default())
    }

    pub fn with_config(transport: T, config: SessionConfig) -> Self {
        Self {
            transport,
            config,
            features: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// The reader's feature list. Served from the cache when caching is on
    /// and a list was already fetched.
    pub fn features(&mut self) -> Result<FeatureTable> {
        if let Some(table) = &self.features {
            debug!("feature list served from cache");
            return Ok(table.clone());
        }
        let table = resolver::discover_features(&mut self.transport, self.config.platform)?;
        if self.config.cache_features {
            self.features = Some(table.clone());
        }
        Ok(table)
    }

    /// Fetch the feature list again, replacing any cached copy.
    pub fn refresh_features(&mut self) -> Result<FeatureTable> {
        self.features = None;
        self.features()
    }

    /// Drop the cached feature list (e.g. after a reconnect).
    pub fn invalidate_features(&mut self) {
        self.features = None;
    }

    /// Control code the reader assigned to `tag`.
    pub fn resolve(&mut self, tag: FeatureTag) -> Result<ControlCode> {
        let table = self.features()?;
        resolver::lookup(&table, tag)
    }

    /// Resolve `tag` and send `payload` on its control code.
    pub fn execute_feature(&mut self, tag: FeatureTag, payload: &[u8]) -> Result<Vec<u8>> {
        let code = self.resolve(tag)?;
        debug!("{} ({}) <- {}", tag, code, bytes_to_hex(payload));
        let resp = self.transport.send_control(code.as_u32(), payload)?;
        debug!("{} -> {}", tag, bytes_to_hex(&resp));
        Ok(resp)
    }

    /// EstablishPACEChannel. A nonzero result code is returned inside the
    /// `PaceResult`, not as an error; use `PaceResult::into_result` to
    /// treat it as one.
    pub fn establish_pace_channel(&mut self, request: &PaceRequest) -> Result<PaceResult> {
        let frame = request.encode()?;
        let resp = self.execute_feature(FeatureTag::EXECUTE_PACE, &frame)?;
        let result = PaceResult::decode(&resp)?;
        debug!("PACE result: {:#x}", result.result_code);
        Ok(result)
    }

    /// GetReaderPACECapabilities.
    pub fn pace_capabilities(&mut self) -> Result<PaceCapabilities> {
        let resp = self.execute_feature(FeatureTag::EXECUTE_PACE, &pace::encode_get_capabilities())?;
        pace::decode_capabilities(&resp)
    }

    /// Let the reader collect the PIN and send `request.command` to the
    /// card. The reader's response is returned unmodified.
    pub fn verify_pin_direct(&mut self, request: &PinVerifyDirectRequest) -> Result<Vec<u8>> {
        let frame = request.encode()?;
        self.execute_feature(FeatureTag::VERIFY_PIN_DIRECT, &frame)
    }

    /// Vendor "get reader information" data bytes (status word stripped).
    pub fn reader_info(&mut self, item: ReaderInfoItem) -> Result<Vec<u8>> {
        let apdu = reader_info::encode_reader_info(item);
        let resp = self.transport.send_application_command(&apdu)?;
        debug!("reader info {:?}: {}", item, bytes_to_hex_spaced(&resp));
        reader_info::decode_reader_info(&resp).map(<[u8]>::to_vec)
    }

    /// Reader information as text.
    pub fn reader_info_string(&mut self, item: ReaderInfoItem) -> Result<String> {
        let data = self.reader_info(item)?;
        Ok(reader_info::reader_info_string(&data))
    }
}

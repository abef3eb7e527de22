// readerctl-rs/readerctl/src/session/builder.rs

use crate::session::config::SessionConfig;
use crate::session::handle::ReaderSession;
use crate::transport::Transport;
use crate::types::Platform;
use crate::{Error, Result};

/// Helper to construct a ReaderSession with optional configuration.
pub struct ReaderSessionBuilder<T: Transport> {
    transport: Option<T>,
    config: SessionConfig,
}

impl<T: Transport> ReaderSessionBuilder<T> {
    pub fn new() -> Self {
        Self {
            transport: None,
            config: SessionConfig::default(),
        }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.config.platform = platform;
        self
    }

    pub fn cache_features(mut self, cache: bool) -> Self {
        self.config.cache_features = cache;
        self
    }

    /// Consume the builder and return the session.
    /// Requires a transport to be provided.
    pub fn build(self) -> Result<ReaderSession<T>> {
        match self.transport {
            Some(t) => Ok(ReaderSession::with_config(t, self.config)),
            None => Err(Error::Transport("no transport configured".into())),
        }
    }
}

impl<T: Transport> Default for ReaderSessionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

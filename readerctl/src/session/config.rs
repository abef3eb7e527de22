//! Configuration options for a reader session

use crate::types::Platform;

/// Configuration chosen once when a session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Selects the SCARD_CTL_CODE formula
    pub platform: Platform,

    /// Keep the decoded feature list for the lifetime of the session
    /// instead of asking the reader on every lookup
    pub cache_features: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            platform: Platform::host(),
            cache_features: true,
        }
    }
}

impl SessionConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the platform
    pub const fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Set whether the feature list is cached
    pub const fn with_cache_features(mut self, cache: bool) -> Self {
        self.cache_features = cache;
        self
    }
}

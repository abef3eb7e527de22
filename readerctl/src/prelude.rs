// readerctl-rs/readerctl/src/prelude.rs

pub use crate::protocol::{
    Feature, FeatureTable, PaceRequest, PaceResult, PinVerifyDirectRequest, control_identifier,
};
pub use crate::session::{ReaderSession, ReaderSessionBuilder, SessionConfig};
pub use crate::transport::Transport;
pub use crate::{
    ControlCode, Error, FeatureTag, PaceCapabilities, PinId, Platform, ReaderInfoItem, Result,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};

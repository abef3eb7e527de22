// readerctl-rs/readerctl/src/session/resolver.rs

use log::debug;

use crate::protocol::{FeatureTable, feature_request_identifier};
use crate::transport::Transport;
use crate::types::{ControlCode, FeatureTag, Platform};
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Issue GET_FEATURE_REQUEST (empty payload) and decode the feature list.
pub fn discover_features(transport: &mut dyn Transport, platform: Platform) -> Result<FeatureTable> {
    let id = feature_request_identifier(platform);
    let raw = transport.send_control(id, &[])?;
    debug!("feature list via {:#010x}: {}", id, bytes_to_hex(&raw));
    Ok(FeatureTable::decode(&raw))
}

/// Look up `tag` in a decoded table.
pub fn lookup(table: &FeatureTable, tag: FeatureTag) -> Result<ControlCode> {
    table.find(tag).ok_or(Error::FeatureNotSupported(tag))
}

/// Resolve the control code of `tag` with a fresh feature request.
///
/// Transport failures are returned as such; a reader that does not
/// advertise `tag` yields `Error::FeatureNotSupported`.
pub fn resolve(
    transport: &mut dyn Transport,
    platform: Platform,
    tag: FeatureTag,
) -> Result<ControlCode> {
    let table = discover_features(transport, platform)?;
    lookup(&table, tag)
}

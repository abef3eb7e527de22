//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::protocol::{Feature, FeatureTable};
use crate::session::{ReaderSession, SessionConfig};
use crate::transport::mock::MockTransport;
use crate::types::{ControlCode, FeatureTag, Platform};

/// Encode a feature-list response advertising the given (tag, code) pairs.
#[doc(hidden)]
pub fn feature_list(entries: &[(FeatureTag, u32)]) -> Vec<u8> {
    entries
        .iter()
        .map(|&(tag, code)| Feature::new(tag, ControlCode::new(code)))
        .collect::<FeatureTable>()
        .encode()
}

/// Build a MockTransport whose first control response is the given
/// feature list, followed by `responses` as-is.
#[doc(hidden)]
pub fn mock_with_features(entries: &[(FeatureTag, u32)], responses: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::new();
    mock.push_response(feature_list(entries));
    for resp in responses {
        mock.push_response(resp);
    }
    mock
}

/// Convenience: a caching pcsc-lite (Unix formula) session backed by
/// `mock_with_features`.
#[doc(hidden)]
pub fn mock_session(
    entries: &[(FeatureTag, u32)],
    responses: Vec<Vec<u8>>,
) -> ReaderSession<MockTransport> {
    let config = SessionConfig::new().with_platform(Platform::Unix);
    ReaderSession::with_config(mock_with_features(entries, responses), config)
}

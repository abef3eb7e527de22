// Shared helpers for integration tests. Each test crate pulls this in with
// `#[path = "../common/mod.rs"] mod common;`.
#![allow(dead_code)]


pub use fixtures::*;
pub use readerctl::test_support::{feature_list, mock_session, mock_with_features};

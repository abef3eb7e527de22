//! Utilities for readerctl: small, reusable helpers used across the crate.
//!
//! Hex rendering for log lines and diagnostics.

pub mod hex;

pub use hex::*;

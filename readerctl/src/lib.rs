// readerctl-rs/readerctl/src/lib.rs

//! readerctl
//!
//! PC/SC reader feature discovery (GET_FEATURE_REQUEST) and the control
//! frames behind FEATURE_EXECUTE_PACE and FEATURE_VERIFY_PIN_DIRECT.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;

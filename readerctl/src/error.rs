// readerctl-rs/readerctl/src/error.rs

use thiserror::Error;

use crate::types::FeatureTag;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(String),

    // PC/SC バックエンドを後から有効化できるように optional dependency にしている
    #[cfg(feature = "pcsc")]
    #[error("pcsc error: {0}")]
    Pcsc(#[from] pcsc::Error),

    #[error("reader not found: {0}")]
    ReaderNotFound(String),

    #[error("feature not supported by reader: {0}")]
    FeatureNotSupported(FeatureTag),

    #[error("malformed response: expected at least {expected} bytes, got {actual}")]
    MalformedResponse { expected: usize, actual: usize },

    #[error("reader reported failure: result code {code:#010x}")]
    ProtocolFailure { code: u32 },

    #[error("{field} too long: at most {max} bytes, got {actual}")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("unexpected status word: ({sw1:#04x}, {sw2:#04x})")]
    StatusWord { sw1: u8, sw2: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;

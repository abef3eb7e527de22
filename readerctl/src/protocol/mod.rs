// readerctl-rs/readerctl/src/protocol/mod.rs

pub mod feature;
pub mod ioctl;
pub mod pace;
pub mod parser;
pub mod pin_verify;
pub mod reader_info;
pub mod writer;

pub use feature::{Feature, FeatureTable};
pub use ioctl::{control_identifier, feature_request_identifier};
pub use pace::{PaceRequest, PaceResult, decode_capabilities, encode_get_capabilities};
pub use pin_verify::PinVerifyDirectRequest;
pub use reader_info::{decode_reader_info, encode_reader_info, reader_info_string};
pub use writer::{FrameWriter, LenWidth};

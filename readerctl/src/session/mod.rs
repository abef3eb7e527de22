// readerctl-rs/readerctl/src/session/mod.rs

pub mod builder;
pub mod config;
pub mod handle;
pub mod resolver;

pub use builder::ReaderSessionBuilder;
pub use config::SessionConfig;
pub use handle::ReaderSession;

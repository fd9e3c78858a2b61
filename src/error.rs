//! Crate error type.
//!
//! Event construction, access and dispatch never fail. Errors only come from the
//! plumbing around them: decoding raw discriminants, reading configuration, and
//! persisting event traces.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A raw byte did not name any known kind or phase.
    #[error("invalid {what} discriminant: {value}")]
    InvalidDiscriminant { what: &'static str, value: u8 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("event trace error: {0}")]
    Trace(#[from] serde_json::Error),

    #[cfg(feature = "hid")]
    #[error("HID error: {0}")]
    Hid(#[from] hidapi::HidError),
}

pub type Result<T> = std::result::Result<T, Error>;

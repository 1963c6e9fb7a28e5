//! Error types for Harf

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarfError>;

/// Main error type for Harf
///
/// Shaping and reordering are total over valid text, so every variant here
/// belongs to a boundary: decoding input, wiring a pipeline, or the CLI.
#[derive(Debug, Error)]
pub enum HarfError {
    #[error("Invalid text encoding: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    #[error("Unknown transform: {0}")]
    UnknownTransform(String),

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl From<std::string::FromUtf8Error> for HarfError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::InvalidEncoding(err.utf8_error())
    }
}

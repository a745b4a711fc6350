//! Error handling for the resume screener

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File size exceeds {limit_mb}MB limit ({size} bytes)")]
    FileTooLarge { size: u64, limit_mb: u64 },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, ScreenerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ScreenerError {
    fn from(err: anyhow::Error) -> Self {
        ScreenerError::Processing(err.to_string())
    }
}

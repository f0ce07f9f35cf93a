// Error handling for the position log formatter

use std::path::Path;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PoslogError>;

#[derive(Error, Debug)]
pub enum PoslogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad or missing configuration, or conflicting arguments.
    #[error("Config error: {0}")]
    Config(String),

    /// Malformed input row.
    #[error("Format error in {file} line {line}: {message}")]
    Format {
        file: String,
        line: u64,
        message: String,
    },

    /// Resampling requested outside the valid timestamp range.
    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Invalid magic bytes: expected {expected:?}, got {got:?}")]
    InvalidMagic { expected: Vec<u8>, got: Vec<u8> },

    #[error("Unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("Unsupported compression type: {0}")]
    UnsupportedCompression(u8),

    #[error("Compression failed: {0}")]
    CompressionFailed(String),

    #[error("Decompression failed: {0}")]
    DecompressionFailed(String),

    #[error("Corrupted data: {0}")]
    CorruptedData(String),
}

impl PoslogError {
    pub fn config(message: impl Into<String>) -> Self {
        PoslogError::Config(message.into())
    }

    pub fn domain(message: impl Into<String>) -> Self {
        PoslogError::Domain(message.into())
    }

    pub fn format(file: &Path, line: u64, message: impl Into<String>) -> Self {
        PoslogError::Format {
            file: file.display().to_string(),
            line,
            message: message.into(),
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, PoslogError::Config(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, PoslogError::Format { .. })
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, PoslogError::Domain(_))
    }
}

impl From<csv::Error> for PoslogError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(e) => PoslogError::Io(e),
            kind => PoslogError::Format {
                file: String::from("<csv>"),
                line,
                message: format!("{:?}", kind),
            },
        }
    }
}

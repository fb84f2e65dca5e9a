use thiserror::Error;

use crate::formats::Format;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Encode Failed ({format}): {reason}")]
    Encode { format: Format, reason: String },

    #[error("Decode Failed ({format}): {reason}")]
    Decode { format: Format, reason: String },

    #[error("Verification Failed ({format}): expected {expected} records, decoded {actual}")]
    Verification { format: Format, expected: usize, actual: usize },

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchError {
    pub fn encode(format: Format, err: impl std::fmt::Display) -> Self {
        BenchError::Encode { format, reason: err.to_string() }
    }

    pub fn decode(format: Format, err: impl std::fmt::Display) -> Self {
        BenchError::Decode { format, reason: err.to_string() }
    }
}

pub type BenchResult<T> = Result<T, BenchError>;

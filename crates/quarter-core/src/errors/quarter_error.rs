use super::config_error::ConfigError;
use super::error_code::{self, QuarterErrorCode};

/// Top-level error for the workspace.
#[derive(Debug, thiserror::Error)]
pub enum QuarterError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("sequence length mismatch: expected {expected} quarters, got {actual}")]
    SequenceLength { expected: usize, actual: usize },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type QuarterResult<T> = Result<T, QuarterError>;

impl QuarterErrorCode for QuarterError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(inner) => inner.error_code(),
            Self::SequenceLength { .. } => error_code::SEQUENCE_LENGTH,
            Self::SerializationError(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

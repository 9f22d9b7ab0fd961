//! Configuration errors.

use super::error_code::{self, QuarterErrorCode};

/// Errors raised while loading, validating, or constructing from a config.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("the default ratios defined ({actual}) do not match the number of quarters defined ({expected})")]
    RatioCountMismatch { expected: usize, actual: usize },

    #[error("quarter count must be greater than 0")]
    ZeroQuarters,

    #[error("default ratio at index {index} is invalid: {value}")]
    InvalidRatio { index: usize, value: f64 },

    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl QuarterErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RatioCountMismatch { .. } => error_code::RATIO_MISMATCH,
            _ => error_code::CONFIG_ERROR,
        }
    }
}

//! Stable error code strings for callers that cross a language boundary.

/// Every error enum implements this to expose a structured code.
pub trait QuarterErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RATIO_MISMATCH: &str = "RATIO_MISMATCH";
pub const SEQUENCE_LENGTH: &str = "SEQUENCE_LENGTH";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

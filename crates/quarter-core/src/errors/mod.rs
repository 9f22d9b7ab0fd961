//! Error handling for the quarter ratio allocator.
//! One error enum per subsystem, `thiserror` only.
//!
//! Only construction and config loading can fail. Allocation and
//! redistribution degrade degenerate numeric input to zero instead.

pub mod config_error;
pub mod error_code;
pub mod quarter_error;

pub use config_error::ConfigError;
pub use error_code::QuarterErrorCode;
pub use quarter_error::{QuarterError, QuarterResult};

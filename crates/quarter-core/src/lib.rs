//! # quarter-core
//!
//! Foundation crate for the quarter ratio allocator.
//! Defines the bucket model, value accessors, rounding modes, config, errors and traits.
//! Every other crate in the workspace depends on this.

pub mod bucket;
pub mod config;
pub mod errors;
pub mod rounding;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use bucket::{Bucket, BucketField, KeyedField, Quarter, ValueAccessor};
pub use config::{AllocatorConfig, ResolvedRatios};
pub use errors::{ConfigError, QuarterError, QuarterResult};
pub use rounding::RoundingMode;

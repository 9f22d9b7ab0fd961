//! Configuration for the quarter ratio allocator.
//! TOML-based, layered resolution: overrides > env > file > defaults.

pub mod allocator_config;
pub mod defaults;
pub mod resolved_ratios;

pub use allocator_config::{AllocatorConfig, ConfigOverrides};
pub use resolved_ratios::ResolvedRatios;

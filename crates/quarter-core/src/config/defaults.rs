// Single source of truth for all default values.

use crate::rounding::RoundingMode;

// --- Allocation ---
pub const DEFAULT_QUARTER_COUNT: usize = 4;
pub const DEFAULT_VALUE_KEY: &str = "value";
pub const DEFAULT_ROUNDING: RoundingMode = RoundingMode::Floor;

// --- Environment ---
pub const ENV_QUARTER_COUNT: &str = "QUARTER_COUNT";
pub const ENV_DEFAULT_RATIOS: &str = "QUARTER_DEFAULT_RATIOS";
pub const ENV_VALUE_KEY: &str = "QUARTER_VALUE_KEY";
pub const ENV_ROUNDING: &str = "QUARTER_ROUNDING";

// --- Observability ---
pub const ENV_LOG_FILTER: &str = "QUARTER_LOG";
pub const DEFAULT_LOG_FILTER: &str = "quarter=info";

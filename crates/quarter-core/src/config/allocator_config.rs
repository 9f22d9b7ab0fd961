//! Allocator configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::defaults;
use super::resolved_ratios::ResolvedRatios;
use crate::errors::ConfigError;
use crate::rounding::RoundingMode;

/// Configuration for a ratio allocator.
///
/// Resolution order for [`AllocatorConfig::load`] (highest priority first):
/// 1. Explicit overrides
/// 2. Environment variables (`QUARTER_*`)
/// 3. Config file
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    /// Number of quarters every sequence is expected to hold.
    pub quarter_count: usize,
    /// Fallback share per position. `None` means equal shares.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_ratios: Option<Vec<f64>>,
    /// Field holding the numeric value on keyed (JSON) records.
    pub value_key: String,
    /// Rounding applied to each raw allocation.
    pub rounding: RoundingMode,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            quarter_count: defaults::DEFAULT_QUARTER_COUNT,
            default_ratios: None,
            value_key: defaults::DEFAULT_VALUE_KEY.to_string(),
            rounding: defaults::DEFAULT_ROUNDING,
        }
    }
}

/// Explicit override arguments applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub quarter_count: Option<usize>,
    pub default_ratios: Option<Vec<f64>>,
    pub value_key: Option<String>,
    pub rounding: Option<RoundingMode>,
}

impl AllocatorConfig {
    /// Config for `count` quarters with equal default shares.
    pub fn with_quarters(count: usize) -> Self {
        Self {
            quarter_count: count,
            ..Self::default()
        }
    }

    pub fn default_ratios(mut self, ratios: Vec<f64>) -> Self {
        self.default_ratios = Some(ratios);
        self
    }

    pub fn rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn value_key(mut self, key: impl Into<String>) -> Self {
        self.value_key = key.into();
        self
    }

    /// Load configuration with layered resolution.
    ///
    /// A missing `path` is an error when given explicitly; pass `None` to
    /// resolve from environment and defaults only.
    pub fn load(
        path: Option<&Path>,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides_from(|key| std::env::var(key).ok());

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `QUARTER_*` overrides using `lookup` to read variables.
    /// Values that fail to parse are skipped with a warning.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(defaults::ENV_QUARTER_COUNT) {
            match val.trim().parse::<usize>() {
                Ok(v) => self.quarter_count = v,
                Err(_) => warn!(var = defaults::ENV_QUARTER_COUNT, value = %val, "ignoring unparseable override"),
            }
        }
        if let Some(val) = lookup(defaults::ENV_DEFAULT_RATIOS) {
            let parsed: Result<Vec<f64>, _> =
                val.split(',').map(|part| part.trim().parse::<f64>()).collect();
            match parsed {
                Ok(v) => self.default_ratios = Some(v),
                Err(_) => warn!(var = defaults::ENV_DEFAULT_RATIOS, value = %val, "ignoring unparseable override"),
            }
        }
        if let Some(val) = lookup(defaults::ENV_VALUE_KEY) {
            self.value_key = val;
        }
        if let Some(val) = lookup(defaults::ENV_ROUNDING) {
            match val.parse::<RoundingMode>() {
                Ok(v) => self.rounding = v,
                Err(_) => warn!(var = defaults::ENV_ROUNDING, value = %val, "ignoring unparseable override"),
            }
        }
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.quarter_count {
            self.quarter_count = v;
        }
        if let Some(ref v) = overrides.default_ratios {
            self.default_ratios = Some(v.clone());
        }
        if let Some(ref v) = overrides.value_key {
            self.value_key = v.clone();
        }
        if let Some(v) = overrides.rounding {
            self.rounding = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quarter_count == 0 {
            return Err(ConfigError::ZeroQuarters);
        }
        if let Some(ref ratios) = self.default_ratios {
            if ratios.len() != self.quarter_count {
                return Err(ConfigError::RatioCountMismatch {
                    expected: self.quarter_count,
                    actual: ratios.len(),
                });
            }
            if let Some((index, &value)) = ratios
                .iter()
                .enumerate()
                .find(|(_, r)| !r.is_finite() || **r < 0.0)
            {
                return Err(ConfigError::InvalidRatio { index, value });
            }
        }
        if self.value_key.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "value_key".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Validate and derive the default ratio vector.
    pub fn resolve_ratios(&self) -> Result<ResolvedRatios, ConfigError> {
        self.validate()?;
        Ok(match self.default_ratios {
            Some(ref ratios) => ResolvedRatios::new(ratios.clone()),
            None => ResolvedRatios::equal_shares(self.quarter_count),
        })
    }
}

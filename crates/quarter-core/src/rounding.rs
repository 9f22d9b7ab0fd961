use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a raw fractional allocation is turned into the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Largest integer ≤ value.
    #[default]
    Floor,
    /// Smallest integer ≥ value.
    #[serde(alias = "ceiling")]
    Ceil,
    /// Nearest integer, halves away from zero.
    #[serde(alias = "nearest")]
    Round,
    /// Keep the fractional value.
    None,
}

impl RoundingMode {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Floor => value.floor(),
            Self::Ceil => value.ceil(),
            Self::Round => value.round(),
            Self::None => value,
        }
    }

    /// Whether this mode always produces integer values for finite input.
    pub fn is_integral(self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::None => "none",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "floor" => Ok(Self::Floor),
            "ceil" | "ceiling" => Ok(Self::Ceil),
            "round" | "nearest" => Ok(Self::Round),
            "none" => Ok(Self::None),
            other => Err(format!("unknown rounding mode: {other}")),
        }
    }
}

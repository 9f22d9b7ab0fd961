use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Bucket;

/// A quarter with a numeric value and any number of pass-through fields.
///
/// Extra fields are flattened on (de)serialization, so `{"value": 10, "label": "Q1"}`
/// round-trips with `label` untouched by the allocator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Quarter {
    pub value: f64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Quarter {
    /// Create a quarter with no extra fields.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            fields: Map::new(),
        }
    }

    /// Attach an extra field, builder style.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Build a sequence of plain quarters from values.
    pub fn from_values(values: &[f64]) -> Vec<Self> {
        values.iter().copied().map(Self::new).collect()
    }
}

impl Bucket for Quarter {
    fn value(&self) -> f64 {
        self.value
    }

    fn with_value(&self, value: f64) -> Self {
        Self {
            value,
            fields: self.fields.clone(),
        }
    }
}

impl From<f64> for Quarter {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

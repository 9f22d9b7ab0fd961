use serde_json::{Map, Number, Value};

use super::Bucket;

/// Reads and writes the value field of a bucket type.
///
/// `read` returns `None` when the value is undefined or not a number. The
/// allocator treats such buckets as carrying no usable signal.
pub trait ValueAccessor<B>: Send + Sync {
    fn read(&self, bucket: &B) -> Option<f64>;

    /// Structural copy of `bucket` with its value replaced.
    fn write(&self, bucket: &B, value: f64) -> B;
}

/// Accessor for any [`Bucket`] type. NaN values read as undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketField;

impl<B: Bucket> ValueAccessor<B> for BucketField {
    fn read(&self, bucket: &B) -> Option<f64> {
        let value = bucket.value();
        (!value.is_nan()).then_some(value)
    }

    fn write(&self, bucket: &B, value: f64) -> B {
        bucket.with_value(value)
    }
}

/// Accessor for dynamic JSON records whose value lives under a configured key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedField {
    key: String,
}

impl KeyedField {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl ValueAccessor<Map<String, Value>> for KeyedField {
    fn read(&self, bucket: &Map<String, Value>) -> Option<f64> {
        bucket
            .get(&self.key)
            .and_then(Value::as_f64)
            .filter(|v| !v.is_nan())
    }

    fn write(&self, bucket: &Map<String, Value>, value: f64) -> Map<String, Value> {
        let mut copy = bucket.clone();
        copy.insert(self.key.clone(), number_value(value));
        copy
    }
}

/// Integral values are stored as JSON integers so `60.0` serializes as `60`.
/// Non-finite values have no JSON representation and become `null`.
fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        return Value::Number(Number::from(value as i64));
    }
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

//! The bucket model: anything with one numeric value field that can be
//! structurally copied with a new value.

pub mod accessor;
pub mod quarter;

pub use accessor::{BucketField, KeyedField, ValueAccessor};
pub use quarter::Quarter;

/// A record carrying a single numeric value.
///
/// `with_value` must return a new record equal to `self` in every field
/// except the value. Callers' records are never mutated in place.
pub trait Bucket: Clone {
    /// The current numeric value.
    fn value(&self) -> f64;

    /// A copy of this bucket carrying `value`.
    fn with_value(&self, value: f64) -> Self;
}

impl Bucket for f64 {
    fn value(&self) -> f64 {
        *self
    }

    fn with_value(&self, value: f64) -> Self {
        value
    }
}

//! A live quarter sequence bound to a total.
//!
//! This is the consumer side of the engine: a form or dashboard keeps one
//! board, seeds it with the current quarters, and pushes every new total
//! through [`QuarterBoard::set_total`].

use std::sync::Arc;

use quarter_core::errors::{QuarterError, QuarterResult};
use quarter_core::traits::IQuarterAllocator;
use quarter_core::Bucket;
use tracing::debug;

pub struct QuarterBoard<B> {
    allocator: Arc<dyn IQuarterAllocator<B>>,
    quarters: Vec<B>,
    total: f64,
}

impl<B: Bucket> QuarterBoard<B> {
    /// Seed a board. The initial total is the sum of the quarters' values.
    pub fn new(allocator: Arc<dyn IQuarterAllocator<B>>, quarters: Vec<B>) -> QuarterResult<Self> {
        let expected = allocator.quarter_count();
        if quarters.len() != expected {
            return Err(QuarterError::SequenceLength {
                expected,
                actual: quarters.len(),
            });
        }
        let total = sum_defined(&quarters);
        Ok(Self {
            allocator,
            quarters,
            total,
        })
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn quarters(&self) -> &[B] {
        &self.quarters
    }

    pub fn into_quarters(self) -> Vec<B> {
        self.quarters
    }

    /// Spread a new total across the quarters, replacing the live sequence.
    pub fn set_total(&mut self, total: f64) {
        self.quarters = self.allocator.distribute(total, &self.quarters);
        self.total = total;
        debug!(total, "board total updated");
    }

    /// Edit a single quarter and recompute the total from the sequence.
    /// Returns false when `index` is out of range.
    pub fn set_quarter(&mut self, index: usize, value: f64) -> bool {
        let Some(slot) = self.quarters.get_mut(index) else {
            return false;
        };
        *slot = slot.with_value(value);
        self.total = sum_defined(&self.quarters);
        true
    }
}

/// Sum of quarter values, skipping NaN.
fn sum_defined<B: Bucket>(quarters: &[B]) -> f64 {
    quarters
        .iter()
        .map(Bucket::value)
        .filter(|v| !v.is_nan())
        .sum()
}

//! Remainder redistribution.
//!
//! After rounding, the quarters can miss the total by a few units. The gap is
//! split into unit adjustments and walked across the active quarters (value
//! ≥ 1), one unit each: front to back when the total grew, back to front when
//! it shrank. Whatever the walk cannot place one-per-quarter is folded onto
//! the first quarter the walk touches.

use quarter_core::ValueAccessor;
use serde::Serialize;
use tracing::warn;

use crate::allocation::sum_values;

/// A quarter is eligible for an adjustment once it holds at least one unit.
pub const ACTIVE_THRESHOLD: f64 = 1.0;

/// Call-scoped redistribution plan: one adjustment per position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemainderPlan {
    /// `total - sum(values)`.
    pub remainder: f64,
    /// Whole units to place, `trunc(|remainder|)`.
    pub units: usize,
    /// Number of quarters eligible for an adjustment.
    pub active: usize,
    /// Units beyond one-per-active-quarter, folded onto the first quarter walked.
    pub excess: usize,
    pub adjustments: Vec<f64>,
}

impl RemainderPlan {
    /// Build the plan for bringing `quarters` to `total`.
    pub fn build<B, A>(accessor: &A, total: f64, quarters: &[B]) -> Self
    where
        A: ValueAccessor<B> + ?Sized,
    {
        let remainder = total - sum_values(accessor, quarters);
        let mut adjustments = vec![0.0; quarters.len()];

        if !remainder.is_finite() {
            return Self {
                remainder,
                units: 0,
                active: 0,
                excess: 0,
                adjustments,
            };
        }

        let active_flags: Vec<bool> = quarters
            .iter()
            .map(|q| accessor.read(q).is_some_and(|v| v >= ACTIVE_THRESHOLD))
            .collect();
        let active = active_flags.iter().filter(|&&flag| flag).count();

        let units = remainder.abs().trunc() as usize;
        let excess = units.saturating_sub(active);
        let step = if remainder < 0.0 { -1.0 } else { 1.0 };

        let mut order: Vec<usize> = (0..quarters.len()).collect();
        if remainder < 0.0 {
            order.reverse();
        }

        let mut pending = units;
        let mut extra = excess as f64 * step;
        for index in order.into_iter().filter(|&i| active_flags[i]) {
            if pending == 0 {
                break;
            }
            adjustments[index] = step + extra;
            extra = 0.0;
            pending -= 1;
        }

        Self {
            remainder,
            units,
            active,
            excess,
            adjustments,
        }
    }

    /// Sum of all planned adjustments.
    pub fn applied(&self) -> f64 {
        self.adjustments.iter().sum()
    }

    /// Part of the remainder the plan leaves unplaced.
    pub fn unabsorbed(&self) -> f64 {
        if self.remainder.is_finite() {
            self.remainder - self.applied()
        } else {
            self.remainder
        }
    }
}

/// Redistributed quarters plus the figures behind the correction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemainderBreakdown<B> {
    pub quarters: Vec<B>,
    pub remainder: f64,
    pub units: usize,
    pub active: usize,
    pub excess: usize,
    pub unabsorbed: f64,
}

impl<B> RemainderBreakdown<B> {
    /// True when the output sums exactly to the requested total.
    pub fn is_exact(&self) -> bool {
        self.unabsorbed == 0.0
    }
}

/// Redistribute the gap between `total` and the sum of `quarters`.
pub fn redistribute<B, A>(accessor: &A, total: f64, quarters: &[B]) -> RemainderBreakdown<B>
where
    A: ValueAccessor<B> + ?Sized,
    B: Clone,
{
    let plan = RemainderPlan::build(accessor, total, quarters);
    let unabsorbed = plan.unabsorbed();

    if !plan.remainder.is_finite() {
        warn!(total, remainder = plan.remainder, "non-finite remainder, leaving quarters unchanged");
    } else if plan.units > 0 && plan.active == 0 {
        warn!(total, units = plan.units, "no active quarter to absorb the remainder");
    }

    let quarters = quarters
        .iter()
        .zip(&plan.adjustments)
        .map(|(quarter, &adjustment)| match accessor.read(quarter) {
            Some(value) if adjustment != 0.0 => accessor.write(quarter, value + adjustment),
            _ => quarter.clone(),
        })
        .collect();

    RemainderBreakdown {
        quarters,
        remainder: plan.remainder,
        units: plan.units,
        active: plan.active,
        excess: plan.excess,
        unabsorbed,
    }
}

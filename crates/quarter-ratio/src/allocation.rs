//! Ratio allocation.
//!
//! Two phases: [`AllocationContext`] is computed once from the untouched
//! input, then every quarter is mapped through it. The use-defaults decision
//! never sees partially transformed state.

use quarter_core::{ResolvedRatios, RoundingMode, ValueAccessor};
use serde::Serialize;

/// Call-scoped allocation decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllocationContext {
    /// True when no quarter carries a value greater than 0.
    pub use_defaults: bool,
    /// Sum of the input values. NaN when any value is undefined.
    pub current_sum: f64,
}

impl AllocationContext {
    pub fn from_quarters<B, A>(accessor: &A, quarters: &[B]) -> Self
    where
        A: ValueAccessor<B> + ?Sized,
    {
        let use_defaults = !quarters
            .iter()
            .any(|q| accessor.read(q).is_some_and(|v| v > 0.0));

        Self {
            use_defaults,
            current_sum: sum_values(accessor, quarters),
        }
    }

    /// Ratio for the quarter at `index` whose value reads as `part`.
    pub fn ratio(&self, index: usize, part: Option<f64>, defaults: &ResolvedRatios) -> f64 {
        if self.use_defaults {
            defaults.get(index)
        } else {
            safe_ratio(self.current_sum, part)
        }
    }
}

/// Sum of quarter values. An undefined value makes the sum NaN.
pub fn sum_values<B, A>(accessor: &A, quarters: &[B]) -> f64
where
    A: ValueAccessor<B> + ?Sized,
{
    quarters
        .iter()
        .fold(0.0, |acc, q| acc + accessor.read(q).unwrap_or(f64::NAN))
}

/// `part / total`, or 0 for a zero/NaN divisor, an undefined part, or a
/// non-finite quotient.
pub fn safe_ratio(total: f64, part: Option<f64>) -> f64 {
    if total.is_nan() || total == 0.0 {
        return 0.0;
    }
    match part {
        Some(part) if !part.is_nan() => {
            let ratio = part / total;
            if ratio.is_finite() {
                ratio
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

/// Allocate `total` across `quarters` and round each share.
pub fn allocate<B, A>(
    accessor: &A,
    defaults: &ResolvedRatios,
    rounding: RoundingMode,
    total: f64,
    quarters: &[B],
) -> (AllocationContext, Vec<B>)
where
    A: ValueAccessor<B> + ?Sized,
{
    let ctx = AllocationContext::from_quarters(accessor, quarters);
    let allocated = quarters
        .iter()
        .enumerate()
        .map(|(index, quarter)| {
            let ratio = ctx.ratio(index, accessor.read(quarter), defaults);
            accessor.write(quarter, rounding.apply(total * ratio))
        })
        .collect();
    (ctx, allocated)
}

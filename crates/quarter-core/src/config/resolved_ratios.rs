use serde::Serialize;

/// Validated default ratios, one per quarter position.
///
/// Produced only by [`AllocatorConfig::resolve_ratios`](super::AllocatorConfig::resolve_ratios),
/// so the length always equals the configured quarter count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRatios(Vec<f64>);

impl ResolvedRatios {
    pub(crate) fn new(ratios: Vec<f64>) -> Self {
        Self(ratios)
    }

    /// Equal shares of `1 / count`.
    pub(crate) fn equal_shares(count: usize) -> Self {
        let share = 1.0 / count as f64;
        Self(vec![share; count])
    }

    /// Ratio for a position. Positions past the configured count get 0.
    pub fn get(&self, index: usize) -> f64 {
        self.0.get(index).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Sum of all ratios. Not required to be 1.0.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

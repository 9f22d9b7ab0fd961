/// Proportional allocation over a fixed-size quarter sequence.
///
/// Implementations are pure: inputs are borrowed, results are new sequences.
pub trait IQuarterAllocator<B>: Send + Sync {
    /// Number of quarters a sequence is expected to hold.
    fn quarter_count(&self) -> usize;

    /// Spread `total` across `quarters` by learned or default ratio, rounded.
    fn allocate(&self, total: f64, quarters: &[B]) -> Vec<B>;

    /// Correct the rounding gap so values sum to `total`.
    fn redistribute(&self, total: f64, quarters: &[B]) -> Vec<B>;

    /// Allocate then redistribute.
    fn distribute(&self, total: f64, quarters: &[B]) -> Vec<B> {
        let allocated = self.allocate(total, quarters);
        self.redistribute(total, &allocated)
    }
}

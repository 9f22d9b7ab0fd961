use quarter_core::errors::ConfigError;
use quarter_core::traits::IQuarterAllocator;
use quarter_core::{
    allocate_span, redistribute_span, AllocatorConfig, BucketField, KeyedField, ResolvedRatios,
    RoundingMode, ValueAccessor,
};
use tracing::{debug, info};

use crate::allocation;
use crate::remainder::{self, RemainderBreakdown};

/// Ratio allocation engine: learned or default ratios, rounding, and
/// sum-preserving remainder redistribution.
///
/// The engine holds only its validated configuration and accessor, both
/// read-only, so one instance can serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct QuarterRatioEngine<A = BucketField> {
    config: AllocatorConfig,
    ratios: ResolvedRatios,
    accessor: A,
}

impl QuarterRatioEngine<BucketField> {
    /// Create an engine over typed [`Bucket`](quarter_core::Bucket) quarters.
    pub fn new(config: AllocatorConfig) -> Result<Self, ConfigError> {
        Self::with_accessor(config, BucketField)
    }
}

impl QuarterRatioEngine<KeyedField> {
    /// Create an engine over JSON records, reading the value from `config.value_key`.
    pub fn keyed(config: AllocatorConfig) -> Result<Self, ConfigError> {
        let accessor = KeyedField::new(config.value_key.clone());
        Self::with_accessor(config, accessor)
    }
}

impl<A> QuarterRatioEngine<A> {
    /// Create an engine with a custom value accessor.
    ///
    /// Fails when the config does not validate, most notably when the number
    /// of default ratios differs from the quarter count.
    pub fn with_accessor(config: AllocatorConfig, accessor: A) -> Result<Self, ConfigError> {
        let ratios = config.resolve_ratios()?;
        info!(
            quarter_count = config.quarter_count,
            rounding = %config.rounding,
            "quarter ratio engine ready"
        );
        Ok(Self {
            config,
            ratios,
            accessor,
        })
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    pub fn default_ratios(&self) -> &ResolvedRatios {
        &self.ratios
    }

    pub fn rounding(&self) -> RoundingMode {
        self.config.rounding
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    /// Spread `total` across `quarters`.
    ///
    /// Ratios come from the quarters' current values relative to their sum,
    /// or from the configured defaults when no quarter is above 0. Each raw
    /// share is rounded with the configured mode; the result may miss the
    /// total by a few units until [`redistribute`](Self::redistribute) runs.
    pub fn allocate<B>(&self, total: f64, quarters: &[B]) -> Vec<B>
    where
        A: ValueAccessor<B>,
    {
        let _span = allocate_span!(total, quarters.len()).entered();
        let (ctx, allocated) = allocation::allocate(
            &self.accessor,
            &self.ratios,
            self.config.rounding,
            total,
            quarters,
        );
        debug!(
            use_defaults = ctx.use_defaults,
            current_sum = ctx.current_sum,
            "allocated"
        );
        allocated
    }

    /// Correct the gap between `total` and the sum of `quarters`.
    pub fn redistribute<B>(&self, total: f64, quarters: &[B]) -> Vec<B>
    where
        A: ValueAccessor<B>,
        B: Clone,
    {
        self.redistribute_breakdown(total, quarters).quarters
    }

    /// Like [`redistribute`](Self::redistribute), also reporting the remainder,
    /// the active quarter count, and any part that could not be placed.
    pub fn redistribute_breakdown<B>(&self, total: f64, quarters: &[B]) -> RemainderBreakdown<B>
    where
        A: ValueAccessor<B>,
        B: Clone,
    {
        let _span = redistribute_span!(total, quarters.len()).entered();
        let breakdown = remainder::redistribute(&self.accessor, total, quarters);
        debug!(
            remainder = breakdown.remainder,
            units = breakdown.units,
            active = breakdown.active,
            excess = breakdown.excess,
            "redistributed"
        );
        breakdown
    }

    /// Allocate then redistribute: the full recomputation for a new total.
    pub fn distribute<B>(&self, total: f64, quarters: &[B]) -> Vec<B>
    where
        A: ValueAccessor<B>,
        B: Clone,
    {
        let allocated = self.allocate(total, quarters);
        self.redistribute(total, &allocated)
    }
}

impl<A, B> IQuarterAllocator<B> for QuarterRatioEngine<A>
where
    A: ValueAccessor<B>,
    B: Clone,
{
    fn quarter_count(&self) -> usize {
        self.config.quarter_count
    }

    fn allocate(&self, total: f64, quarters: &[B]) -> Vec<B> {
        QuarterRatioEngine::allocate(self, total, quarters)
    }

    fn redistribute(&self, total: f64, quarters: &[B]) -> Vec<B> {
        QuarterRatioEngine::redistribute(self, total, quarters)
    }
}

use quarter_core::{AllocatorConfig, Quarter, RoundingMode};
use quarter_ratio::QuarterRatioEngine;
use proptest::prelude::*;

fn arb_integral_rounding() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::Floor),
        Just(RoundingMode::Ceil),
        Just(RoundingMode::Round),
    ]
}

fn arb_priors() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0u32..1000).prop_map(f64::from), 1..16)
}

fn engine_for(len: usize, rounding: RoundingMode) -> QuarterRatioEngine {
    QuarterRatioEngine::new(AllocatorConfig::with_quarters(len).rounding(rounding)).unwrap()
}

fn sum(quarters: &[Quarter]) -> f64 {
    quarters.iter().map(|q| q.value).sum()
}

// ── Sum preservation ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn distribute_sums_to_total(
        priors in arb_priors(),
        total in 0u32..100_000,
        rounding in arb_integral_rounding(),
    ) {
        let total = f64::from(total);
        let engine = engine_for(priors.len(), rounding);
        let allocated = engine.allocate(total, &Quarter::from_values(&priors));
        let breakdown = engine.redistribute_breakdown(total, &allocated);

        if breakdown.active > 0 || breakdown.remainder == 0.0 {
            prop_assert_eq!(sum(&breakdown.quarters), total);
            prop_assert!(breakdown.is_exact());
        } else {
            // Every share rounded below one unit: nothing can take the remainder.
            prop_assert_eq!(breakdown.unabsorbed, breakdown.remainder);
        }
    }
}

proptest! {
    #[test]
    fn totals_of_at_least_one_unit_per_quarter_are_exact(
        priors in arb_priors(),
        extra in 0u32..50_000,
        rounding in arb_integral_rounding(),
    ) {
        // With defaults or learned ratios, a total this large leaves at least one active quarter.
        let total = f64::from(extra) + priors.len() as f64 * 2.0;
        let engine = engine_for(priors.len(), rounding);
        let out = engine.distribute(total, &Quarter::from_values(&priors));
        prop_assert_eq!(sum(&out), total);
    }
}

// ── Shape ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn output_length_matches_input(
        priors in arb_priors(),
        total in 0.0f64..10_000.0,
    ) {
        let engine = engine_for(priors.len(), RoundingMode::None);
        let quarters = Quarter::from_values(&priors);
        prop_assert_eq!(engine.allocate(total, &quarters).len(), priors.len());
        prop_assert_eq!(engine.distribute(total, &quarters).len(), priors.len());
    }
}

proptest! {
    #[test]
    fn zero_priors_never_gain_a_learned_share(
        priors in arb_priors(),
        total in 0u32..100_000,
    ) {
        prop_assume!(priors.iter().any(|&v| v > 0.0));
        let engine = engine_for(priors.len(), RoundingMode::Floor);
        let out = engine.distribute(f64::from(total), &Quarter::from_values(&priors));
        for (prior, quarter) in priors.iter().zip(&out) {
            if *prior == 0.0 {
                prop_assert_eq!(quarter.value, 0.0);
            }
        }
    }
}

// ── Purity ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn input_is_never_mutated(
        priors in arb_priors(),
        total in 0u32..100_000,
        rounding in arb_integral_rounding(),
    ) {
        let engine = engine_for(priors.len(), rounding);
        let quarters: Vec<Quarter> = priors
            .iter()
            .enumerate()
            .map(|(i, &v)| Quarter::new(v).with_field("position", i as u64))
            .collect();
        let snapshot = quarters.clone();

        let out = engine.distribute(f64::from(total), &quarters);
        prop_assert_eq!(&quarters, &snapshot);
        for (before, after) in snapshot.iter().zip(&out) {
            prop_assert_eq!(&before.fields, &after.fields);
        }
    }
}

proptest! {
    #[test]
    fn equal_configs_are_interchangeable(
        priors in arb_priors(),
        total in 0u32..100_000,
        rounding in arb_integral_rounding(),
    ) {
        let a = engine_for(priors.len(), rounding);
        let b = engine_for(priors.len(), rounding);
        prop_assert_eq!(
            a.distribute(f64::from(total), &priors),
            b.distribute(f64::from(total), &priors)
        );
    }
}

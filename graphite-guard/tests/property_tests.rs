//! Property-based tests for the aggregation engine.
//!
//! Samples are generated as finite floats in a bounded range with a
//! controlled share of nulls, so sums stay far away from overflow and the
//! tolerance used for float comparisons stays meaningful.

use graphite_guard::aggregation::{null_count, quantile, remove_nulls, Aggregation, AggregationError};
use proptest::prelude::*;

const VALUE_AGGREGATIONS: [Aggregation; 8] = [
    Aggregation::Avg,
    Aggregation::Sum,
    Aggregation::Min,
    Aggregation::Max,
    Aggregation::Median,
    Aggregation::P95,
    Aggregation::P99,
    Aggregation::P999,
];

fn value() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(value(), 1..200)
}

fn samples() -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(prop::option::weighted(0.7, value()), 0..200)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn sum_is_n_times_avg(vs in values()) {
        let samples: Vec<Option<f64>> = vs.iter().copied().map(Some).collect();
        let sum = Aggregation::Sum.apply(&samples).unwrap();
        let avg = Aggregation::Avg.apply(&samples).unwrap();
        prop_assert!(close(sum, vs.len() as f64 * avg), "sum {} avg {} n {}", sum, avg, vs.len());
    }

    #[test]
    fn median_is_between_min_and_max(samples in samples()) {
        prop_assume!(samples.iter().any(Option::is_some));
        let min = Aggregation::Min.apply(&samples).unwrap();
        let median = Aggregation::Median.apply(&samples).unwrap();
        let max = Aggregation::Max.apply(&samples).unwrap();
        prop_assert!(min <= median && median <= max);
    }

    #[test]
    fn quantile_returns_a_member(vs in values(), q in 0.0..1.0f64) {
        let picked = quantile(&vs, q).unwrap();
        prop_assert!(vs.contains(&picked));
    }

    #[test]
    fn quantile_ignores_input_order(vs in values(), q in 0.0..1.0f64) {
        let mut reversed = vs.clone();
        reversed.reverse();
        let mut rotated = vs.clone();
        rotated.rotate_left(vs.len() / 2);

        let expected = quantile(&vs, q);
        prop_assert_eq!(quantile(&reversed, q), expected);
        prop_assert_eq!(quantile(&rotated, q), expected);
    }

    #[test]
    fn quantile_matches_floor_index(vs in values(), q in 0.0..1.0f64) {
        let mut sorted = vs.clone();
        sorted.sort_by(f64::total_cmp);
        let index = ((sorted.len() as f64 * q).floor() as usize).min(sorted.len() - 1);
        prop_assert_eq!(quantile(&vs, q), Some(sorted[index]));
    }

    #[test]
    fn null_count_plus_values_is_len(samples in samples()) {
        prop_assert_eq!(null_count(&samples) + remove_nulls(&samples).len(), samples.len());
        let nullcnt = Aggregation::NullCount.apply(&samples).unwrap();
        prop_assert_eq!(nullcnt, null_count(&samples) as f64);
    }

    #[test]
    fn null_pct_is_count_over_len(samples in samples()) {
        let pct = Aggregation::NullPercent.apply(&samples).unwrap();
        if samples.is_empty() {
            prop_assert_eq!(pct, 0.0);
        } else {
            let cnt = Aggregation::NullCount.apply(&samples).unwrap();
            prop_assert_eq!(pct, cnt / samples.len() as f64);
        }
        prop_assert!((0.0..=1.0).contains(&pct));
    }

    #[test]
    fn value_aggregations_fail_on_all_nulls(n in 0usize..50) {
        let samples = vec![None; n];
        for agg in VALUE_AGGREGATIONS {
            prop_assert_eq!(agg.apply(&samples), Err(AggregationError::OnlyNulls));
        }
        prop_assert_eq!(Aggregation::NullCount.apply(&samples), Ok(n as f64));
    }

    #[test]
    fn nulls_do_not_change_value_aggregations(vs in values(), gaps in prop::collection::vec(any::<bool>(), 1..200)) {
        let plain: Vec<Option<f64>> = vs.iter().copied().map(Some).collect();
        let mut gappy = Vec::new();
        for (i, v) in vs.iter().enumerate() {
            if gaps[i % gaps.len()] {
                gappy.push(None);
            }
            gappy.push(Some(*v));
        }
        for agg in VALUE_AGGREGATIONS {
            prop_assert_eq!(agg.apply(&plain), agg.apply(&gappy));
        }
    }
}

#[test]
fn median_of_two_picks_upper() {
    assert_eq!(Aggregation::Median.apply(&[Some(1.1), None, Some(3.3)]), Ok(3.3));
}

#[test]
fn p999_of_one_sample_is_that_sample() {
    assert_eq!(Aggregation::P999.apply(&[Some(5.0)]), Ok(5.0));
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the metrics engine.
//!
//! These tests validate that the engine:
//! - Rejects invalid arguments before computing anything
//! - Returns identical records on repeated calls
//! - Keeps its primality caches consistent with trial division
//! - Keeps independent engines isolated

mod common;

use common::naive_is_prime;
use strum::IntoEnumIterator;
use tree_metrics::state::Counters;
use tree_metrics::{Metric, MetricsEngine, MetricsError, TreeIndex};

fn assert_invalid(result: Result<tree_metrics::MetricsRecord, MetricsError>) {
    assert!(
        matches!(result, Err(MetricsError::InvalidArgument { .. })),
        "expected invalid argument, got {:?}",
        result
    );
}

#[test]
fn test_invalid_arguments_compute_nothing() {
    let mut engine = MetricsEngine::new();
    assert_invalid(engine.compute_all_metrics(0));
    assert_invalid(engine.compute_all_metrics(-5));
    assert_invalid(engine.compute_all_metrics(2.5));
    assert_invalid(engine.compute_all_metrics(f64::NAN));
    assert_invalid(engine.compute_all_metrics("seven"));

    assert_eq!(engine.statistics().get(Counters::RejectedArguments), 5);
    assert_eq!(engine.statistics().get(Counters::RecordsComputed), 0);
    assert_eq!(engine.statistics().total_misses(), 0);
    assert_eq!(engine.tables().total_entries(), 0);
    assert_eq!(engine.sieve().checked_through(), 3);
}

#[test]
fn test_accepts_integral_inputs_of_any_kind() {
    let mut engine = MetricsEngine::new();
    let expected = engine.compute_all_metrics(12).unwrap();
    assert_eq!(engine.compute_all_metrics(12u64).unwrap(), expected);
    assert_eq!(engine.compute_all_metrics(12i64).unwrap(), expected);
    assert_eq!(engine.compute_all_metrics(12.0).unwrap(), expected);
    assert_eq!(engine.compute_all_metrics("12").unwrap(), expected);
    assert_eq!(engine.metrics_of(TreeIndex::new(12)), expected);
}

#[test]
fn test_compute_all_metrics_is_idempotent() {
    let mut engine = MetricsEngine::new();
    let first = engine.compute_all_metrics(2310).unwrap();
    let misses = engine.statistics().total_misses();
    let hits = engine.statistics().total_hits();

    let second = engine.compute_all_metrics(2310).unwrap();
    assert_eq!(first, second);
    // Second call is answered entirely from the memo tables.
    assert_eq!(engine.statistics().total_misses(), misses);
    assert_eq!(
        engine.statistics().total_hits(),
        hits + Metric::iter().count() as u64
    );
}

#[test]
fn test_sieve_stays_consistent_with_trial_division() {
    let mut engine = MetricsEngine::new();
    let n = 5000;
    for m in [n, 4999, 4096, 1] {
        engine.compute_all_metrics(m).unwrap();
    }
    for x in 0..=n {
        assert_eq!(engine.is_prime(x), naive_is_prime(x), "is_prime({})", x);
    }
    let primes = engine.sieve().primes();
    assert!(primes.windows(2).all(|w| w[0] < w[1]));
    assert!(primes.iter().all(|&p| naive_is_prime(p)));
}

#[test]
fn test_prime_positions() {
    let mut engine = MetricsEngine::new();
    assert_eq!(engine.prime_position(2), Some(1));
    assert_eq!(engine.prime_position(97), Some(25));
    assert_eq!(engine.prime_position(1_000_003), Some(78_499));
    assert_eq!(engine.prime_position(1_000_001), None);
    assert_eq!(engine.nth_prime(78_499), Some(1_000_003));
}

#[test]
fn test_independent_engines() {
    let mut warm = MetricsEngine::new();
    for n in 1..=300 {
        warm.compute_all_metrics(n).unwrap();
    }
    let cold = MetricsEngine::new();
    assert_eq!(cold.tables().total_entries(), 0);
    assert_eq!(cold.sieve().checked_through(), 3);

    let mut cold = cold;
    assert_eq!(
        cold.compute_all_metrics(300).unwrap(),
        warm.compute_all_metrics(300).unwrap()
    );
}

#[test]
fn test_memo_tables_are_private_per_metric() {
    let mut engine = MetricsEngine::new();
    engine.vertices(TreeIndex::new(360));
    assert!(!engine.tables().table(Metric::Vertices).is_empty());
    assert!(engine.tables().table(Metric::Edges).is_empty());
    assert!(engine.tables().table(Metric::Height).is_empty());
}

#[test]
fn test_large_prime_argument() {
    let mut engine = MetricsEngine::new();
    let record = engine.compute_all_metrics(1_000_003).unwrap();
    assert_eq!(record.edges, record.vertices - 1);
    assert_eq!(record.number_of_prime_factors, 1);
    // A prime is planted on its rank: one new root above tree(78499).
    let below = engine.compute_all_metrics(78_499).unwrap();
    assert_eq!(record.vertices, below.vertices + 1);
    assert_eq!(record.height, below.height + 1);
    assert_eq!(record.leaves, below.leaves);
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compare the recursion against a direct traversal of the explicit tree.

mod common;

use common::ExplicitTree;
use tree_metrics::MetricsEngine;

#[test]
fn test_recursion_matches_explicit_tree() {
    let mut engine = MetricsEngine::new();
    for n in 1..=600 {
        let tree = ExplicitTree::of(n);
        let expected = tree.record(n);
        let actual = engine.compute_all_metrics(n).unwrap();
        assert_eq!(actual, expected, "metrics of {}", n);
    }
}

#[test]
fn test_explicit_tree_sizes() {
    assert_eq!(ExplicitTree::of(1).len(), 1);
    assert_eq!(ExplicitTree::of(2).len(), 2);
    assert_eq!(ExplicitTree::of(4).len(), 3);
    assert_eq!(ExplicitTree::of(97).len(), 8);
}

#[test]
fn test_primes_near_a_thousand() {
    let mut engine = MetricsEngine::new();
    for n in [997u64, 1009, 1013, 1019, 1021] {
        let expected = ExplicitTree::of(n).record(n);
        assert_eq!(engine.compute_all_metrics(n).unwrap(), expected, "metrics of {}", n);
    }
}

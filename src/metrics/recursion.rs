// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Combination rules of the metric recursion.
//!
//! Each rule receives the engine and the [`Split`] of its argument and
//! combines metric values of the smaller arguments. [`evaluate`] wraps every
//! rule with the metric's own memo table, so each `(metric, n)` pair is
//! computed once per engine.

use super::Metric;
use crate::engine::MetricsEngine;

/// Position of an integer in the bijection.
///
/// `n = 2` is exactly `Prime { rank: 1 }`: the tree of 1 with one root level
/// added, a single edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    /// `n = 1`, the single-vertex tree.
    Unit,
    /// `n` is the `rank`-th prime.
    Prime { rank: u64 },
    /// `n = low * high` with `low` the smallest prime factor of `n`.
    Composite { low: u64, high: u64 },
}

type Rule = fn(&mut MetricsEngine, Split) -> u64;

/// Memoized value of `metric` at `n` (`n >= 1`).
pub(crate) fn evaluate(engine: &mut MetricsEngine, metric: Metric, n: u64) -> u64 {
    if let Some(value) = engine.tables.lookup(metric, n) {
        engine.statistics.record_hit(metric);
        return value;
    }
    engine.statistics.record_miss(metric);
    let split = engine.split_of(n);
    let value = rule(metric)(engine, split);
    engine.tables.store(metric, n, value)
}

fn rule(metric: Metric) -> Rule {
    match metric {
        Metric::Vertices => vertices,
        Metric::Leaves => leaves,
        Metric::PendentVertices => pendent_vertices,
        Metric::Edges => edges,
        Metric::NumberRootSubtrees => number_root_subtrees,
        Metric::NumberSubtrees => number_subtrees,
        Metric::NumberBranchingVertices => number_branching_vertices,
        Metric::NumberSiblingPairs => number_sibling_pairs,
        Metric::Height => height,
        Metric::EccentricityOfRoot => eccentricity_of_root,
        Metric::LevelOfLowestLeaf => level_of_lowest_leaf,
        Metric::PathLength => path_length,
        Metric::ExternalPathLength => external_path_length,
        Metric::InternalPathLength => internal_path_length,
        Metric::Diameter => diameter,
        Metric::VisitationLength => visitation_length,
        Metric::MaximumVertexDegree => maximum_vertex_degree,
    }
}

fn vertices(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit => 1,
        Split::Prime { rank } => 1 + evaluate(e, Metric::Vertices, rank),
        Split::Composite { low, high } => {
            evaluate(e, Metric::Vertices, low) + evaluate(e, Metric::Vertices, high) - 1
        }
    }
}

fn leaves(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit => 0,
        Split::Prime { rank: 1 } => 1,
        Split::Prime { rank } => evaluate(e, Metric::Leaves, rank),
        Split::Composite { low, high } => {
            evaluate(e, Metric::Leaves, low) + evaluate(e, Metric::Leaves, high)
        }
    }
}

fn pendent_vertices(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit => 0,
        Split::Prime { rank: 1 } => 2,
        Split::Prime { rank } => 1 + evaluate(e, Metric::Leaves, rank),
        Split::Composite { low, high } => {
            evaluate(e, Metric::Leaves, low) + evaluate(e, Metric::Leaves, high)
        }
    }
}

fn edges(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit => 0,
        Split::Prime { rank } => 1 + evaluate(e, Metric::Edges, rank),
        Split::Composite { low, high } => {
            evaluate(e, Metric::Edges, low) + evaluate(e, Metric::Edges, high)
        }
    }
}

fn number_root_subtrees(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit => 1,
        Split::Prime { rank } => 1 + evaluate(e, Metric::NumberRootSubtrees, rank),
        Split::Composite { low, high } => {
            evaluate(e, Metric::NumberRootSubtrees, low)
                * evaluate(e, Metric::NumberRootSubtrees, high)
        }
    }
}

fn number_subtrees(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit => 1,
        Split::Prime { rank } => {
            1 + evaluate(e, Metric::NumberSubtrees, rank)
                + evaluate(e, Metric::NumberRootSubtrees, rank)
        }
        Split::Composite { low, high } => {
            let low_rooted = evaluate(e, Metric::NumberRootSubtrees, low);
            let high_rooted = evaluate(e, Metric::NumberRootSubtrees, high);
            // Both counts include the root alone, so their sum counts it twice.
            evaluate(e, Metric::NumberSubtrees, low) + evaluate(e, Metric::NumberSubtrees, high)
                - 1
                + (low_rooted - 1) * (high_rooted - 1)
        }
    }
}

fn number_branching_vertices(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit | Split::Prime { rank: 1 } => 0,
        Split::Prime { rank } => {
            let below = evaluate(e, Metric::NumberBranchingVertices, rank);
            // The root of `rank` gains a parent edge; with exactly two
            // children it becomes a branching vertex.
            if e.omega(rank) == 2 {
                1 + below
            } else {
                below
            }
        }
        Split::Composite { low, high } => {
            let fa = e.omega(low);
            let fb = e.omega(high);
            let sum = evaluate(e, Metric::NumberBranchingVertices, low)
                + evaluate(e, Metric::NumberBranchingVertices, high);
            match (fa, fb) {
                _ if fa >= 3 && fa <= fb => sum - 1,
                _ if fa <= 2 && fb >= 3 => sum,
                (_, 1) if fa <= 1 => sum,
                (_, 2) if fa <= 2 => sum + 1,
                _ => unreachable!(
                    "smallest factor {} of {} is prime, yet omega({}) = {} exceeds omega({}) = {}",
                    low,
                    low * high,
                    low,
                    fa,
                    high,
                    fb
                ),
            }
        }
    }
}

fn number_sibling_pairs(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit => 0,
        Split::Prime { rank } => evaluate(e, Metric::NumberSiblingPairs, rank),
        Split::Composite { low, high } => {
            let cross = u64::from(e.omega(low)) * u64::from(e.omega(high));
            evaluate(e, Metric::NumberSiblingPairs, low)
                + evaluate(e, Metric::NumberSiblingPairs, high)
                + cross
        }
    }
}

fn height(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit => 0,
        Split::Prime { rank } => 1 + evaluate(e, Metric::Height, rank),
        Split::Composite { low, high } => {
            evaluate(e, Metric::Height, low).max(evaluate(e, Metric::Height, high))
        }
    }
}

fn eccentricity_of_root(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit => 0,
        Split::Prime { rank } => 1 + evaluate(e, Metric::EccentricityOfRoot, rank),
        Split::Composite { low, high } => evaluate(e, Metric::EccentricityOfRoot, low)
            .max(evaluate(e, Metric::EccentricityOfRoot, high)),
    }
}

fn level_of_lowest_leaf(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit => 0,
        Split::Prime { rank } => 1 + evaluate(e, Metric::LevelOfLowestLeaf, rank),
        Split::Composite { low, high } => evaluate(e, Metric::LevelOfLowestLeaf, low)
            .min(evaluate(e, Metric::LevelOfLowestLeaf, high)),
    }
}

fn path_length(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit => 0,
        Split::Prime { rank } => {
            evaluate(e, Metric::PathLength, rank) + evaluate(e, Metric::Vertices, rank)
        }
        Split::Composite { low, high } => {
            evaluate(e, Metric::PathLength, low) + evaluate(e, Metric::PathLength, high)
        }
    }
}

fn external_path_length(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit => 0,
        Split::Prime { rank: 1 } => 1,
        Split::Prime { rank } => {
            evaluate(e, Metric::ExternalPathLength, rank) + evaluate(e, Metric::Leaves, rank)
        }
        Split::Composite { low, high } => {
            evaluate(e, Metric::ExternalPathLength, low)
                + evaluate(e, Metric::ExternalPathLength, high)
        }
    }
}

fn internal_path_length(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit | Split::Prime { rank: 1 } => 0,
        Split::Prime { rank } => {
            let internal = evaluate(e, Metric::Vertices, rank) - evaluate(e, Metric::Leaves, rank);
            evaluate(e, Metric::InternalPathLength, rank) + internal
        }
        Split::Composite { low, high } => {
            evaluate(e, Metric::InternalPathLength, low)
                + evaluate(e, Metric::InternalPathLength, high)
        }
    }
}

fn diameter(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit => 0,
        Split::Prime { rank } => {
            let through_root = 1 + evaluate(e, Metric::Height, rank);
            evaluate(e, Metric::Diameter, rank).max(through_root)
        }
        Split::Composite { low, high } => {
            let through_root = evaluate(e, Metric::Height, low) + evaluate(e, Metric::Height, high);
            evaluate(e, Metric::Diameter, low)
                .max(evaluate(e, Metric::Diameter, high))
                .max(through_root)
        }
    }
}

fn visitation_length(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit => 1,
        Split::Prime { rank } => {
            evaluate(e, Metric::VisitationLength, rank) + evaluate(e, Metric::Vertices, rank) + 1
        }
        Split::Composite { low, high } => {
            evaluate(e, Metric::VisitationLength, low)
                + evaluate(e, Metric::VisitationLength, high)
                - 1
        }
    }
}

fn maximum_vertex_degree(e: &mut MetricsEngine, split: Split) -> u64 {
    match split {
        Split::Unit => 0,
        Split::Prime { rank } => {
            let root_degree = 1 + u64::from(e.omega(rank));
            evaluate(e, Metric::MaximumVertexDegree, rank).max(root_degree)
        }
        Split::Composite { low, high } => {
            let root_degree = u64::from(e.omega(low)) + u64::from(e.omega(high));
            evaluate(e, Metric::MaximumVertexDegree, low)
                .max(evaluate(e, Metric::MaximumVertexDegree, high))
                .max(root_degree)
        }
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! All metrics of one integer.

use super::Metric;
use serde::Serialize;
use std::fmt;
use strum::IntoEnumIterator;

/// Every metric of the tree keyed by `n`, plus Ω(n).
///
/// Fields appear in [`Metric`] order; JSON keys are camelCase
/// (`pendentVertices`, `numberOfPrimeFactors`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRecord {
    pub n: u64,
    pub vertices: u64,
    pub leaves: u64,
    pub pendent_vertices: u64,
    pub edges: u64,
    pub number_root_subtrees: u64,
    pub number_subtrees: u64,
    pub number_branching_vertices: u64,
    pub number_sibling_pairs: u64,
    pub height: u64,
    pub eccentricity_of_root: u64,
    pub level_of_lowest_leaf: u64,
    pub path_length: u64,
    pub external_path_length: u64,
    pub internal_path_length: u64,
    pub diameter: u64,
    pub visitation_length: u64,
    pub maximum_vertex_degree: u64,
    pub number_of_prime_factors: u32,
}

impl MetricsRecord {
    /// Assemble a record from a per-metric lookup.
    pub fn from_fn(n: u64, number_of_prime_factors: u32, mut value: impl FnMut(Metric) -> u64) -> Self {
        Self {
            n,
            vertices: value(Metric::Vertices),
            leaves: value(Metric::Leaves),
            pendent_vertices: value(Metric::PendentVertices),
            edges: value(Metric::Edges),
            number_root_subtrees: value(Metric::NumberRootSubtrees),
            number_subtrees: value(Metric::NumberSubtrees),
            number_branching_vertices: value(Metric::NumberBranchingVertices),
            number_sibling_pairs: value(Metric::NumberSiblingPairs),
            height: value(Metric::Height),
            eccentricity_of_root: value(Metric::EccentricityOfRoot),
            level_of_lowest_leaf: value(Metric::LevelOfLowestLeaf),
            path_length: value(Metric::PathLength),
            external_path_length: value(Metric::ExternalPathLength),
            internal_path_length: value(Metric::InternalPathLength),
            diameter: value(Metric::Diameter),
            visitation_length: value(Metric::VisitationLength),
            maximum_vertex_degree: value(Metric::MaximumVertexDegree),
            number_of_prime_factors,
        }
    }

    /// Value of a single metric.
    pub fn get(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Vertices => self.vertices,
            Metric::Leaves => self.leaves,
            Metric::PendentVertices => self.pendent_vertices,
            Metric::Edges => self.edges,
            Metric::NumberRootSubtrees => self.number_root_subtrees,
            Metric::NumberSubtrees => self.number_subtrees,
            Metric::NumberBranchingVertices => self.number_branching_vertices,
            Metric::NumberSiblingPairs => self.number_sibling_pairs,
            Metric::Height => self.height,
            Metric::EccentricityOfRoot => self.eccentricity_of_root,
            Metric::LevelOfLowestLeaf => self.level_of_lowest_leaf,
            Metric::PathLength => self.path_length,
            Metric::ExternalPathLength => self.external_path_length,
            Metric::InternalPathLength => self.internal_path_length,
            Metric::Diameter => self.diameter,
            Metric::VisitationLength => self.visitation_length,
            Metric::MaximumVertexDegree => self.maximum_vertex_degree,
        }
    }
}

impl fmt::Display for MetricsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n = {}", self.n)?;
        for metric in Metric::iter() {
            let name: &'static str = metric.into();
            writeln!(f, "  {:<26} {}", name, self.get(metric))?;
        }
        write!(
            f,
            "  {:<26} {}",
            "number_of_prime_factors", self.number_of_prime_factors
        )
    }
}

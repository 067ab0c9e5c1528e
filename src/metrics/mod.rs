// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tree metrics evaluated by mutual recursion over the integer↔tree bijection.
//!
//! Every metric is defined by the same three-way split of its argument `n`
//! (see [`Split`]):
//!
//! 1. `n = 1`: the single-vertex tree, a fixed base value per metric
//! 2. `n` prime with rank `t`: the tree of `t` with one new root above it
//! 3. `n` composite, `n = a * b` with `a` the smallest prime factor: the trees
//!    of `a` and `b` grafted at a shared root
//!
//! The recursion never builds the tree; it only combines metric values of the
//! smaller arguments.
//!
//! ## Module Structure
//!
//! - `index`: [`TreeIndex`], a validated positive integer
//! - `record`: [`MetricsRecord`], every metric of one integer
//! - `recursion`: the combination rule of each metric

pub mod index;
pub mod record;
pub mod recursion;

pub use index::TreeIndex;
pub use record::MetricsRecord;
pub use recursion::Split;

use serde::Serialize;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString, IntoStaticStr};

/// The tree metrics, in record order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumCountMacro,
    EnumIter,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum Metric {
    /// Number of vertices.
    Vertices,
    /// Non-root vertices without children.
    Leaves,
    /// Vertices of degree one.
    PendentVertices,
    /// Number of edges (always `vertices - 1`).
    Edges,
    /// Subtrees that contain the root.
    NumberRootSubtrees,
    /// All subtrees (connected vertex subsets).
    NumberSubtrees,
    /// Vertices of degree three or more.
    NumberBranchingVertices,
    /// Unordered pairs of vertices sharing a parent.
    NumberSiblingPairs,
    /// Largest depth of any vertex.
    Height,
    /// Largest distance from the root.
    EccentricityOfRoot,
    /// Smallest depth of a childless vertex.
    LevelOfLowestLeaf,
    /// Sum of the depths of all vertices.
    PathLength,
    /// Sum of the depths of the leaves.
    ExternalPathLength,
    /// Sum of the depths of the vertices with children.
    InternalPathLength,
    /// Longest path between two vertices.
    Diameter,
    /// Sum over all vertices of `depth + 1`.
    VisitationLength,
    /// Largest vertex degree.
    MaximumVertexDegree,
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structural metrics of the rooted tree encoded by a positive integer.
//!
//! Every positive integer corresponds to exactly one unlabeled rooted tree:
//!
//! - `1` is the single-vertex tree
//! - the `t`-th prime is the tree of `t` with one new root above it
//! - a composite `n = a * b`, with `a` its smallest prime factor, is the trees
//!   of `a` and `b` grafted at a shared root
//!
//! This crate evaluates seventeen metrics of that tree (vertices, leaves,
//! height, diameter, subtree counts, path lengths, ...) directly from `n`,
//! by mutual recursion over the same decomposition, without ever building
//! the tree.
//!
//! # Architecture
//!
//! ## Primality substrate
//!
//! - [`PrimeSieve`](primes::PrimeSieve): incremental trial-division sieve
//!   answering "is x prime", "rank of p" and "k-th prime"
//! - [`Factorizer`](primes::Factorizer): smallest prime factor (the canonical
//!   split) and Ω(n)
//!
//! ## Memoization
//!
//! - [`Memo`](memo::Memo): append-only table for one single-argument function
//! - [`MetricTables`](memo::MetricTables): an independent table per metric
//!
//! ## Recursion
//!
//! - [`Metric`]: the catalogue of metrics
//! - [`metrics::recursion`]: one combination rule per metric
//! - [`MetricsEngine`]: owns all caches and exposes
//!   [`compute_all_metrics`](MetricsEngine::compute_all_metrics)
//!
//! Caches belong to an engine instance, grow monotonically, and are dropped
//! with it.
//!
//! # Example
//!
//! ```
//! use tree_metrics::MetricsEngine;
//!
//! let mut engine = MetricsEngine::new();
//! let record = engine.compute_all_metrics(2).unwrap();
//! assert_eq!((record.vertices, record.leaves, record.edges, record.height), (2, 1, 1, 1));
//! ```

pub mod engine;
pub mod error;
pub mod memo;
pub mod metrics;
pub mod primes;
pub mod state;

// Re-export commonly used types
pub use engine::{EngineBuilder, EngineConfig, MetricsEngine};
pub use error::{MetricsError, Result};
pub use metrics::{Metric, MetricsRecord, Split, TreeIndex};

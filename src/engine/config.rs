// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Engine configuration.

use crate::primes::sieve::INITIAL_WATERMARK;
use serde::{Deserialize, Serialize};

/// Integers sieved beyond `⌊√n⌋` before evaluating the metrics of `n`.
pub const DEFAULT_WARMUP_MARGIN: u64 = 100;

/// Tuning knobs for a [`MetricsEngine`](super::MetricsEngine).
///
/// Neither value changes any metric; they only move sieve work from inside
/// the recursion to before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Extra integers sieved above `⌊√n⌋` by `compute_all_metrics(n)`.
    pub warmup_margin: u64,

    /// Sieve limit established when the engine is created.
    pub initial_sieve_limit: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            warmup_margin: DEFAULT_WARMUP_MARGIN,
            initial_sieve_limit: INITIAL_WATERMARK,
        }
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Metrics engine.
//!
//! A [`MetricsEngine`] owns every cache the recursion needs:
//!
//! ```text
//! MetricsEngine {
//!     sieve: PrimeSieve,         // prime sequence, verdicts, prime ranks
//!     factors: Factorizer,       // smallest factor and omega caches
//!     tables: MetricTables,      // one memo table per metric
//!     statistics: Statistics,    // hit/miss and event counters
//! }
//! ```
//!
//! All caches grow monotonically and are dropped with the engine. Independent
//! engines share nothing, so tests and callers can run side by side without
//! observing each other's state.
//!
//! # Example
//!
//! ```
//! use tree_metrics::MetricsEngine;
//!
//! let mut engine = MetricsEngine::new();
//! let record = engine.compute_all_metrics(12).unwrap();
//! assert_eq!(record.vertices, 5);
//! assert_eq!(record.edges, 4);
//! assert_eq!(record.number_of_prime_factors, 3);
//!
//! assert!(engine.compute_all_metrics(0).is_err());
//! assert!(engine.compute_all_metrics(2.5).is_err());
//! ```

pub mod builder;
pub mod config;

pub use builder::EngineBuilder;
pub use config::EngineConfig;

use crate::error::{MetricsError, Result};
use crate::memo::MetricTables;
use crate::metrics::{recursion, Metric, MetricsRecord, Split, TreeIndex};
use crate::primes::{isqrt, Factorizer, PrimeSieve};
use crate::state::{Counters, Statistics};
use tracing::{debug, trace, warn};

/// Owner of the primality substrate and the per-metric memo tables.
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    config: EngineConfig,
    pub(crate) sieve: PrimeSieve,
    pub(crate) factors: Factorizer,
    pub(crate) tables: MetricTables,
    pub(crate) statistics: Statistics,
}

impl MetricsEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        let mut sieve = PrimeSieve::new();
        sieve.ensure_primes_up_to(config.initial_sieve_limit);
        Self {
            config,
            sieve,
            factors: Factorizer::new(),
            tables: MetricTables::new(),
            statistics: Statistics::new(),
        }
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Every metric of the tree keyed by `n`.
    ///
    /// `n` is validated before anything is computed: zero, negative,
    /// fractional and out-of-range inputs fail with
    /// [`MetricsError::InvalidArgument`] and leave every cache untouched.
    pub fn compute_all_metrics<N>(&mut self, n: N) -> Result<MetricsRecord>
    where
        N: TryInto<TreeIndex, Error = MetricsError>,
    {
        match n.try_into() {
            Ok(index) => Ok(self.metrics_of(index)),
            Err(err) => {
                self.statistics
                    .increment_counter(Counters::RejectedArguments);
                warn!(%err, "rejecting argument");
                Err(err)
            }
        }
    }

    /// Every metric of an already validated index.
    pub fn metrics_of(&mut self, n: TreeIndex) -> MetricsRecord {
        let n = n.value();
        let warm_limit = isqrt(n).saturating_add(self.config.warmup_margin);
        trace!(n, warm_limit, "warming prime sieve");
        self.sieve.ensure_primes_up_to(warm_limit);

        let misses_before = self.statistics.total_misses();
        let omega = self.omega(n);
        let record = MetricsRecord::from_fn(n, omega, |metric| recursion::evaluate(self, metric, n));

        self.statistics.increment_counter(Counters::RecordsComputed);
        debug!(
            n,
            evaluations = self.statistics.total_misses() - misses_before,
            cached = self.tables.total_entries(),
            "computed metrics"
        );
        record
    }

    /// Memoized value of a single metric.
    pub fn evaluate(&mut self, metric: Metric, n: TreeIndex) -> u64 {
        recursion::evaluate(self, metric, n.value())
    }

    pub fn vertices(&mut self, n: TreeIndex) -> u64 {
        self.evaluate(Metric::Vertices, n)
    }

    pub fn leaves(&mut self, n: TreeIndex) -> u64 {
        self.evaluate(Metric::Leaves, n)
    }

    pub fn edges(&mut self, n: TreeIndex) -> u64 {
        self.evaluate(Metric::Edges, n)
    }

    pub fn height(&mut self, n: TreeIndex) -> u64 {
        self.evaluate(Metric::Height, n)
    }

    /// Position of `n` in the bijection.
    pub fn split(&mut self, n: TreeIndex) -> Split {
        self.split_of(n.value())
    }

    pub fn is_prime(&mut self, x: u64) -> bool {
        self.sieve.is_prime(x)
    }

    pub fn prime_position(&mut self, p: u64) -> Option<u64> {
        self.sieve.prime_position(p)
    }

    pub fn nth_prime(&mut self, k: u64) -> Option<u64> {
        self.sieve.nth_prime(k)
    }

    /// Smallest prime factor, or `None` when `n <= 3` or `n` is prime.
    pub fn lowest_factor(&mut self, n: u64) -> Option<u64> {
        self.factors.lowest_factor(&mut self.sieve, n)
    }

    /// Ω(n), prime factors counted with multiplicity.
    pub fn number_of_prime_factors(&mut self, n: u64) -> u32 {
        self.omega(n)
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn sieve(&self) -> &PrimeSieve {
        &self.sieve
    }

    pub fn tables(&self) -> &MetricTables {
        &self.tables
    }

    pub(crate) fn omega(&mut self, n: u64) -> u32 {
        self.factors.number_of_prime_factors(&mut self.sieve, n)
    }

    pub(crate) fn split_of(&mut self, n: u64) -> Split {
        if n == 1 {
            return Split::Unit;
        }
        match self.factors.lowest_factor(&mut self.sieve, n) {
            Some(low) => Split::Composite { low, high: n / low },
            None => Split::Prime {
                rank: self.sieve.rank_of_prime(n),
            },
        }
    }
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new()
    }
}

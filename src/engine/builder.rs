// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Builder for [`MetricsEngine`].

use super::{EngineConfig, MetricsEngine};

/// Builder for configuring a metrics engine.
///
/// # Example
///
/// ```
/// use tree_metrics::engine::EngineBuilder;
///
/// let mut engine = EngineBuilder::new()
///     .warmup_margin(0)
///     .initial_sieve_limit(1_000)
///     .build();
///
/// assert_eq!(engine.sieve().checked_through(), 1_000);
/// assert_eq!(engine.compute_all_metrics(4).unwrap().vertices, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn warmup_margin(mut self, margin: u64) -> Self {
        self.config.warmup_margin = margin;
        self
    }

    pub fn initial_sieve_limit(mut self, limit: u64) -> Self {
        self.config.initial_sieve_limit = limit;
        self
    }

    pub fn build(self) -> MetricsEngine {
        MetricsEngine::with_config(self.config)
    }
}

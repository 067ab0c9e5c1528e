// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! One memo table per metric.

use super::Memo;
use crate::metrics::Metric;
use strum::EnumCount;

/// The per-metric memo tables of an engine.
///
/// Each metric owns an independent [`Memo`]. Values are never shared between
/// metrics even when they are algebraically related (`edges` and `vertices`,
/// `height` and `eccentricity_of_root`).
#[derive(Debug, Clone)]
pub struct MetricTables {
    tables: [Memo<u64>; Metric::COUNT],
}

impl MetricTables {
    pub fn new() -> Self {
        Self {
            tables: std::array::from_fn(|_| Memo::new()),
        }
    }

    #[inline]
    pub fn lookup(&self, metric: Metric, n: u64) -> Option<u64> {
        self.tables[metric as usize].get(n)
    }

    #[inline]
    pub fn store(&mut self, metric: Metric, n: u64, value: u64) -> u64 {
        self.tables[metric as usize].insert(n, value)
    }

    /// Table backing a single metric.
    pub fn table(&self, metric: Metric) -> &Memo<u64> {
        &self.tables[metric as usize]
    }

    /// Total number of cached entries across all metrics.
    pub fn total_entries(&self) -> usize {
        self.tables.iter().map(Memo::len).sum()
    }
}

impl Default for MetricTables {
    fn default() -> Self {
        Self::new()
    }
}

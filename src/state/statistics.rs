// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the engine and incremented as metrics are
//! evaluated: one hit or miss per memo lookup, plus a few event counters.

use crate::metrics::Metric;
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    RecordsComputed,
    RejectedArguments,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    counters: [u64; Counters::COUNT],
    hits: [u64; Metric::COUNT],
    misses: [u64; Metric::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.counters[counter as usize] += 1;
    }

    pub(crate) fn record_hit(&mut self, metric: Metric) {
        self.hits[metric as usize] += 1;
    }

    pub(crate) fn record_miss(&mut self, metric: Metric) {
        self.misses[metric as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.counters[counter as usize]
    }

    /// Memo hits for one metric.
    pub fn hits(&self, metric: Metric) -> u64 {
        self.hits[metric as usize]
    }

    /// Memo misses (rule evaluations) for one metric.
    pub fn misses(&self, metric: Metric) -> u64 {
        self.misses[metric as usize]
    }

    pub fn total_hits(&self) -> u64 {
        self.hits.iter().sum()
    }

    pub fn total_misses(&self) -> u64 {
        self.misses.iter().sum()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for counter in Counters::iter() {
            let name: &'static str = counter.into();
            writeln!(f, "{:<26} {}", name, self.get(counter))?;
        }
        for metric in Metric::iter() {
            let name: &'static str = metric.into();
            writeln!(
                f,
                "{:<26} {} hits, {} misses",
                name,
                self.hits(metric),
                self.misses(metric)
            )?;
        }
        write!(
            f,
            "{:<26} {} hits, {} misses",
            "total",
            self.total_hits(),
            self.total_misses()
        )
    }
}

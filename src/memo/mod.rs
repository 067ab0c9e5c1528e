// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoization layer.
//!
//! - [`Memo`]: generic append-only table for one single-argument function
//! - [`MetricTables`]: one `Memo<u64>` per [`Metric`](crate::metrics::Metric)
//!
//! Every table grows for the lifetime of its engine and is never cleared.

pub mod metric_tables;
pub mod table;

pub use metric_tables::MetricTables;
pub use table::Memo;

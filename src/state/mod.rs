// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable engine bookkeeping.
//!
//! The caches themselves live in [`crate::memo`] and [`crate::primes`]; this
//! module only holds the counters describing how they were used.

pub mod statistics;

pub use statistics::{Counters, Statistics};

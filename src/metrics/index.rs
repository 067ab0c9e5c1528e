// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validated argument for metric evaluation.

use crate::error::MetricsError;
use std::fmt;
use std::str::FromStr;

/// Exclusive upper bound of `u64` as an `f64` (2^64).
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

/// A positive integer, the key of one tree in the bijection.
///
/// This is a newtype wrapper so that metric functions can never be handed
/// zero. Conversions from signed, floating point and textual inputs fail with
/// [`MetricsError::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TreeIndex(u64);

impl TreeIndex {
    /// Create a new index, panicking on zero.
    ///
    /// # Panics
    ///
    /// Panics if `value == 0`.
    pub fn new(value: u64) -> Self {
        assert!(value >= 1, "TreeIndex must be positive: {}", value);
        Self(value)
    }

    /// Try to create a new index, returning None for zero.
    pub fn try_new(value: u64) -> Option<Self> {
        if value >= 1 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the underlying value.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TreeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for TreeIndex {
    type Error = MetricsError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or_else(|| MetricsError::invalid_argument(value))
    }
}

impl TryFrom<i64> for TreeIndex {
    type Error = MetricsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .ok()
            .and_then(Self::try_new)
            .ok_or_else(|| MetricsError::invalid_argument(value))
    }
}

impl TryFrom<u32> for TreeIndex {
    type Error = MetricsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_from(u64::from(value))
    }
}

impl TryFrom<i32> for TreeIndex {
    type Error = MetricsError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<f64> for TreeIndex {
    type Error = MetricsError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() && value.fract() == 0.0 && value >= 1.0 && value < U64_BOUND {
            Ok(Self(value as u64))
        } else {
            Err(MetricsError::invalid_argument(value))
        }
    }
}

impl FromStr for TreeIndex {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u64>() {
            return Self::try_from(value);
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Self::try_from(value).map_err(|_| MetricsError::invalid_argument(s)),
            Err(_) => Err(MetricsError::invalid_argument(s)),
        }
    }
}

impl TryFrom<&str> for TreeIndex {
    type Error = MetricsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for metric evaluation.
//!
//! There is exactly one user-facing failure: the argument handed to
//! [`MetricsEngine::compute_all_metrics`](crate::MetricsEngine::compute_all_metrics)
//! is not a positive integer. Everything below the entry point is total.

use thiserror::Error;

/// Errors raised at the boundary of the metrics engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// The argument is zero, negative, fractional, non-finite, too large for
    /// `u64`, or unparsable text.
    #[error("invalid argument: {value} is not a positive integer")]
    InvalidArgument { value: String },
}

impl MetricsError {
    /// Build an invalid-argument error from anything printable.
    pub fn invalid_argument(value: impl ToString) -> Self {
        MetricsError::InvalidArgument {
            value: value.to_string(),
        }
    }
}

/// Result type for metric operations.
pub type Result<T> = std::result::Result<T, MetricsError>;

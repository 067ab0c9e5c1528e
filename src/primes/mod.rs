// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Primality and factorization substrate.
//!
//! - `sieve`: [`PrimeSieve`], the incremental primality oracle
//! - `factor`: [`Factorizer`], smallest prime factor and Ω(n) on top of the sieve

pub mod factor;
pub mod sieve;

pub use factor::Factorizer;
pub use sieve::PrimeSieve;

/// Integer square root: the largest `r` with `r * r <= x`.
pub fn isqrt(x: u64) -> u64 {
    let mut r = (x as f64).sqrt() as u64;
    // Float rounding can be off by one near large perfect squares.
    while r.checked_mul(r).map_or(true, |sq| sq > x) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= x) {
        r += 1;
    }
    r
}

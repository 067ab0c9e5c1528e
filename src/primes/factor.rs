// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Factorization helper.
//!
//! Provides the canonical split used by every composite case of the metric
//! recursion: `a = lowest_factor(n)` and `b = n / a`. Any other choice of
//! factor yields a different tree and different metrics.

use super::{isqrt, PrimeSieve};
use crate::memo::Memo;

/// Cached factorization queries backed by a [`PrimeSieve`].
#[derive(Debug, Clone, Default)]
pub struct Factorizer {
    /// Smallest prime factor; `None` for `n <= 3` and for primes.
    lowest: Memo<Option<u64>>,

    /// Ω(n): prime factors counted with multiplicity.
    omega: Memo<u32>,
}

impl Factorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest prime factor of `n`, or `None` when `n <= 3` or `n` is prime.
    pub fn lowest_factor(&mut self, sieve: &mut PrimeSieve, n: u64) -> Option<u64> {
        self.lowest
            .get_or_insert_with(n, |n| smallest_prime_divisor(sieve, n))
    }

    /// Number of prime factors of `n` counted with multiplicity. Ω(1) = 0.
    pub fn number_of_prime_factors(&mut self, sieve: &mut PrimeSieve, n: u64) -> u32 {
        self.omega.get_or_insert_with(n, |n| count_prime_factors(sieve, n))
    }

    /// Number of cached smallest-factor answers.
    pub fn cached_lowest_factors(&self) -> usize {
        self.lowest.len()
    }
}

fn smallest_prime_divisor(sieve: &mut PrimeSieve, n: u64) -> Option<u64> {
    if n <= 3 {
        return None;
    }
    let root = isqrt(n);
    sieve.ensure_primes_up_to(root + 1);
    sieve
        .primes()
        .iter()
        .take_while(|&&p| p <= root)
        .find(|&&p| n % p == 0)
        .copied()
}

fn count_prime_factors(sieve: &mut PrimeSieve, n: u64) -> u32 {
    sieve.ensure_primes_up_to(isqrt(n) + 1);
    let mut rest = n;
    let mut count = 0;
    for &p in sieve.primes() {
        if p.saturating_mul(p) > rest {
            break;
        }
        while rest % p == 0 {
            count += 1;
            rest /= p;
        }
    }
    if rest > 1 {
        count += 1;
    }
    count
}

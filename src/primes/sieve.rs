// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incremental trial-division sieve (the primality oracle).
//!
//! The sieve keeps an ascending, gap-free list of every prime up to a
//! watermark. Growing it only tests integers above the watermark, each by
//! trial division against the primes already known up to its square root, so
//! no integer is ever classified twice.

use super::isqrt;
use crate::memo::Memo;
use tracing::debug;

/// Watermark of a freshly created sieve; the list starts as `[2, 3]`.
pub const INITIAL_WATERMARK: u64 = 3;

/// Incremental prime sieve.
///
/// Verdicts for integers at or below [`checked_through`](Self::checked_through)
/// come from the prime list itself. Ad hoc queries above the watermark are
/// answered by trial division and cached in a verdict table.
#[derive(Debug, Clone)]
pub struct PrimeSieve {
    /// Every prime `<= checked_through`, ascending.
    primes: Vec<u64>,

    /// Highest integer classified by sieve extension.
    checked_through: u64,

    /// Verdicts for integers above the watermark at the time they were asked.
    verdicts: Memo<bool>,

    /// 1-based rank of each prime that has been looked up.
    positions: Memo<u64>,

    /// Number of times the watermark has moved.
    extensions: u64,
}

impl PrimeSieve {
    pub fn new() -> Self {
        Self {
            primes: vec![2, 3],
            checked_through: INITIAL_WATERMARK,
            verdicts: Memo::new(),
            positions: Memo::new(),
            extensions: 0,
        }
    }

    /// Extend the prime list so that it covers every integer up to `limit`.
    ///
    /// No-op if `limit` is already covered.
    pub fn ensure_primes_up_to(&mut self, limit: u64) {
        if limit <= self.checked_through {
            return;
        }
        let from = self.checked_through;
        let before = self.primes.len();

        for candidate in (from + 1)..=limit {
            let root = isqrt(candidate);
            let prime = self
                .primes
                .iter()
                .take_while(|&&p| p <= root)
                .all(|&p| candidate % p != 0);
            if prime {
                self.primes.push(candidate);
            }
        }

        self.checked_through = limit;
        self.extensions += 1;
        debug!(
            from,
            to = limit,
            discovered = self.primes.len() - before,
            known = self.primes.len(),
            "extended prime sieve"
        );
    }

    /// Whether `x` is prime.
    pub fn is_prime(&mut self, x: u64) -> bool {
        if x < 2 {
            return false;
        }
        if x <= self.checked_through {
            return self.primes.binary_search(&x).is_ok();
        }
        if let Some(verdict) = self.verdicts.get(x) {
            return verdict;
        }

        let root = isqrt(x);
        self.ensure_primes_up_to(root + 1);
        let prime = self
            .primes
            .iter()
            .take_while(|&&p| p <= root)
            .all(|&p| x % p != 0);
        self.verdicts.insert(x, prime)
    }

    /// 1-based rank of `p` among the primes, or `None` if `p` is not prime.
    pub fn prime_position(&mut self, p: u64) -> Option<u64> {
        if !self.is_prime(p) {
            return None;
        }
        Some(self.rank_of_prime(p))
    }

    /// Rank of a number already known to be prime.
    ///
    /// Extends the list to `p` first. `p` must be prime.
    pub(crate) fn rank_of_prime(&mut self, p: u64) -> u64 {
        if let Some(rank) = self.positions.get(p) {
            return rank;
        }
        self.ensure_primes_up_to(p);
        debug_assert!(self.primes.binary_search(&p).is_ok(), "{} is not prime", p);
        let index = self.primes.partition_point(|&q| q < p);
        self.positions.insert(p, index as u64 + 1)
    }

    /// The `k`-th prime (1-based), or `None` for `k == 0`.
    pub fn nth_prime(&mut self, k: u64) -> Option<u64> {
        if k == 0 {
            return None;
        }
        let wanted = usize::try_from(k).ok()?;
        while self.primes.len() < wanted {
            let next = self
                .checked_through
                .saturating_mul(2)
                .max(self.checked_through + 64);
            self.ensure_primes_up_to(next);
        }
        Some(self.primes[wanted - 1])
    }

    /// All primes discovered so far, ascending.
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    /// Highest integer checked by sieve extension.
    pub fn checked_through(&self) -> u64 {
        self.checked_through
    }

    /// Number of sieve extensions performed.
    pub fn extensions(&self) -> u64 {
        self.extensions
    }
}

impl Default for PrimeSieve {
    fn default() -> Self {
        Self::new()
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Append-only memo table keyed by an integer argument.

use rustc_hash::FxHashMap;

/// A private cache for one single-argument function.
///
/// Entries are only ever added. Once a key has a value, later inserts for the
/// same key keep the first value, so a recomputation can never change what a
/// caller has already observed.
///
/// # Example
///
/// ```
/// use tree_metrics::memo::Memo;
///
/// let mut squares: Memo<u64> = Memo::new();
/// assert_eq!(squares.get_or_insert_with(12, |n| n * n), 144);
/// // The closure is not called again for a cached key.
/// assert_eq!(squares.get_or_insert_with(12, |_| unreachable!()), 144);
/// assert_eq!(squares.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Memo<V> {
    entries: FxHashMap<u64, V>,
}

impl<V: Copy> Memo<V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Cached value for `key`, if any.
    #[inline]
    pub fn get(&self, key: u64) -> Option<V> {
        self.entries.get(&key).copied()
    }

    /// Record `value` for `key` and return the value now stored.
    ///
    /// If `key` is already present the existing value wins.
    pub fn insert(&mut self, key: u64, value: V) -> V {
        *self.entries.entry(key).or_insert(value)
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with(&mut self, key: u64, compute: impl FnOnce(u64) -> V) -> V {
        *self.entries.entry(key).or_insert_with(|| compute(key))
    }

    /// Whether `key` has been cached.
    pub fn contains(&self, key: u64) -> bool {
        self.entries.contains_key(&key)
    }

    /// Number of cached arguments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Copy> Default for Memo<V> {
    fn default() -> Self {
        Self::new()
    }
}

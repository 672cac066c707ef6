//! Memoization cache mapping indices to computed pairs.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::pair::FibPair;

/// Thread-safe memo map from index to `(F(n), F(n+1))`.
///
/// Owned by exactly one engine. Entries are never evicted within a session;
/// `clear` is the only way to shrink it. Reads clone the stored pair, and
/// the lock is never held while a pair is being computed, so two threads
/// racing on the same uncached index may both compute it. That is wasted
/// work, not a correctness problem: `insert_if_absent` keeps whichever pair
/// landed first, and both are equal.
#[derive(Debug, Default)]
pub struct PairCache {
    entries: Mutex<HashMap<u64, FibPair>>,
}

impl PairCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the pair for `n`, cloning it out of the map.
    #[must_use]
    pub fn get(&self, n: u64) -> Option<FibPair> {
        self.entries.lock().get(&n).cloned()
    }

    /// Store the pair for `n` unless an entry already exists.
    pub fn insert_if_absent(&self, n: u64, pair: FibPair) {
        self.entries.lock().entry(n).or_insert(pair);
    }

    /// Number of memoized pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

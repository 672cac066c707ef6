//! Memoized fast-doubling engine.
//!
//! `pair(n)` recurses on `floor(n/2)`, so the call depth is the bit length
//! of `n` (under 64 frames for any `u64` index, under 40 for indices in the
//! billions). No tail-call support is needed; an ordinary call stack is safe.

use num_bigint::BigUint;
use tracing::{debug, trace};

use crate::cache::PairCache;
use crate::constants::MAX_FIB_PAIR_U64;
use crate::index::Index;
use crate::pair::FibPair;

/// Fast-doubling Fibonacci engine with per-instance memoization.
///
/// Computes `F(n)` in `O(log n)` big-integer multiplications and caches every
/// pair visited along the halving chain, so repeated or nearby queries on the
/// same engine reuse earlier work. The engine is `Send + Sync`; the cache is
/// the only shared state and is lock-protected internally.
///
/// # Example
/// ```
/// use fibexact::FibEngine;
///
/// let engine = FibEngine::new();
/// assert_eq!(engine.compute(100u64).to_string(), "354224848179261915075");
/// let pair = engine.compute_pair(70u64);
/// assert_eq!(pair.fib.to_string(), "190392490709135");
/// assert_eq!(pair.next.to_string(), "308061521170129");
/// ```
#[derive(Debug, Default)]
pub struct FibEngine {
    cache: PairCache,
}

impl FibEngine {
    /// Create an engine with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute `F(n)` exactly.
    pub fn compute(&self, n: impl Into<Index>) -> BigUint {
        self.compute_pair(n).into_fib()
    }

    /// Compute the exact pair `(F(n), F(n+1))`.
    pub fn compute_pair(&self, n: impl Into<Index>) -> FibPair {
        let n = n.into().get();
        let before = self.cache.len();
        let pair = self.pair(n);
        // A racing reset() can shrink the cache between the snapshot above
        // and this field evaluation, so the count must not underflow.
        debug!(
            n,
            bits = pair.fib.bits(),
            new_entries = self.cache.len().saturating_sub(before),
            "computed pair"
        );
        pair
    }

    /// Clear the memo cache. Results are unaffected; only reuse is lost.
    pub fn reset(&self) {
        self.cache.clear();
    }

    /// Number of memoized pairs currently held.
    #[must_use]
    pub fn cached_pairs(&self) -> usize {
        self.cache.len()
    }

    /// Recursive doubling step: pair at `n` from the pair at `floor(n/2)`.
    ///
    /// The cache lock is taken only inside `get`/`insert_if_absent`, never
    /// across the recursive call.
    fn pair(&self, n: u64) -> FibPair {
        if n <= MAX_FIB_PAIR_U64 {
            return FibPair::from_table(n);
        }
        if let Some(hit) = self.cache.get(n) {
            trace!(n, "cache hit");
            return hit;
        }

        let half = self.pair(n / 2);
        let mut result = half.doubled();
        if n & 1 == 1 {
            result = result.advanced();
        }

        self.cache.insert_if_absent(n, result.clone());
        result
    }
}

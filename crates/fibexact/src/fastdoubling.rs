//! Iterative (MSB-first) fast doubling.
//!
//! The loop-based equivalent of the engine's recursion: walk the bits of `n`
//! from most significant to least, doubling the current pair at each bit and
//! advancing it by one when the bit is set. No recursion, no memoization;
//! this is the cheapest path for one-off queries.

use num_bigint::BigUint;

use crate::constants::MAX_FIB_PAIR_U64;
use crate::index::Index;
use crate::pair::FibPair;

/// Compute the exact pair `(F(n), F(n+1))` with the doubling loop.
#[must_use]
pub fn fib_pair(n: Index) -> FibPair {
    let n = n.get();
    if n <= MAX_FIB_PAIR_U64 {
        return FibPair::from_table(n);
    }

    let num_bits = 64 - n.leading_zeros();
    let mut pair = FibPair::base();
    for i in (0..num_bits).rev() {
        // Invariant: `pair` holds (F(k), F(k+1)) for k = n >> (i + 1).
        pair = pair.doubled();
        if (n >> i) & 1 == 1 {
            pair = pair.advanced();
        }
    }
    pair
}

/// Compute `F(n)` exactly with the doubling loop.
#[must_use]
pub fn fib(n: Index) -> BigUint {
    fib_pair(n).into_fib()
}

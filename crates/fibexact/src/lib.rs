//! # fibexact
//!
//! Exact Fibonacci numbers at arbitrary index. The production path is fast
//! doubling: `O(log n)` big-integer multiplications, recursion depth bounded
//! by the bit length of `n`, with optional per-engine memoization for
//! repeated queries. Linear-iteration and matrix-exponentiation baselines are
//! included for cross-checking.
//!
//! Results are arbitrary-precision integers (`num_bigint::BigUint`): no
//! approximation, no overflow, at any index the host has memory for.

pub mod cache;
pub mod constants;
pub mod engine;
pub mod error;
pub mod fastdoubling;
pub mod index;
pub mod iterator;
pub mod matrix;
pub mod pair;

// Re-exports
pub use constants::{FIB_TABLE, MAX_FIB_U64};
pub use engine::FibEngine;
pub use error::FibError;
pub use index::Index;
pub use pair::FibPair;

use num_bigint::BigUint;

/// Compute F(n) using the fast doubling algorithm.
///
/// This is a convenience function for one-off queries. For repeated or
/// incremental querying, use [`FibEngine`], which memoizes intermediate
/// pairs across calls.
///
/// # Example
/// ```
/// assert_eq!(fibexact::fibonacci(10).to_string(), "55");
/// assert_eq!(fibexact::fibonacci(0).to_string(), "0");
/// assert_eq!(fibexact::fibonacci(100).to_string(), "354224848179261915075");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    fastdoubling::fib(Index::new(n))
}

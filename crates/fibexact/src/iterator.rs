//! Linear-iteration baseline using the standard additive recurrence.
//!
//! Exact at any depth but O(n) additions, so it exists as the comparison
//! baseline and cross-check oracle for the sub-linear paths, not as the
//! production route to large indices.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::index::Index;

/// Lazy iterator over the Fibonacci sequence.
///
/// Yields `(index, F(index))` pairs starting from F(0), one addition per
/// step.
///
/// # Example
/// ```
/// use fibexact::iterator::FibIterator;
///
/// let f6 = FibIterator::new().find(|(i, _)| *i == 6).unwrap();
/// assert_eq!(f6.1.to_string(), "8");
/// ```
pub struct FibIterator {
    curr: BigUint,
    next: BigUint,
    index: u64,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            curr: BigUint::zero(),
            next: BigUint::one(),
            index: 0,
        }
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = (u64, BigUint);

    fn next(&mut self) -> Option<Self::Item> {
        let item = (self.index, self.curr.clone());
        let sum = &self.curr + &self.next;
        self.curr = std::mem::replace(&mut self.next, sum);
        self.index += 1;
        Some(item)
    }
}

/// Compute `F(n)` by linear iteration. O(n); oracle use only.
#[must_use]
pub fn fib_linear(n: Index) -> BigUint {
    let mut curr = BigUint::zero();
    let mut next = BigUint::one();
    for _ in 0..n.get() {
        let sum = &curr + &next;
        curr = std::mem::replace(&mut next, sum);
    }
    curr
}

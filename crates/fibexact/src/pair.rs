//! Consecutive Fibonacci value pairs and the doubling identities.
//!
//! The identities driving every sub-linear path in this crate:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::constants::FIB_TABLE;

/// The pair `(F(n), F(n+1))` of consecutive Fibonacci values anchored at `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibPair {
    /// F(n).
    pub fib: BigUint,
    /// F(n+1).
    pub next: BigUint,
}

impl FibPair {
    /// The pair for `n = 0`: `(F(0), F(1)) = (0, 1)`.
    #[must_use]
    pub fn base() -> Self {
        Self {
            fib: BigUint::zero(),
            next: BigUint::one(),
        }
    }

    /// Build a pair for `n <= 92` directly from the u64 table.
    ///
    /// # Panics
    /// Panics if `n > 92` (F(n+1) would not fit in the table).
    #[must_use]
    pub(crate) fn from_table(n: u64) -> Self {
        let i = usize::try_from(n).expect("table index fits in usize");
        Self {
            fib: BigUint::from(FIB_TABLE[i]),
            next: BigUint::from(FIB_TABLE[i + 1]),
        }
    }

    /// Map the pair at `k` to the pair at `2k` via the doubling identities.
    ///
    /// Three big-integer products: `F(k) * (2*F(k+1) - F(k))` and the two
    /// squarings of `F(k)^2 + F(k+1)^2`.
    #[must_use]
    pub fn doubled(&self) -> Self {
        // t = 2*F(k+1) - F(k); never underflows since F(k+1) >= F(k) >= 0
        // with equality only at k = 1 where 2*1 - 1 = 1.
        let mut t = self.next.clone();
        t <<= 1;
        t -= &self.fib;

        let f2k = &self.fib * &t;
        let f2k1 = &self.fib * &self.fib + &self.next * &self.next;

        Self {
            fib: f2k,
            next: f2k1,
        }
    }

    /// Shift `(F(m), F(m+1))` to `(F(m+1), F(m+2))` with a single addition.
    #[must_use]
    pub fn advanced(mut self) -> Self {
        // After the swap, `fib` holds old F(m+1) and `next` accumulates
        // old F(m) + old F(m+1) = F(m+2).
        std::mem::swap(&mut self.fib, &mut self.next);
        self.next += &self.fib;
        self
    }

    /// Extract `F(n)`, consuming the pair without cloning.
    #[must_use]
    pub fn into_fib(self) -> BigUint {
        self.fib
    }
}

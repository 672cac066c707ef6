//! Matrix-exponentiation baseline.
//!
//! Computes F(n) via Q^n where Q = [[1,1],[1,0]], using binary
//! exponentiation (square-and-multiply). Exact and O(log n) matrix products,
//! but each step does more big-integer arithmetic than the two-term doubling
//! identities, so this is the documented intermediate design point rather
//! than the production path.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::index::Index;

/// Symmetric 2x2 matrix `[[a, b], [b, c]]`.
///
/// Every power of Q is symmetric, so only three entries are carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mat2 {
    pub a: BigUint,
    pub b: BigUint,
    pub c: BigUint,
}

impl Mat2 {
    /// The identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            a: BigUint::one(),
            b: BigUint::zero(),
            c: BigUint::one(),
        }
    }

    /// The Fibonacci Q-matrix `[[1, 1], [1, 0]]`.
    #[must_use]
    pub fn q() -> Self {
        Self {
            a: BigUint::one(),
            b: BigUint::one(),
            c: BigUint::zero(),
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.a.is_one() && self.b.is_zero() && self.c.is_one()
    }

    /// Product of two symmetric matrices (the result stays symmetric for
    /// powers of the same base).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            a: &self.a * &other.a + &self.b * &other.b,
            b: &self.a * &other.b + &self.b * &other.c,
            c: &self.b * &other.b + &self.c * &other.c,
        }
    }

    /// Square, exploiting symmetry.
    #[must_use]
    pub fn square(&self) -> Self {
        let b_sq = &self.b * &self.b;
        Self {
            a: &self.a * &self.a + &b_sq,
            b: (&self.a + &self.c) * &self.b,
            c: b_sq + &self.c * &self.c,
        }
    }
}

/// Compute `F(n)` via binary exponentiation of the Q-matrix.
///
/// `Q^n = [[F(n+1), F(n)], [F(n), F(n-1)]]`, so F(n) is the off-diagonal
/// entry.
#[must_use]
pub fn fib(n: Index) -> BigUint {
    let n = n.get();
    if n == 0 {
        return BigUint::zero();
    }

    let base = Mat2::q();
    let mut result = Mat2::identity();
    let num_bits = 64 - n.leading_zeros();
    for i in (0..num_bits).rev() {
        result = result.square();
        if (n >> i) & 1 == 1 {
            result = result.mul(&base);
        }
    }
    result.b
}

//! Validated sequence index.
//!
//! `Index` is the domain boundary: every computation entry point takes an
//! `Index`, and an `Index` can only be built from a non-negative integer.
//! Negative or non-integral inputs are rejected here, before any recursion.

use std::fmt;
use std::str::FromStr;

use crate::error::FibError;

/// A position in the Fibonacci sequence, guaranteed non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(u64);

impl Index {
    /// Wrap a raw `u64` index. Always valid: `u64` cannot be negative.
    #[must_use]
    pub const fn new(n: u64) -> Self {
        Self(n)
    }

    /// The raw index value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for Index {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

impl From<u32> for Index {
    fn from(n: u32) -> Self {
        Self(u64::from(n))
    }
}

impl TryFrom<i64> for Index {
    type Error = FibError;

    fn try_from(n: i64) -> Result<Self, FibError> {
        u64::try_from(n)
            .map(Self)
            .map_err(|_| FibError::invalid(format!("index must be non-negative, got {n}")))
    }
}

impl TryFrom<i128> for Index {
    type Error = FibError;

    fn try_from(n: i128) -> Result<Self, FibError> {
        u64::try_from(n).map(Self).map_err(|_| {
            if n < 0 {
                FibError::invalid(format!("index must be non-negative, got {n}"))
            } else {
                FibError::invalid(format!("index {n} exceeds the supported range (u64)"))
            }
        })
    }
}

impl TryFrom<f64> for Index {
    type Error = FibError;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn try_from(x: f64) -> Result<Self, FibError> {
        if !x.is_finite() {
            return Err(FibError::invalid(format!("index must be finite, got {x}")));
        }
        if x < 0.0 {
            return Err(FibError::invalid(format!(
                "index must be non-negative, got {x}"
            )));
        }
        if x.fract() != 0.0 {
            return Err(FibError::invalid(format!("index must be an integer, got {x}")));
        }
        // 2^64 as f64; everything at or above it does not fit.
        if x >= 18_446_744_073_709_551_616.0 {
            return Err(FibError::invalid(format!(
                "index {x} exceeds the supported range (u64)"
            )));
        }
        Ok(Self(x as u64))
    }
}

impl FromStr for Index {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, FibError> {
        s.parse::<u64>().map(Self).map_err(|_| {
            if s.starts_with('-') {
                FibError::invalid(format!("index must be non-negative, got {s}"))
            } else {
                FibError::invalid(format!("index must be a decimal integer, got {s:?}"))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_unsigned_is_infallible() {
        assert_eq!(Index::from(0u64).get(), 0);
        assert_eq!(Index::from(42u32).get(), 42);
        assert_eq!(Index::new(u64::MAX).get(), u64::MAX);
    }

    #[test]
    fn negative_signed_rejected() {
        assert!(Index::try_from(-1i64).is_err());
        assert!(Index::try_from(-1i128).is_err());
        assert_eq!(Index::try_from(11i64).unwrap().get(), 11);
    }

    #[test]
    fn non_integral_float_rejected() {
        let err = Index::try_from(1.5f64).unwrap_err();
        assert!(matches!(err, FibError::InvalidArgument { .. }));
        assert!(Index::try_from(-2.0f64).is_err());
        assert!(Index::try_from(f64::NAN).is_err());
        assert!(Index::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn integral_float_accepted() {
        assert_eq!(Index::try_from(0.0f64).unwrap().get(), 0);
        assert_eq!(Index::try_from(100.0f64).unwrap().get(), 100);
    }

    #[test]
    fn parse_decimal() {
        assert_eq!("71".parse::<Index>().unwrap().get(), 71);
        assert_eq!("1000".parse::<Index>().unwrap().get(), 1000);
        assert!("-1".parse::<Index>().is_err());
        assert!("1.5".parse::<Index>().is_err());
        assert!("fib".parse::<Index>().is_err());
    }

    #[test]
    fn parse_rejects_surrounding_whitespace() {
        assert!(" 1000".parse::<Index>().is_err());
        assert!("1000 ".parse::<Index>().is_err());
        assert!(" 1000 ".parse::<Index>().is_err());
    }

    #[test]
    fn oversized_i128_rejected() {
        let err = Index::try_from(i128::from(u64::MAX) + 1).unwrap_err();
        assert!(err.to_string().contains("supported range"));
    }
}

//! Error type for Fibonacci index validation.

/// Error type for Fibonacci calculations.
///
/// Arithmetic itself cannot fail (arbitrary precision, no overflow), so the
/// only category is invalid input, rejected before any computation starts.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// The requested index is not a non-negative integer.
    #[error("invalid index: {reason}")]
    InvalidArgument {
        /// Human-readable description of the rejected value.
        reason: String,
    },
}

impl FibError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_error_display() {
        let err = FibError::invalid("index must be non-negative, got -1");
        assert_eq!(
            err.to_string(),
            "invalid index: index must be non-negative, got -1"
        );
    }
}

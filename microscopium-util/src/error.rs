//! Error types for microscopium-util.

use thiserror::Error;

/// Errors raised while normalising a seed into a [`RandomState`](crate::RandomState).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomStateError {
    /// The input cannot be used to build a random state.
    #[error("invalid input {input} to generate random state")]
    InvalidSeed {
        /// The offending input, rendered for diagnostics.
        input: String,
    },
}

impl RandomStateError {
    pub(crate) fn invalid_seed(input: impl ToString) -> Self {
        RandomStateError::InvalidSeed {
            input: input.to_string(),
        }
    }
}

/// Result alias for seed normalisation.
pub type RandomStateResult<T> = Result<T, RandomStateError>;

/// A float could not be represented as an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FloatToIntError {
    /// The value is NaN.
    #[error("cannot convert float NaN to integer")]
    NaN,

    /// The value is positive or negative infinity.
    #[error("cannot convert float infinity to integer")]
    Infinite,

    /// The truncated value does not fit in an `i64`.
    #[error("float {value} out of range for i64")]
    OutOfRange {
        /// The original value.
        value: f64,
    },
}

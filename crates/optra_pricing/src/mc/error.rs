//! Monte Carlo pricer error types.

use std::fmt;

use optra_core::types::PricingError;

/// Errors from the Monte Carlo pricers.
///
/// These cover contract and ensemble mismatches only. Sampling noise
/// is not an error; it is reported through
/// [`McEstimate::std_error`](super::McEstimate::std_error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum McError {
    /// The ensemble has too few paths for a standard error.
    TooFewPaths(usize),
    /// A barrier contract was passed to the vanilla pricer.
    UnexpectedBarrier,
    /// A vanilla contract was passed to the barrier pricer.
    MissingBarrier,
}

impl fmt::Display for McError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPaths(n) => {
                write!(f, "Too few paths: {n} (standard error needs at least 2)")
            }
            Self::UnexpectedBarrier => {
                write!(f, "Contract carries a barrier: use the barrier pricer")
            }
            Self::MissingBarrier => {
                write!(f, "Contract has no barrier: use the vanilla pricer")
            }
        }
    }
}

impl std::error::Error for McError {}

impl From<McError> for PricingError {
    fn from(err: McError) -> Self {
        PricingError::InvalidParameter(err.to_string())
    }
}

//! Simulation layer error types.

use std::fmt;

use optra_core::types::PricingError;
use optra_models::correlation::CorrelationError;

use super::config::{MAX_PATHS, MAX_STEPS};

/// Errors produced while configuring or running a path simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Path count outside `[1, MAX_PATHS]`.
    InvalidPathCount(usize),
    /// Step count outside `[1, MAX_STEPS]`.
    InvalidStepCount(usize),
    /// Horizon is non-finite or non-positive.
    InvalidHorizon {
        /// The rejected horizon in years.
        horizon: f64,
    },
    /// Correlation matrix dimension does not match the factor count.
    FactorCountMismatch {
        /// Number of factors supplied.
        factors: usize,
        /// Dimension of the correlation matrix.
        dim: usize,
    },
    /// A simulator needs at least one factor.
    NoFactors,
    /// Stored path data does not match the declared shape.
    ShapeMismatch {
        /// Expected flat length, `n_paths * (n_steps + 1)`.
        expected: usize,
        /// Actual length of the supplied data.
        got: usize,
    },
    /// The correlation structure is invalid or not positive definite.
    Correlation(CorrelationError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(n) => {
                write!(f, "Invalid path count {n}: must be in range [1, {MAX_PATHS}]")
            }
            Self::InvalidStepCount(n) => {
                write!(f, "Invalid step count {n}: must be in range [1, {MAX_STEPS}]")
            }
            Self::InvalidHorizon { horizon } => {
                write!(f, "Invalid horizon: T = {horizon}")
            }
            Self::FactorCountMismatch { factors, dim } => {
                write!(
                    f,
                    "Correlation dimension {dim} does not match factor count {factors}"
                )
            }
            Self::NoFactors => write!(f, "At least one factor is required"),
            Self::ShapeMismatch { expected, got } => {
                write!(f, "Path data length {got} does not match shape: expected {expected}")
            }
            Self::Correlation(e) => write!(f, "Correlation error: {e}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Correlation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CorrelationError> for SimulationError {
    fn from(err: CorrelationError) -> Self {
        Self::Correlation(err)
    }
}

impl From<SimulationError> for PricingError {
    fn from(err: SimulationError) -> Self {
        PricingError::InvalidParameter(err.to_string())
    }
}

//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing and simulation operations
//!
//! Upper layers define richer, operation-specific error enums and convert
//! them into [`PricingError`] at the crate boundary, so callers only ever
//! match on the two categories below.

use std::fmt;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. Validation happens before
/// any expensive computation, and failures are always returned as values.
/// Sampling noise is never an error: Monte Carlo estimators report a
/// standard error alongside the estimate instead.
///
/// # Variants
/// - `InvalidParameter`: Inputs outside the model's domain
/// - `NumericalInstability`: Intermediate quantities lost finiteness
///
/// # Examples
/// ```
/// use optra_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid parameter: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Input outside the model's domain (non-positive volatility, barrier
    /// below spot, risk-neutral probability outside [0, 1], ...)
    InvalidParameter(String),

    /// Numerical instability during computation
    NumericalInstability(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

//! Errors from closed-form pricing.

use optra_core::types::PricingError;
use thiserror::Error;

/// Errors raised by the analytical pricers.
///
/// Validation happens before any formula is evaluated. The only runtime
/// failure mode after validation is loss of finiteness in an intermediate
/// quantity, reported as `NumericalInstability`.
///
/// # Examples
/// ```
/// use optra_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::BarrierNotAboveSpot { barrier: 90.0, spot: 100.0 };
/// assert_eq!(
///     format!("{}", err),
///     "Barrier level L = 90 must exceed spot S = 100"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticalError {
    /// Strike must be positive and finite.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The rejected strike
        strike: f64,
    },

    /// Expiry must be positive and finite.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The rejected expiry in years
        expiry: f64,
    },

    /// An up-and-out option priced with the barrier at or below the spot
    /// is already knocked out.
    #[error("Barrier level L = {barrier} must exceed spot S = {spot}")]
    BarrierNotAboveSpot {
        /// The barrier level
        barrier: f64,
        /// The spot price
        spot: f64,
    },

    /// With the barrier at or below the strike an up-and-out call can
    /// never pay, and the reflection decomposition degenerates.
    #[error("Barrier level L = {barrier} must exceed strike K = {strike}")]
    BarrierNotAboveStrike {
        /// The barrier level
        barrier: f64,
        /// The strike
        strike: f64,
    },

    /// Contract shape the analytical layer has no closed form for.
    #[error("Unsupported contract: {reason}")]
    UnsupportedContract {
        /// What made the contract unsupported
        reason: String,
    },

    /// An intermediate quantity lost finiteness.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// What overflowed or degenerated
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::NumericalInstability { message } => {
                PricingError::NumericalInstability(message)
            }
            other => PricingError::InvalidParameter(other.to_string()),
        }
    }
}

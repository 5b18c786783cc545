//! Instrument validation errors.

use optra_core::types::PricingError;
use thiserror::Error;

/// Errors from option contract validation.
///
/// # Examples
/// ```
/// use optra_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert_eq!(format!("{}", err), "Invalid strike: K = -100");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
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

    /// Barrier level must be positive and finite.
    #[error("Invalid barrier level: L = {level}")]
    InvalidBarrierLevel {
        /// The rejected barrier level
        level: f64,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidParameter(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_strike_display() {
        let err = InstrumentError::InvalidStrike { strike: -100.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = -100");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = InstrumentError::InvalidExpiry { expiry: 0.0 };
        assert_eq!(format!("{}", err), "Invalid expiry: T = 0");
    }

    #[test]
    fn test_invalid_barrier_level_display() {
        let err = InstrumentError::InvalidBarrierLevel { level: f64::NAN };
        assert_eq!(format!("{}", err), "Invalid barrier level: L = NaN");
    }

    #[test]
    fn test_conversion_to_pricing_error() {
        let err = InstrumentError::InvalidExpiry { expiry: -1.0 };
        let pricing: PricingError = err.into();
        match pricing {
            PricingError::InvalidParameter(msg) => {
                assert!(msg.contains("Invalid expiry"));
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = InstrumentError::InvalidStrike { strike: 0.0 };
        let _: &dyn std::error::Error = &err;
    }
}

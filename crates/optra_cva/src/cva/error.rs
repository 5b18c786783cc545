//! CVA layer error types.

use thiserror::Error;

use optra_core::types::PricingError;
use optra_models::analytical::AnalyticalError;
use optra_models::market::MarketError;
use optra_pricing::simulation::SimulationError;

/// Errors from CVA parameter validation and the simulation run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CvaError {
    /// Firm value must be finite and strictly positive.
    #[error("Invalid firm value: V = {value}")]
    InvalidFirmValue {
        /// The rejected firm value.
        value: f64,
    },

    /// Firm volatility must be finite and strictly positive.
    #[error("Invalid firm volatility: sigma = {volatility}")]
    InvalidFirmVolatility {
        /// The rejected volatility.
        volatility: f64,
    },

    /// Debt threshold must be finite and strictly positive.
    #[error("Invalid debt threshold: D = {debt}")]
    InvalidDebt {
        /// The rejected debt threshold.
        debt: f64,
    },

    /// Recovery rate must lie in `[0, 1]`.
    #[error("Invalid recovery rate: R = {recovery} (must be in [0, 1])")]
    InvalidRecovery {
        /// The rejected recovery rate.
        recovery: f64,
    },

    /// Asset-firm correlation must satisfy `|rho| < 1`.
    #[error("Invalid correlation: rho = {correlation} (must satisfy |rho| < 1)")]
    InvalidCorrelation {
        /// The rejected correlation.
        correlation: f64,
    },

    /// The knockout barrier must sit above the asset spot.
    #[error("Barrier level L = {level} must exceed spot S = {spot}")]
    BarrierBelowSpot {
        /// The contract's barrier level.
        level: f64,
        /// The asset spot price.
        spot: f64,
    },

    /// The run needs at least two paths for a standard error.
    #[error("Too few paths: {0} (standard error needs at least 2)")]
    TooFewPaths(usize),

    /// The engine prices barrier contracts only.
    #[error("Unsupported contract: {reason}")]
    UnsupportedContract {
        /// Why the contract is unsupported.
        reason: String,
    },

    /// Firm market parameters failed validation.
    #[error("Market parameter error: {0}")]
    Market(#[from] MarketError),

    /// The correlated simulation failed.
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// The analytical cross-check failed.
    #[error("Analytical pricing error: {0}")]
    Analytical(#[from] AnalyticalError),
}

impl From<CvaError> for PricingError {
    fn from(err: CvaError) -> Self {
        match err {
            CvaError::Analytical(inner) => inner.into(),
            CvaError::Simulation(inner) => inner.into(),
            other => PricingError::InvalidParameter(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CvaError::InvalidFirmValue { value: -1.0 }.to_string(),
            "Invalid firm value: V = -1"
        );
        assert_eq!(
            CvaError::InvalidRecovery { recovery: 1.5 }.to_string(),
            "Invalid recovery rate: R = 1.5 (must be in [0, 1])"
        );
        assert_eq!(
            CvaError::InvalidCorrelation { correlation: 1.0 }.to_string(),
            "Invalid correlation: rho = 1 (must satisfy |rho| < 1)"
        );
        assert_eq!(
            CvaError::TooFewPaths(1).to_string(),
            "Too few paths: 1 (standard error needs at least 2)"
        );
    }

    #[test]
    fn test_wrapped_errors_keep_their_message() {
        let err: CvaError = SimulationError::NoFactors.into();
        assert_eq!(
            err.to_string(),
            "Simulation error: At least one factor is required"
        );
    }

    #[test]
    fn test_converts_to_pricing_error() {
        let err: PricingError = CvaError::InvalidDebt { debt: 0.0 }.into();
        assert_eq!(
            err,
            PricingError::InvalidParameter("Invalid debt threshold: D = 0".to_string())
        );

        let numeric: PricingError = CvaError::Analytical(AnalyticalError::NumericalInstability {
            message: "barrier power term overflowed".to_string(),
        })
        .into();
        assert!(matches!(numeric, PricingError::NumericalInstability(_)));
    }
}

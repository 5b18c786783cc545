//! Lognormal market parameters.
//!
//! [`MarketParams`] is the single description of a geometric Brownian
//! motion factor used across the workspace: the analytical formulas, the
//! binomial lattice, and the Monte Carlo simulator all consume it. The
//! counterparty firm-value process in the CVA layer is the same type with
//! its own volatility.

use num_traits::Float;
use optra_core::types::PricingError;
use thiserror::Error;

/// Errors from market parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    /// Spot price must be positive and finite.
    #[error("Invalid spot: S = {spot}")]
    InvalidSpot {
        /// The rejected spot price
        spot: f64,
    },

    /// Volatility must be positive and finite.
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The rejected volatility
        volatility: f64,
    },

    /// Risk-free rate must be finite (negative rates are allowed).
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The rejected rate
        rate: f64,
    },
}

impl From<MarketError> for PricingError {
    fn from(err: MarketError) -> Self {
        PricingError::InvalidParameter(err.to_string())
    }
}

/// Parameters of a lognormal (geometric Brownian motion) price process.
///
/// Validated at construction, so every `MarketParams` value that exists is
/// inside the model's domain: positive finite spot, positive finite
/// volatility, finite rate.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use optra_models::market::MarketParams;
///
/// let market = MarketParams::new(100.0_f64, 0.04, 0.2).unwrap();
/// assert_eq!(market.spot(), 100.0);
///
/// // Zero volatility is rejected
/// assert!(MarketParams::new(100.0_f64, 0.04, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams<T: Float> {
    /// Current spot price (S₀)
    spot: T,
    /// Continuously compounded risk-free rate (r)
    rate: T,
    /// Annualised volatility (σ)
    volatility: T,
}

impl<T: Float> MarketParams<T> {
    /// Creates validated market parameters.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive and finite)
    /// * `rate` - Risk-free rate (must be finite; may be negative)
    /// * `volatility` - Annualised volatility (must be positive and finite)
    ///
    /// # Errors
    /// - `MarketError::InvalidSpot` if spot <= 0 or non-finite
    /// - `MarketError::InvalidVolatility` if volatility <= 0 or non-finite
    /// - `MarketError::InvalidRate` if rate is non-finite
    ///
    /// # Examples
    /// ```
    /// use optra_models::market::MarketParams;
    ///
    /// assert!(MarketParams::new(100.0_f64, -0.01, 0.2).is_ok());
    /// assert!(MarketParams::new(-100.0_f64, 0.04, 0.2).is_err());
    /// assert!(MarketParams::new(100.0_f64, f64::NAN, 0.2).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, MarketError> {
        let zero = T::zero();

        if !spot.is_finite() || spot <= zero {
            return Err(MarketError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !volatility.is_finite() || volatility <= zero {
            return Err(MarketError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !rate.is_finite() {
            return Err(MarketError::InvalidRate {
                rate: rate.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Discount factor e^(-r·t) for a horizon in years.
    #[inline]
    pub fn discount_factor(&self, horizon: T) -> T {
        (-self.rate * horizon).exp()
    }
}

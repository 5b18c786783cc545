//! Closed-form up-barrier call pricing via the reflection principle.
//!
//! For a continuously monitored barrier L above both spot and strike, the
//! knock-in call has a closed form built from the reflected lognormal
//! density, and the knock-out call follows from in-out parity:
//!
//! ```text
//! up-out = vanilla - up-in
//! ```
//!
//! ## Intermediates
//!
//! - λ = (r + σ²/2) / σ²
//! - x₁ = ln(S/L)/(σ√T) + λσ√T
//! - y₁ = ln(L/S)/(σ√T) + λσ√T
//! - y  = ln(L²/(S·K))/(σ√T) + λσ√T
//!
//! with the barrier-crossing terms scaled by (L/S)^(2λ) and (L/S)^(2λ-2).
//! The spot S enters every branch through the same [`MarketParams`] value.
//!
//! Barrier configurations the decomposition cannot represent are rejected:
//! L ≤ S would mean the option was knocked out before pricing, and L ≤ K
//! would leave the call nothing to pay below the barrier.

use num_traits::Float;

use super::black_scholes::{finite_or_unstable, validate_terms, BlackScholes};
use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::market::MarketParams;

/// A barrier price together with its reflection intermediates.
///
/// The intermediates are part of the contract of this module: integration
/// tests and downstream diagnostics compare them against independently
/// computed values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarrierValue<T: Float> {
    price: T,
    lambda: T,
    x1: T,
    y1: T,
    y: T,
}

impl<T: Float> BarrierValue<T> {
    /// Returns the option price.
    #[inline]
    pub fn price(&self) -> T {
        self.price
    }

    /// Returns λ = (r + σ²/2) / σ².
    #[inline]
    pub fn lambda(&self) -> T {
        self.lambda
    }

    /// Returns x₁ = ln(S/L)/(σ√T) + λσ√T.
    #[inline]
    pub fn x1(&self) -> T {
        self.x1
    }

    /// Returns y₁ = ln(L/S)/(σ√T) + λσ√T.
    #[inline]
    pub fn y1(&self) -> T {
        self.y1
    }

    /// Returns y = ln(L²/(S·K))/(σ√T) + λσ√T.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }
}

/// Prices an up-and-in call.
///
/// # Errors
/// - `AnalyticalError::InvalidStrike` / `InvalidExpiry` for bad terms
/// - `AnalyticalError::BarrierNotAboveSpot` if barrier <= spot
/// - `AnalyticalError::BarrierNotAboveStrike` if barrier <= strike
/// - `AnalyticalError::NumericalInstability` if a power term overflows
pub fn up_and_in_call<T: Float>(
    market: &MarketParams<T>,
    strike: T,
    barrier: T,
    expiry: T,
) -> Result<BarrierValue<T>, AnalyticalError> {
    validate_barrier_inputs(market, strike, barrier, expiry)?;

    let zero = T::zero();
    let two = T::from(2.0).unwrap();
    let half = T::from(0.5).unwrap();

    let spot = market.spot();
    let rate = market.rate();
    let vol = market.volatility();

    let vol_sqrt_t = vol * expiry.sqrt();
    let lambda = (rate + half * vol * vol) / (vol * vol);

    let x1 = (spot / barrier).ln() / vol_sqrt_t + lambda * vol_sqrt_t;
    let y1 = (barrier / spot).ln() / vol_sqrt_t + lambda * vol_sqrt_t;
    let y = (barrier * barrier / (spot * strike)).ln() / vol_sqrt_t + lambda * vol_sqrt_t;

    let ratio = barrier / spot;
    let power_in = ratio.powf(two * lambda);
    let power_out = ratio.powf(two * lambda - two);
    if !power_in.is_finite() || !power_out.is_finite() {
        return Err(AnalyticalError::NumericalInstability {
            message: "barrier power term overflowed".to_string(),
        });
    }

    let discount = market.discount_factor(expiry);

    // Direct crossing through the barrier region plus the reflected image
    // terms for paths that touch L before finishing between K and L
    let direct = spot * norm_cdf(x1) - strike * discount * norm_cdf(x1 - vol_sqrt_t);
    let reflected = spot * power_in * (norm_cdf(-y) - norm_cdf(-y1))
        - strike * discount * power_out * (norm_cdf(-y + vol_sqrt_t) - norm_cdf(-y1 + vol_sqrt_t));

    let price = finite_or_unstable((direct - reflected).max(zero), "up-and-in price")?;

    Ok(BarrierValue {
        price,
        lambda,
        x1,
        y1,
        y,
    })
}

/// Prices an up-and-out call through in-out parity.
///
/// Very large barriers reduce to the vanilla call: the knock-in mass
/// vanishes as L grows.
///
/// # Errors
/// Same conditions as [`up_and_in_call`].
///
/// # Examples
/// ```
/// use optra_models::analytical::barrier::up_and_out_call;
/// use optra_models::market::MarketParams;
///
/// let market = MarketParams::new(100.0_f64, 0.08, 0.3).unwrap();
/// let value = up_and_out_call(&market, 100.0, 150.0, 1.0).unwrap();
/// assert!((value.price() - 5.313).abs() < 0.001);
///
/// // Already knocked out
/// assert!(up_and_out_call(&market, 100.0, 95.0, 1.0).is_err());
/// ```
pub fn up_and_out_call<T: Float>(
    market: &MarketParams<T>,
    strike: T,
    barrier: T,
    expiry: T,
) -> Result<BarrierValue<T>, AnalyticalError> {
    let knock_in = up_and_in_call(market, strike, barrier, expiry)?;
    let vanilla = BlackScholes::new(*market).price_call(strike, expiry)?;

    let price = (vanilla - knock_in.price()).max(T::zero());

    Ok(BarrierValue {
        price,
        lambda: knock_in.lambda(),
        x1: knock_in.x1(),
        y1: knock_in.y1(),
        y: knock_in.y(),
    })
}

fn validate_barrier_inputs<T: Float>(
    market: &MarketParams<T>,
    strike: T,
    barrier: T,
    expiry: T,
) -> Result<(), AnalyticalError> {
    validate_terms(strike, expiry)?;

    if !barrier.is_finite() || barrier <= market.spot() {
        return Err(AnalyticalError::BarrierNotAboveSpot {
            barrier: barrier.to_f64().unwrap_or(f64::NAN),
            spot: market.spot().to_f64().unwrap_or(f64::NAN),
        });
    }

    if barrier <= strike {
        return Err(AnalyticalError::BarrierNotAboveStrike {
            barrier: barrier.to_f64().unwrap_or(f64::NAN),
            strike: strike.to_f64().unwrap_or(f64::NAN),
        });
    }

    Ok(())
}

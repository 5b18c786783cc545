//! Black-Scholes-Merton pricing for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
//! **Put Price**: P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Contract terms are validated per call and rejected before any formula
//! is evaluated. There is no intrinsic-value fallback at expiry: T = 0 is
//! outside the pricer's domain, not a limit it approximates.

use num_traits::Float;

use super::barrier;
use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::{BarrierStyle, OptionContract, OptionKind};
use crate::market::MarketParams;

/// Black-Scholes-Merton pricer over a set of market parameters.
///
/// Greeks are analytical and pinned down by finite-difference tests.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use optra_models::analytical::BlackScholes;
/// use optra_models::market::MarketParams;
///
/// let market = MarketParams::new(100.0_f64, 0.05, 0.2).unwrap();
/// let bs = BlackScholes::new(market);
///
/// let call = bs.price_call(100.0, 1.0).unwrap();
/// let put = bs.price_put(100.0, 1.0).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    market: MarketParams<T>,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a pricer from already-validated market parameters.
    #[inline]
    pub fn new(market: MarketParams<T>) -> Self {
        Self { market }
    }

    /// Returns the market parameters.
    #[inline]
    pub fn market(&self) -> &MarketParams<T> {
        &self.market
    }

    /// Computes the d₁ term.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Assumes positive strike and expiry; the validated entry points are
    /// [`BlackScholes::price_call`], [`BlackScholes::price_put`], and the
    /// Greeks.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();
        let vol = self.market.volatility();
        let vol_sqrt_t = vol * expiry.sqrt();

        let log_moneyness = (self.market.spot() / strike).ln();
        let drift = (self.market.rate() + half * vol * vol) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d₂ term.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.market.volatility() * expiry.sqrt()
    }

    /// Prices a European call.
    ///
    /// C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidStrike` if strike <= 0 or non-finite
    /// - `AnalyticalError::InvalidExpiry` if expiry <= 0 or non-finite
    /// - `AnalyticalError::NumericalInstability` if the price degenerates
    ///
    /// # Examples
    /// ```
    /// use optra_models::analytical::BlackScholes;
    /// use optra_models::market::MarketParams;
    ///
    /// let market = MarketParams::new(100.0_f64, 0.04, 0.2).unwrap();
    /// let bs = BlackScholes::new(market);
    ///
    /// let price = bs.price_call(100.0, 1.0).unwrap();
    /// assert!((price - 9.925).abs() < 0.01);
    ///
    /// // Expired contracts are rejected, not approximated
    /// assert!(bs.price_call(100.0, 0.0).is_err());
    /// ```
    pub fn price_call(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        validate_terms(strike, expiry)?;

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = self.market.discount_factor(expiry);

        let price = self.market.spot() * norm_cdf(d1) - strike * discount * norm_cdf(d2);
        finite_or_unstable(price, "call price")
    }

    /// Prices a European put.
    ///
    /// P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
    ///
    /// # Errors
    /// Same conditions as [`BlackScholes::price_call`].
    pub fn price_put(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        validate_terms(strike, expiry)?;

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = self.market.discount_factor(expiry);

        let price = strike * discount * norm_cdf(-d2) - self.market.spot() * norm_cdf(-d1);
        finite_or_unstable(price, "put price")
    }

    /// Prices an [`OptionContract`], dispatching on its shape.
    ///
    /// Vanilla contracts go through the call/put formulas; up-and-out call
    /// contracts go through the reflection-principle barrier formula.
    ///
    /// # Errors
    /// Validation errors from the underlying formula, plus
    /// `AnalyticalError::UnsupportedContract` for barrier shapes without a
    /// closed form.
    ///
    /// # Examples
    /// ```
    /// use optra_models::analytical::BlackScholes;
    /// use optra_models::instruments::OptionContract;
    /// use optra_models::market::MarketParams;
    ///
    /// let market = MarketParams::new(100.0_f64, 0.08, 0.3).unwrap();
    /// let contract = OptionContract::up_and_out_call(100.0, 1.0, 150.0).unwrap();
    ///
    /// let price = BlackScholes::new(market).price(&contract).unwrap();
    /// assert!((price - 5.313).abs() < 0.001);
    /// ```
    pub fn price(&self, contract: &OptionContract<T>) -> Result<T, AnalyticalError> {
        match contract.barrier() {
            None => match contract.kind() {
                OptionKind::Call => self.price_call(contract.strike(), contract.expiry()),
                OptionKind::Put => self.price_put(contract.strike(), contract.expiry()),
            },
            Some(b) => match (b.style(), contract.kind()) {
                (BarrierStyle::UpAndOut, OptionKind::Call) => Ok(barrier::up_and_out_call(
                    &self.market,
                    contract.strike(),
                    b.level(),
                    contract.expiry(),
                )?
                .price()),
                (BarrierStyle::UpAndOut, OptionKind::Put) => {
                    Err(AnalyticalError::UnsupportedContract {
                        reason: "no closed form for up-and-out puts".to_string(),
                    })
                }
            },
        }
    }

    /// Delta (∂V/∂S): Φ(d₁) for calls, Φ(d₁) - 1 for puts.
    ///
    /// # Errors
    /// Same validation as the prices.
    pub fn delta(&self, strike: T, expiry: T, kind: OptionKind) -> Result<T, AnalyticalError> {
        validate_terms(strike, expiry)?;

        let n_d1 = norm_cdf(self.d1(strike, expiry));
        Ok(match kind {
            OptionKind::Call => n_d1,
            OptionKind::Put => n_d1 - T::one(),
        })
    }

    /// Gamma (∂²V/∂S²): φ(d₁) / (S·σ·√T), identical for calls and puts.
    ///
    /// # Errors
    /// Same validation as the prices.
    pub fn gamma(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        validate_terms(strike, expiry)?;

        let d1 = self.d1(strike, expiry);
        let denom = self.market.spot() * self.market.volatility() * expiry.sqrt();
        Ok(norm_pdf(d1) / denom)
    }

    /// Vega (∂V/∂σ): S·√T·φ(d₁), identical for calls and puts.
    ///
    /// # Errors
    /// Same validation as the prices.
    pub fn vega(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        validate_terms(strike, expiry)?;

        let d1 = self.d1(strike, expiry);
        Ok(self.market.spot() * expiry.sqrt() * norm_pdf(d1))
    }

    /// Theta (∂V/∂t), the time decay.
    ///
    /// - Call: -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·Φ(d₂)
    /// - Put: -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·Φ(-d₂)
    ///
    /// # Errors
    /// Same validation as the prices.
    pub fn theta(&self, strike: T, expiry: T, kind: OptionKind) -> Result<T, AnalyticalError> {
        validate_terms(strike, expiry)?;

        let two = T::from(2.0).unwrap();
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = self.market.discount_factor(expiry);
        let rate = self.market.rate();

        let decay =
            -(self.market.spot() * self.market.volatility() * norm_pdf(d1)) / (two * expiry.sqrt());

        Ok(match kind {
            OptionKind::Call => decay - rate * strike * discount * norm_cdf(d2),
            OptionKind::Put => decay + rate * strike * discount * norm_cdf(-d2),
        })
    }

    /// Rho (∂V/∂r): K·T·e^(-rT)·Φ(d₂) for calls, -K·T·e^(-rT)·Φ(-d₂) for puts.
    ///
    /// # Errors
    /// Same validation as the prices.
    pub fn rho(&self, strike: T, expiry: T, kind: OptionKind) -> Result<T, AnalyticalError> {
        validate_terms(strike, expiry)?;

        let d2 = self.d2(strike, expiry);
        let discount = self.market.discount_factor(expiry);
        let scale = strike * expiry * discount;

        Ok(match kind {
            OptionKind::Call => scale * norm_cdf(d2),
            OptionKind::Put => -scale * norm_cdf(-d2),
        })
    }
}

/// Rejects strikes and expiries outside the pricing domain.
pub(super) fn validate_terms<T: Float>(strike: T, expiry: T) -> Result<(), AnalyticalError> {
    let zero = T::zero();

    if !strike.is_finite() || strike <= zero {
        return Err(AnalyticalError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(f64::NAN),
        });
    }

    if !expiry.is_finite() || expiry <= zero {
        return Err(AnalyticalError::InvalidExpiry {
            expiry: expiry.to_f64().unwrap_or(f64::NAN),
        });
    }

    Ok(())
}

/// Maps a degenerate result to `NumericalInstability`.
pub(super) fn finite_or_unstable<T: Float>(
    value: T,
    context: &str,
) -> Result<T, AnalyticalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticalError::NumericalInstability {
            message: format!("{} is not finite", context),
        })
    }
}

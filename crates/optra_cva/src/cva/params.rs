//! Counterparty credit parameters under the Merton structural model.

use optra_models::analytical::norm_cdf;

use super::error::CvaError;

/// Credit parameters of a counterparty.
///
/// The counterparty's balance sheet is summarised by a firm value
/// following geometric Brownian motion and a single debt threshold.
/// Default happens when the firm value at the horizon sits below the
/// debt; the recovery rate bounds the loss when it does.
///
/// # Examples
///
/// ```rust
/// use optra_cva::cva::CounterpartyParams;
///
/// let counterparty = CounterpartyParams::new(200.0, 0.25, 175.0, 0.4).unwrap();
/// assert_eq!(counterparty.lgd(), 0.6);
///
/// // Default is likelier over longer horizons at this leverage.
/// let near = counterparty.default_probability(0.08, 0.25);
/// let far = counterparty.default_probability(0.08, 5.0);
/// assert!(near < far);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterpartyParams {
    firm_value: f64,
    firm_volatility: f64,
    debt: f64,
    recovery_rate: f64,
}

impl CounterpartyParams {
    /// Creates validated counterparty parameters.
    ///
    /// # Arguments
    ///
    /// * `firm_value` - Current firm value, strictly positive
    /// * `firm_volatility` - Firm value volatility, strictly positive
    /// * `debt` - Debt threshold triggering default, strictly positive
    /// * `recovery_rate` - Recovered fraction on default, in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns the matching [`CvaError`] variant for any input that is
    /// non-finite or outside its documented range.
    pub fn new(
        firm_value: f64,
        firm_volatility: f64,
        debt: f64,
        recovery_rate: f64,
    ) -> Result<Self, CvaError> {
        if !firm_value.is_finite() || firm_value <= 0.0 {
            return Err(CvaError::InvalidFirmValue { value: firm_value });
        }
        if !firm_volatility.is_finite() || firm_volatility <= 0.0 {
            return Err(CvaError::InvalidFirmVolatility {
                volatility: firm_volatility,
            });
        }
        if !debt.is_finite() || debt <= 0.0 {
            return Err(CvaError::InvalidDebt { debt });
        }
        if !recovery_rate.is_finite() || !(0.0..=1.0).contains(&recovery_rate) {
            return Err(CvaError::InvalidRecovery {
                recovery: recovery_rate,
            });
        }

        Ok(Self {
            firm_value,
            firm_volatility,
            debt,
            recovery_rate,
        })
    }

    /// Current firm value.
    #[inline]
    pub fn firm_value(&self) -> f64 {
        self.firm_value
    }

    /// Firm value volatility.
    #[inline]
    pub fn firm_volatility(&self) -> f64 {
        self.firm_volatility
    }

    /// Debt threshold below which the counterparty defaults.
    #[inline]
    pub fn debt(&self) -> f64 {
        self.debt
    }

    /// Recovered fraction of exposure on default.
    #[inline]
    pub fn recovery_rate(&self) -> f64 {
        self.recovery_rate
    }

    /// Loss given default, `1 - recovery_rate`.
    #[inline]
    pub fn lgd(&self) -> f64 {
        1.0 - self.recovery_rate
    }

    /// Merton default probability over `horizon` years.
    ///
    /// The firm value is lognormal under the risk-neutral drift, so
    /// the probability of finishing below the debt threshold is
    /// `Phi(-d2)` with
    ///
    /// ```text
    /// d2 = (ln(V0 / D) + (r - sigma_f^2 / 2) * horizon)
    ///      / (sigma_f * sqrt(horizon))
    /// ```
    ///
    /// Assumes a positive horizon.
    pub fn default_probability(&self, rate: f64, horizon: f64) -> f64 {
        let vol_sqrt_t = self.firm_volatility * horizon.sqrt();
        let d2 = ((self.firm_value / self.debt).ln()
            + (rate - 0.5 * self.firm_volatility * self.firm_volatility) * horizon)
            / vol_sqrt_t;
        norm_cdf(-d2)
    }
}

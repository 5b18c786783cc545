//! Validated option contracts.
//!
//! An [`OptionContract`] couples the economic terms (strike, expiry, call
//! or put) with an optional knockout barrier. Construction validates the
//! terms once; barrier-versus-spot consistency is checked by the pricers,
//! which are the first to see a spot price.

use num_traits::Float;

use super::error::InstrumentError;
use super::payoff::OptionKind;

/// Barrier monitoring styles.
///
/// Only the up-and-out style is implemented; the enum leaves room for the
/// remaining knock directions without changing the contract type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierStyle {
    /// Knocked out when the price touches or exceeds the barrier from below.
    UpAndOut,
}

/// A knockout barrier attached to an option contract.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Barrier<T: Float> {
    level: T,
    style: BarrierStyle,
}

impl<T: Float> Barrier<T> {
    /// Returns the barrier level (L).
    #[inline]
    pub fn level(&self) -> T {
        self.level
    }

    /// Returns the monitoring style.
    #[inline]
    pub fn style(&self) -> BarrierStyle {
        self.style
    }
}

/// A European option contract, vanilla or barrier.
///
/// # Examples
/// ```
/// use optra_models::instruments::{OptionContract, OptionKind};
///
/// let vanilla = OptionContract::european(100.0_f64, 1.0, OptionKind::Call).unwrap();
/// assert!(vanilla.barrier().is_none());
///
/// let barrier = OptionContract::up_and_out_call(100.0_f64, 1.0, 150.0).unwrap();
/// assert_eq!(barrier.barrier().unwrap().level(), 150.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract<T: Float> {
    strike: T,
    expiry: T,
    kind: OptionKind,
    barrier: Option<Barrier<T>>,
}

impl<T: Float> OptionContract<T> {
    /// Creates a vanilla European contract.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidStrike` if strike <= 0 or non-finite
    /// - `InstrumentError::InvalidExpiry` if expiry <= 0 or non-finite
    ///
    /// # Examples
    /// ```
    /// use optra_models::instruments::{OptionContract, OptionKind};
    ///
    /// assert!(OptionContract::european(100.0_f64, 1.0, OptionKind::Put).is_ok());
    /// assert!(OptionContract::european(100.0_f64, 0.0, OptionKind::Put).is_err());
    /// ```
    pub fn european(strike: T, expiry: T, kind: OptionKind) -> Result<Self, InstrumentError> {
        Self::validate_terms(strike, expiry)?;

        Ok(Self {
            strike,
            expiry,
            kind,
            barrier: None,
        })
    }

    /// Creates an up-and-out call contract.
    ///
    /// The barrier level is validated for positivity and finiteness here;
    /// whether it sits above the spot (it must, or the option is already
    /// knocked out) is a pricing-time check.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidStrike` if strike <= 0 or non-finite
    /// - `InstrumentError::InvalidExpiry` if expiry <= 0 or non-finite
    /// - `InstrumentError::InvalidBarrierLevel` if level <= 0 or non-finite
    pub fn up_and_out_call(strike: T, expiry: T, level: T) -> Result<Self, InstrumentError> {
        Self::validate_terms(strike, expiry)?;

        if !level.is_finite() || level <= T::zero() {
            return Err(InstrumentError::InvalidBarrierLevel {
                level: level.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            strike,
            expiry,
            kind: OptionKind::Call,
            barrier: Some(Barrier {
                level,
                style: BarrierStyle::UpAndOut,
            }),
        })
    }

    fn validate_terms(strike: T, expiry: T) -> Result<(), InstrumentError> {
        let zero = T::zero();

        if !strike.is_finite() || strike <= zero {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !expiry.is_finite() || expiry <= zero {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(())
    }

    /// Returns the strike (K).
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the expiry in years (T).
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the payoff kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the barrier, if any.
    #[inline]
    pub fn barrier(&self) -> Option<&Barrier<T>> {
        self.barrier.as_ref()
    }

    /// Terminal payoff ignoring any barrier.
    #[inline]
    pub fn vanilla_payoff(&self, spot: T) -> T {
        self.kind.payoff(spot, self.strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Construction =====

    #[test]
    fn test_european_valid() {
        let contract = OptionContract::european(100.0_f64, 1.0, OptionKind::Call).unwrap();
        assert_eq!(contract.strike(), 100.0);
        assert_eq!(contract.expiry(), 1.0);
        assert_eq!(contract.kind(), OptionKind::Call);
        assert!(contract.barrier().is_none());
    }

    #[test]
    fn test_european_rejects_bad_strike() {
        for strike in [0.0_f64, -50.0, f64::NAN, f64::INFINITY] {
            let result = OptionContract::european(strike, 1.0, OptionKind::Call);
            assert!(matches!(
                result,
                Err(InstrumentError::InvalidStrike { .. })
            ));
        }
    }

    #[test]
    fn test_european_rejects_bad_expiry() {
        for expiry in [0.0_f64, -1.0, f64::NAN] {
            let result = OptionContract::european(100.0, expiry, OptionKind::Put);
            assert!(matches!(
                result,
                Err(InstrumentError::InvalidExpiry { .. })
            ));
        }
    }

    #[test]
    fn test_up_and_out_call_valid() {
        let contract = OptionContract::up_and_out_call(100.0_f64, 1.0, 150.0).unwrap();
        assert_eq!(contract.kind(), OptionKind::Call);

        let barrier = contract.barrier().unwrap();
        assert_eq!(barrier.level(), 150.0);
        assert_eq!(barrier.style(), BarrierStyle::UpAndOut);
    }

    #[test]
    fn test_up_and_out_call_rejects_bad_level() {
        for level in [0.0_f64, -150.0, f64::NAN, f64::INFINITY] {
            let result = OptionContract::up_and_out_call(100.0, 1.0, level);
            assert!(matches!(
                result,
                Err(InstrumentError::InvalidBarrierLevel { .. })
            ));
        }
    }

    #[test]
    fn test_barrier_below_strike_constructs() {
        // Accepted at construction; the analytical pricer rejects it once
        // it can compare against the spot
        assert!(OptionContract::up_and_out_call(100.0_f64, 1.0, 90.0).is_ok());
    }

    // ===== Payoff =====

    #[test]
    fn test_vanilla_payoff_ignores_barrier() {
        let contract = OptionContract::up_and_out_call(100.0_f64, 1.0, 150.0).unwrap();
        assert_eq!(contract.vanilla_payoff(120.0), 20.0);
        assert_eq!(contract.vanilla_payoff(80.0), 0.0);
    }

    #[test]
    fn test_put_payoff() {
        let contract = OptionContract::european(100.0_f64, 1.0, OptionKind::Put).unwrap();
        assert_eq!(contract.vanilla_payoff(80.0), 20.0);
        assert_eq!(contract.vanilla_payoff(120.0), 0.0);
    }
}

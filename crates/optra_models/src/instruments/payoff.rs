//! Terminal payoff kinds.

use num_traits::Float;

/// The two European payoff kinds.
///
/// # Examples
/// ```
/// use optra_models::instruments::OptionKind;
///
/// assert_eq!(OptionKind::Call.payoff(110.0_f64, 100.0), 10.0);
/// assert_eq!(OptionKind::Put.payoff(110.0_f64, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKind {
    /// Right to buy: max(S - K, 0)
    Call,
    /// Right to sell: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Terminal payoff at the given spot and strike.
    #[inline]
    pub fn payoff<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionKind::Call => (spot - strike).max(zero),
            OptionKind::Put => (strike - spot).max(zero),
        }
    }

    /// Returns true for [`OptionKind::Call`].
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

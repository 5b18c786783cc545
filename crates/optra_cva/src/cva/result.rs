//! CVA calculation results.

/// Results of a correlated CVA simulation.
///
/// All monetary values are discounted to today. The simulated `cva`
/// and the analytical `uncorrelated_cva` bracket the modelling
/// choices: the former sees the asset-firm correlation and the
/// barrier, the latter assumes independent default on the vanilla
/// payoff and therefore overstates the adjustment for knockout
/// contracts. Their gap widens as the correlation moves away from
/// zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CvaResult {
    /// Expected discounted loss from counterparty default.
    pub cva: f64,
    /// Standard error of the CVA estimate.
    pub cva_std_error: f64,
    /// Option value ignoring default risk, from the same paths.
    pub default_free_value: f64,
    /// Analytical approximation `LGD x PD x vanilla call price`,
    /// assuming default and payoff are independent.
    pub uncorrelated_cva: f64,
}

impl CvaResult {
    /// Creates a result from its components.
    pub fn new(
        cva: f64,
        cva_std_error: f64,
        default_free_value: f64,
        uncorrelated_cva: f64,
    ) -> Self {
        Self {
            cva,
            cva_std_error,
            default_free_value,
            uncorrelated_cva,
        }
    }

    /// Credit-adjusted option value, `default_free_value - cva`.
    #[inline]
    pub fn adjusted_value(&self) -> f64 {
        self.default_free_value - self.cva
    }

    /// Half-width of the 95% confidence interval around `cva`.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.cva_std_error
    }
}

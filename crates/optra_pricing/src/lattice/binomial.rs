//! Cox-Ross-Rubinstein binomial tree.

use thiserror::Error;

use optra_core::types::PricingError;
use optra_models::instruments::OptionContract;
use optra_models::market::MarketParams;

/// Errors from the binomial lattice pricer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// Step count must be at least one.
    #[error("Invalid step count: {0} (must be at least 1)")]
    InvalidStepCount(usize),

    /// The risk-neutral up probability left `[0, 1]`.
    #[error("Risk-neutral probability {probability} outside [0, 1]")]
    RiskNeutralProbability {
        /// The offending probability.
        probability: f64,
    },

    /// The contract cannot be priced on a recombining tree.
    #[error("Unsupported contract: {reason}")]
    UnsupportedContract {
        /// Why the contract is unsupported.
        reason: String,
    },

    /// Backward induction produced a non-finite value.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Diagnostic detail.
        message: String,
    },
}

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        match err {
            LatticeError::NumericalInstability { message } => {
                PricingError::NumericalInstability(message)
            }
            other => PricingError::InvalidParameter(other.to_string()),
        }
    }
}

/// Cox-Ross-Rubinstein binomial tree for European options.
///
/// The tree uses the standard CRR parameterisation over `N` steps of
/// length `dt = T / N`:
///
/// ```text
/// u = exp(sigma * sqrt(dt))    d = 1 / u
/// p = (exp(r * dt) - d) / (u - d)
/// ```
///
/// Terminal payoffs are rolled back through `N` discounted expectation
/// sweeps over a single reusable buffer, so pricing is `O(N^2)` time
/// and `O(N)` memory. The result converges to the Black-Scholes price
/// at rate `O(1/N)`.
///
/// # Examples
///
/// ```rust
/// use optra_models::instruments::{OptionContract, OptionKind};
/// use optra_models::market::MarketParams;
/// use optra_pricing::lattice::BinomialTree;
///
/// let market = MarketParams::new(100.0, 0.04, 0.2).unwrap();
/// let contract = OptionContract::european(100.0, 1.0, OptionKind::Call).unwrap();
/// let price = BinomialTree::new(200).unwrap().price(&market, &contract).unwrap();
/// assert!((price - 9.915).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialTree {
    steps: usize,
}

impl BinomialTree {
    /// Creates a tree with the given number of time steps.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::InvalidStepCount`] for zero steps.
    pub fn new(steps: usize) -> Result<Self, LatticeError> {
        if steps == 0 {
            return Err(LatticeError::InvalidStepCount(steps));
        }
        Ok(Self { steps })
    }

    /// Number of time steps in the tree.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Prices a European contract on the tree.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::UnsupportedContract`] for barrier
    /// contracts, [`LatticeError::RiskNeutralProbability`] if the CRR
    /// up probability leaves `[0, 1]` for these parameters, and
    /// [`LatticeError::NumericalInstability`] if induction produces a
    /// non-finite value.
    pub fn price(
        &self,
        market: &MarketParams<f64>,
        contract: &OptionContract<f64>,
    ) -> Result<f64, LatticeError> {
        if contract.barrier().is_some() {
            return Err(LatticeError::UnsupportedContract {
                reason: "barrier contracts need path monitoring".to_string(),
            });
        }

        let n = self.steps;
        let dt = contract.expiry() / n as f64;
        let u = (market.volatility() * dt.sqrt()).exp();
        let d = 1.0 / u;
        let growth = (market.rate() * dt).exp();
        let p = (growth - d) / (u - d);
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(LatticeError::RiskNeutralProbability { probability: p });
        }

        let discount = (-market.rate() * dt).exp();
        let disc_p = discount * p;
        let disc_1mp = discount * (1.0 - p);
        let ratio = u / d;

        // Terminal layer, lowest node first, built multiplicatively.
        let mut values = vec![0.0_f64; n + 1];
        let mut node = market.spot() * d.powi(n as i32);
        for value in values.iter_mut() {
            *value = contract.vanilla_payoff(node);
            node *= ratio;
        }

        // Roll back in place; layer k needs only slots 0..=k.
        for step in (0..n).rev() {
            for j in 0..=step {
                values[j] = disc_p.mul_add(values[j + 1], disc_1mp * values[j]);
            }
        }

        let price = values[0];
        if !price.is_finite() {
            return Err(LatticeError::NumericalInstability {
                message: format!("lattice value is not finite: {price}"),
            });
        }
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use optra_models::analytical::BlackScholes;
    use optra_models::instruments::OptionKind;

    fn base_market() -> MarketParams<f64> {
        MarketParams::new(100.0, 0.04, 0.2).unwrap()
    }

    fn atm_call() -> OptionContract<f64> {
        OptionContract::european(100.0, 1.0, OptionKind::Call).unwrap()
    }

    // ===== Construction =====

    #[test]
    fn test_zero_steps_rejected() {
        assert_eq!(
            BinomialTree::new(0).unwrap_err(),
            LatticeError::InvalidStepCount(0)
        );
        assert_eq!(BinomialTree::new(1).unwrap().steps(), 1);
    }

    // ===== Reference values =====

    #[test]
    fn test_call_reference_values() {
        let market = base_market();
        let contract = atm_call();
        let cases = [
            (50, 9.8853641373),
            (200, 9.9151121035),
            (800, 9.9225671398),
        ];
        for (steps, expected) in cases {
            let price = BinomialTree::new(steps).unwrap().price(&market, &contract).unwrap();
            assert_relative_eq!(price, expected, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_put_reference_value() {
        let market = base_market();
        let contract = OptionContract::european(100.0, 1.0, OptionKind::Put).unwrap();
        let price = BinomialTree::new(200).unwrap().price(&market, &contract).unwrap();
        assert_relative_eq!(price, 5.9940560188, epsilon = 1e-8);
    }

    #[test]
    fn test_put_call_parity_holds_on_the_tree() {
        let market = base_market();
        let tree = BinomialTree::new(200).unwrap();
        let call = tree.price(&market, &atm_call()).unwrap();
        let put = tree
            .price(
                &market,
                &OptionContract::european(100.0, 1.0, OptionKind::Put).unwrap(),
            )
            .unwrap();
        let forward = 100.0 - 100.0 * (-0.04_f64).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-9);
    }

    #[test]
    fn test_deep_in_the_money_call_is_discounted_forward() {
        // With K = 1 no terminal node is out of the money, so the tree
        // computes S - K * exp(-r T) exactly.
        let market = base_market();
        let contract = OptionContract::european(1.0, 1.0, OptionKind::Call).unwrap();
        let price = BinomialTree::new(100).unwrap().price(&market, &contract).unwrap();
        assert_relative_eq!(price, 100.0 - (-0.04_f64).exp(), epsilon = 1e-9);
    }

    // ===== Convergence =====

    #[test]
    fn test_error_against_analytic_shrinks_with_steps() {
        let market = base_market();
        let contract = atm_call();
        let analytic = BlackScholes::new(market).price_call(100.0, 1.0).unwrap();

        let mut previous_error = f64::INFINITY;
        for steps in [50, 200, 800] {
            let price = BinomialTree::new(steps).unwrap().price(&market, &contract).unwrap();
            let error = (price - analytic).abs();
            assert!(
                error < previous_error,
                "error {error} did not shrink at {steps} steps"
            );
            previous_error = error;
        }
        assert!(previous_error < 0.005);
    }

    #[test]
    fn test_single_step_tree_is_sane() {
        let market = base_market();
        let price = BinomialTree::new(1).unwrap().price(&market, &atm_call()).unwrap();
        assert!(price > 0.0 && price < market.spot());
    }

    // ===== Degenerate parameters =====

    #[test]
    fn test_runaway_drift_breaks_risk_neutral_probability() {
        // r dt dwarfs sigma sqrt(dt), pushing p above 1.
        let market = MarketParams::new(100.0, 3.0, 0.05).unwrap();
        let result = BinomialTree::new(1).unwrap().price(&market, &atm_call());
        match result.unwrap_err() {
            LatticeError::RiskNeutralProbability { probability } => {
                assert!(probability > 1.0);
            }
            other => panic!("expected probability error, got {other:?}"),
        }
    }

    #[test]
    fn test_barrier_contract_rejected() {
        let market = base_market();
        let contract = OptionContract::up_and_out_call(100.0, 1.0, 150.0).unwrap();
        let result = BinomialTree::new(100).unwrap().price(&market, &contract);
        assert!(matches!(
            result.unwrap_err(),
            LatticeError::UnsupportedContract { .. }
        ));
    }

    // ===== Error plumbing =====

    #[test]
    fn test_lattice_errors_convert_to_pricing_errors() {
        let err: PricingError = LatticeError::InvalidStepCount(0).into();
        assert_eq!(
            err,
            PricingError::InvalidParameter(
                "Invalid step count: 0 (must be at least 1)".to_string()
            )
        );

        let err: PricingError = LatticeError::NumericalInstability {
            message: "lattice value is not finite: inf".to_string(),
        }
        .into();
        assert!(matches!(err, PricingError::NumericalInstability(_)));
    }
}

//! Correlated two-factor CVA simulation engine.

use rayon::prelude::*;

use optra_core::math::stats;
use optra_models::analytical::BlackScholes;
use optra_models::instruments::OptionContract;
use optra_models::market::MarketParams;
use optra_pricing::ensemble::{PathEnsemble, PathSummaries};
use optra_pricing::simulation::{PathSimulator, SimulationConfig};

use super::error::CvaError;
use super::params::CounterpartyParams;
use super::result::CvaResult;

/// Monte Carlo CVA engine for up-and-out call exposures.
///
/// One run simulates the asset and the counterparty firm value as
/// correlated GBM factors, evaluates the knockout payoff on the asset
/// leg, flags default where the terminal firm value falls below the
/// debt threshold, and averages the unrecovered losses over every
/// path. Paths where the counterparty survives contribute zero loss
/// but still count in the mean.
///
/// The engine inherits the simulator's determinism: the same contract,
/// engine, and config reproduce the [`CvaResult`] bit for bit.
#[derive(Debug, Clone)]
pub struct CvaEngine {
    market: MarketParams<f64>,
    counterparty: CounterpartyParams,
    correlation: f64,
}

impl CvaEngine {
    /// Creates an engine for one asset-counterparty pairing.
    ///
    /// `correlation` couples the Brownian drivers of the asset and the
    /// firm value. Negative values express wrong-way risk for a call:
    /// the firm weakens exactly when the option is worth most.
    ///
    /// # Errors
    ///
    /// Returns [`CvaError::InvalidCorrelation`] unless `|rho| < 1`.
    pub fn new(
        market: MarketParams<f64>,
        counterparty: CounterpartyParams,
        correlation: f64,
    ) -> Result<Self, CvaError> {
        if !correlation.is_finite() || correlation.abs() >= 1.0 {
            return Err(CvaError::InvalidCorrelation { correlation });
        }
        Ok(Self {
            market,
            counterparty,
            correlation,
        })
    }

    /// Asset market parameters.
    #[inline]
    pub fn market(&self) -> &MarketParams<f64> {
        &self.market
    }

    /// Counterparty credit parameters.
    #[inline]
    pub fn counterparty(&self) -> &CounterpartyParams {
        &self.counterparty
    }

    /// Asset-firm correlation.
    #[inline]
    pub fn correlation(&self) -> f64 {
        self.correlation
    }

    /// Runs the correlated simulation and estimates CVA.
    ///
    /// Alongside the simulated estimate the result carries
    /// `uncorrelated_cva`, the closed-form contrast
    /// `LGD x PD(horizon) x vanilla call price` that prices default
    /// and payoff as independent.
    ///
    /// # Errors
    ///
    /// Returns [`CvaError::UnsupportedContract`] for contracts without
    /// a barrier, [`CvaError::BarrierBelowSpot`] if the knockout level
    /// does not exceed the spot, [`CvaError::TooFewPaths`] for fewer
    /// than two paths, and propagates simulation or analytical
    /// failures.
    pub fn run(
        &self,
        contract: &OptionContract<f64>,
        config: &SimulationConfig,
    ) -> Result<CvaResult, CvaError> {
        let level = contract
            .barrier()
            .ok_or_else(|| CvaError::UnsupportedContract {
                reason: "CVA exposure needs an up-and-out call".to_string(),
            })?
            .level();
        if level <= self.market.spot() {
            return Err(CvaError::BarrierBelowSpot {
                level,
                spot: self.market.spot(),
            });
        }
        let n = config.n_paths();
        if n < 2 {
            return Err(CvaError::TooFewPaths(n));
        }

        let firm = MarketParams::new(
            self.counterparty.firm_value(),
            self.market.rate(),
            self.counterparty.firm_volatility(),
        )?;
        let simulator = PathSimulator::two_factor(self.market, firm, self.correlation)?;
        let ensembles = simulator.simulate(contract.expiry(), config)?;

        // Keep terminals and maxima only; the dense buffers get large
        // at counterparty-grade path counts.
        let asset_paths = PathSummaries::from_ensemble(&ensembles[0]);
        let firm_paths = PathSummaries::from_ensemble(&ensembles[1]);
        drop(ensembles);

        let debt = self.counterparty.debt();
        let lgd = self.counterparty.lgd();

        let (payoffs, losses): (Vec<f64>, Vec<f64>) = (0..n)
            .into_par_iter()
            .map(|path| {
                let payoff = if asset_paths.maximum(path) >= level {
                    0.0
                } else {
                    contract.vanilla_payoff(asset_paths.terminal(path))
                };
                let loss = if firm_paths.terminal(path) < debt {
                    lgd * payoff
                } else {
                    0.0
                };
                (payoff, loss)
            })
            .unzip();

        let discount = self.market.discount_factor(contract.expiry());
        let cva = discount * stats::mean(&losses);
        let cva_std_error = discount * stats::standard_error(&losses);
        let default_free_value = discount * stats::mean(&payoffs);

        let vanilla = BlackScholes::new(self.market)
            .price_call(contract.strike(), contract.expiry())?;
        let default_probability = self
            .counterparty
            .default_probability(self.market.rate(), contract.expiry());
        let uncorrelated_cva = lgd * default_probability * vanilla;

        Ok(CvaResult::new(
            cva,
            cva_std_error,
            default_free_value,
            uncorrelated_cva,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use optra_models::instruments::OptionKind;

    fn base_market() -> MarketParams<f64> {
        MarketParams::new(100.0, 0.08, 0.3).unwrap()
    }

    fn base_counterparty() -> CounterpartyParams {
        CounterpartyParams::new(200.0, 0.25, 175.0, 0.4).unwrap()
    }

    fn base_contract() -> OptionContract<f64> {
        OptionContract::up_and_out_call(100.0, 1.0, 150.0).unwrap()
    }

    fn small_config(seed: u64) -> SimulationConfig {
        SimulationConfig::new(2_000, 10, seed).unwrap()
    }

    // ===== Construction =====

    #[test]
    fn test_correlation_must_be_strictly_inside_unit_interval() {
        let market = base_market();
        let counterparty = base_counterparty();
        for rho in [1.0, -1.0, 1.5, f64::NAN] {
            let result = CvaEngine::new(market, counterparty, rho);
            assert!(matches!(
                result.unwrap_err(),
                CvaError::InvalidCorrelation { .. }
            ));
        }
        assert!(CvaEngine::new(market, counterparty, 0.999).is_ok());
        assert!(CvaEngine::new(market, counterparty, -0.5).is_ok());
    }

    #[test]
    fn test_accessors_round_trip() {
        let engine = CvaEngine::new(base_market(), base_counterparty(), 0.3).unwrap();
        assert_eq!(engine.market().spot(), 100.0);
        assert_eq!(engine.counterparty().debt(), 175.0);
        assert_eq!(engine.correlation(), 0.3);
    }

    // ===== Run validation =====

    #[test]
    fn test_vanilla_contract_rejected() {
        let engine = CvaEngine::new(base_market(), base_counterparty(), 0.3).unwrap();
        let contract = OptionContract::european(100.0, 1.0, OptionKind::Call).unwrap();
        let result = engine.run(&contract, &small_config(1));
        assert!(matches!(
            result.unwrap_err(),
            CvaError::UnsupportedContract { .. }
        ));
    }

    #[test]
    fn test_barrier_below_spot_rejected() {
        let market = MarketParams::new(160.0, 0.08, 0.3).unwrap();
        let engine = CvaEngine::new(market, base_counterparty(), 0.3).unwrap();
        let result = engine.run(&base_contract(), &small_config(1));
        assert_eq!(
            result.unwrap_err(),
            CvaError::BarrierBelowSpot {
                level: 150.0,
                spot: 160.0
            }
        );
    }

    #[test]
    fn test_single_path_rejected() {
        let engine = CvaEngine::new(base_market(), base_counterparty(), 0.3).unwrap();
        let config = SimulationConfig::new(1, 10, 7).unwrap();
        assert_eq!(
            engine.run(&base_contract(), &config).unwrap_err(),
            CvaError::TooFewPaths(1)
        );
    }

    // ===== Structural properties =====

    #[test]
    fn test_full_recovery_means_zero_cva() {
        let counterparty = CounterpartyParams::new(200.0, 0.25, 175.0, 1.0).unwrap();
        let engine = CvaEngine::new(base_market(), counterparty, 0.3).unwrap();
        let result = engine.run(&base_contract(), &small_config(11)).unwrap();
        assert_eq!(result.cva, 0.0);
        assert_eq!(result.cva_std_error, 0.0);
        assert!(result.default_free_value > 0.0);
    }

    #[test]
    fn test_cva_bounded_by_default_free_value() {
        let engine = CvaEngine::new(base_market(), base_counterparty(), 0.3).unwrap();
        let result = engine.run(&base_contract(), &small_config(22)).unwrap();
        assert!(result.cva >= 0.0);
        assert!(result.cva <= result.default_free_value + 1e-9);
        assert!(result.adjusted_value() <= result.default_free_value);
    }

    #[test]
    fn test_same_seed_reproduces_the_result() {
        let engine = CvaEngine::new(base_market(), base_counterparty(), 0.3).unwrap();
        let first = engine.run(&base_contract(), &small_config(33)).unwrap();
        let second = engine.run(&base_contract(), &small_config(33)).unwrap();
        assert_eq!(first, second);

        let third = engine.run(&base_contract(), &small_config(34)).unwrap();
        assert_ne!(first.cva, third.cva);
    }

    #[test]
    fn test_uncorrelated_contrast_matches_its_components() {
        let market = base_market();
        let counterparty = base_counterparty();
        let engine = CvaEngine::new(market, counterparty, 0.3).unwrap();
        let result = engine.run(&base_contract(), &small_config(44)).unwrap();

        let vanilla = BlackScholes::new(market).price_call(100.0, 1.0).unwrap();
        let expected =
            counterparty.lgd() * counterparty.default_probability(0.08, 1.0) * vanilla;
        assert_relative_eq!(result.uncorrelated_cva, expected, epsilon = 1e-12);
    }
}

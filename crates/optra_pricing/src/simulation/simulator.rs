//! Unified correlated GBM path simulator.

use optra_models::correlation::CorrelationMatrix;
use optra_models::market::MarketParams;

use crate::ensemble::StoredPaths;
use crate::rng::SimRng;

use super::config::SimulationConfig;
use super::error::SimulationError;

/// Simulates correlated geometric Brownian motion paths.
///
/// A simulator holds one [`MarketParams`] per factor plus a
/// correlation matrix over the factors' driving Brownian motions.
/// Factor count is data, not code: the same stepping loop handles a
/// single underlying, an asset-counterparty pair, and larger baskets.
///
/// Stepping uses the exact lognormal solution
///
/// ```text
/// S(t + dt) = S(t) * exp((r - sigma^2 / 2) * dt + sigma * sqrt(dt) * w)
/// ```
///
/// where `w` is the Cholesky-correlated standard normal shock for the
/// factor, so the simulated distribution is exact at every step point
/// for any step count.
#[derive(Debug, Clone)]
pub struct PathSimulator {
    factors: Vec<MarketParams<f64>>,
    correlation: CorrelationMatrix<f64>,
}

impl PathSimulator {
    /// Creates a single-factor simulator.
    pub fn single(market: MarketParams<f64>) -> Self {
        Self {
            factors: vec![market],
            correlation: CorrelationMatrix::identity(1),
        }
    }

    /// Creates a two-factor simulator with correlation `rho` between
    /// the factors' Brownian drivers.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Correlation`] if `rho` is not a
    /// valid correlation coefficient.
    pub fn two_factor(
        first: MarketParams<f64>,
        second: MarketParams<f64>,
        rho: f64,
    ) -> Result<Self, SimulationError> {
        let correlation = CorrelationMatrix::from_rho(rho)?;
        Ok(Self {
            factors: vec![first, second],
            correlation,
        })
    }

    /// Creates a simulator over an arbitrary factor set.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::NoFactors`] for an empty factor
    /// list, or [`SimulationError::FactorCountMismatch`] if the
    /// correlation matrix dimension differs from the factor count.
    pub fn correlated(
        factors: Vec<MarketParams<f64>>,
        correlation: CorrelationMatrix<f64>,
    ) -> Result<Self, SimulationError> {
        if factors.is_empty() {
            return Err(SimulationError::NoFactors);
        }
        if correlation.dim() != factors.len() {
            return Err(SimulationError::FactorCountMismatch {
                factors: factors.len(),
                dim: correlation.dim(),
            });
        }
        Ok(Self {
            factors,
            correlation,
        })
    }

    /// Number of simulated factors.
    #[inline]
    pub fn num_factors(&self) -> usize {
        self.factors.len()
    }

    /// Market parameters of each factor, in simulation order.
    #[inline]
    pub fn factors(&self) -> &[MarketParams<f64>] {
        &self.factors
    }

    /// Runs the simulation over `horizon` years.
    ///
    /// Returns one [`StoredPaths`] ensemble per factor, in factor
    /// order. Every path starts at the factor's spot; step `k` sits at
    /// time `k * horizon / n_steps`.
    ///
    /// All normal draws come from one sequential stream seeded by the
    /// config, with the factor index varying fastest. The output is
    /// therefore a pure function of the simulator and the config.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidHorizon`] for a non-finite or
    /// non-positive horizon, or [`SimulationError::Correlation`] if
    /// the correlation matrix has no Cholesky factorisation.
    pub fn simulate(
        &self,
        horizon: f64,
        config: &SimulationConfig,
    ) -> Result<Vec<StoredPaths>, SimulationError> {
        if !horizon.is_finite() || horizon <= 0.0 {
            return Err(SimulationError::InvalidHorizon { horizon });
        }
        let factor_count = self.factors.len();
        let cholesky = self.correlation.cholesky()?;

        let n_paths = config.n_paths();
        let n_steps = config.n_steps();
        let stride = n_steps + 1;
        let dt = horizon / n_steps as f64;
        let sqrt_dt = dt.sqrt();

        let drift_dt: Vec<f64> = self
            .factors
            .iter()
            .map(|m| (m.rate() - 0.5 * m.volatility() * m.volatility()) * dt)
            .collect();
        let vol_sqrt_dt: Vec<f64> = self
            .factors
            .iter()
            .map(|m| m.volatility() * sqrt_dt)
            .collect();

        let mut rng = SimRng::from_seed(config.seed());
        let mut normals = vec![0.0_f64; n_paths * n_steps * factor_count];
        rng.fill_normal(&mut normals);

        let mut data: Vec<Vec<f64>> = (0..factor_count)
            .map(|_| vec![0.0_f64; n_paths * stride])
            .collect();
        let mut shocks = vec![0.0_f64; factor_count];
        let mut correlated = vec![0.0_f64; factor_count];

        for path in 0..n_paths {
            for (factor, market) in self.factors.iter().enumerate() {
                data[factor][path * stride] = market.spot();
            }
            for step in 0..n_steps {
                let offset = (path * n_steps + step) * factor_count;
                shocks.copy_from_slice(&normals[offset..offset + factor_count]);
                cholesky.transform_into(&shocks, &mut correlated);
                for factor in 0..factor_count {
                    let idx = path * stride + step;
                    let current = data[factor][idx];
                    data[factor][idx + 1] = current
                        * (drift_dt[factor] + vol_sqrt_dt[factor] * correlated[factor]).exp();
                }
            }
        }

        Ok(data
            .into_iter()
            .map(|flat| StoredPaths::from_parts(flat, n_paths, n_steps))
            .collect())
    }
}

/// Simulates a single GBM factor and returns its ensemble directly.
///
/// Convenience wrapper over [`PathSimulator::single`] for the common
/// one-underlying case.
///
/// # Errors
///
/// Same as [`PathSimulator::simulate`].
pub fn simulate_gbm(
    market: &MarketParams<f64>,
    horizon: f64,
    config: &SimulationConfig,
) -> Result<StoredPaths, SimulationError> {
    let mut ensembles = PathSimulator::single(*market).simulate(horizon, config)?;
    Ok(ensembles.swap_remove(0))
}

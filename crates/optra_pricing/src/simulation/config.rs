//! Validated Monte Carlo simulation configuration.

use super::error::SimulationError;

/// Maximum number of paths a single simulation may request.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps a single simulation may request.
pub const MAX_STEPS: usize = 10_000;

/// Configuration for a Monte Carlo simulation run.
///
/// Fields are private and validated at construction, so a config in
/// hand is always usable. The seed is mandatory: reproducibility is
/// part of the contract, not an opt-in.
///
/// # Examples
///
/// ```rust
/// use optra_pricing::simulation::SimulationConfig;
///
/// let config = SimulationConfig::new(100_000, 252, 42).unwrap();
/// assert_eq!(config.n_paths(), 100_000);
/// assert_eq!(config.n_steps(), 252);
/// assert_eq!(config.seed(), 42);
///
/// assert!(SimulationConfig::new(0, 252, 42).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    n_paths: usize,
    n_steps: usize,
    seed: u64,
}

impl SimulationConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidPathCount`] unless
    /// `1 <= n_paths <= MAX_PATHS`, and
    /// [`SimulationError::InvalidStepCount`] unless
    /// `1 <= n_steps <= MAX_STEPS`.
    pub fn new(n_paths: usize, n_steps: usize, seed: u64) -> Result<Self, SimulationError> {
        if n_paths == 0 || n_paths > MAX_PATHS {
            return Err(SimulationError::InvalidPathCount(n_paths));
        }
        if n_steps == 0 || n_steps > MAX_STEPS {
            return Err(SimulationError::InvalidStepCount(n_steps));
        }
        Ok(Self {
            n_paths,
            n_steps,
            seed,
        })
    }

    /// Number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Seed for the random number stream.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

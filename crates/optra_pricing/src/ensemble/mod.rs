//! Path ensemble storage and the read contract over it.
//!
//! Pricers consume simulated paths through the [`PathEnsemble`]
//! trait, which exposes exactly what payoff evaluation needs: the
//! terminal value and the running maximum of each path. Two
//! representations implement it:
//!
//! - [`StoredPaths`] keeps every trajectory in one dense row-major
//!   buffer. Use it when step-level access matters or memory is not a
//!   concern.
//! - [`PathSummaries`] keeps only the terminal and maximum per path.
//!   Use it to release the dense buffer once per-step data is no
//!   longer needed, for example in large counterparty simulations.
//!
//! A pricer written against the trait produces the same estimate from
//! either representation.

mod stored;
mod summary;

pub use stored::StoredPaths;
pub use summary::PathSummaries;

/// Read access to a simulated path ensemble.
///
/// Implementations answer per-path questions without exposing how the
/// underlying data is held. Paths are indexed `0..num_paths()`; every
/// path covers `num_steps()` steps plus the initial point.
pub trait PathEnsemble {
    /// Number of paths in the ensemble.
    fn num_paths(&self) -> usize;

    /// Number of time steps per path, excluding the initial point.
    fn num_steps(&self) -> usize;

    /// Value of `path` at the final step.
    ///
    /// # Panics
    ///
    /// Panics if `path >= num_paths()`.
    fn terminal(&self, path: usize) -> f64;

    /// Running maximum of `path` over all monitoring points, including
    /// the initial value.
    ///
    /// # Panics
    ///
    /// Panics if `path >= num_paths()`.
    fn maximum(&self, path: usize) -> f64;
}

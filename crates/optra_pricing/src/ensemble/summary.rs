//! Compact per-path summaries.

use super::PathEnsemble;

/// A path ensemble reduced to per-path terminal and maximum values.
///
/// Holds two floats per path regardless of step count. Barrier and
/// vanilla payoffs need nothing else, so reducing a [`StoredPaths`]
/// to summaries lets the dense trajectory buffer be dropped early.
///
/// [`StoredPaths`]: super::StoredPaths
#[derive(Debug, Clone, PartialEq)]
pub struct PathSummaries {
    terminals: Vec<f64>,
    maxima: Vec<f64>,
    n_steps: usize,
}

impl PathSummaries {
    /// Reduces any ensemble to its per-path summaries.
    ///
    /// The reduction preserves `terminal` and `maximum` exactly, so a
    /// pricer sees no difference between the source ensemble and its
    /// summary.
    pub fn from_ensemble<E: PathEnsemble>(paths: &E) -> Self {
        let n = paths.num_paths();
        let mut terminals = Vec::with_capacity(n);
        let mut maxima = Vec::with_capacity(n);
        for path in 0..n {
            terminals.push(paths.terminal(path));
            maxima.push(paths.maximum(path));
        }
        Self {
            terminals,
            maxima,
            n_steps: paths.num_steps(),
        }
    }
}

impl PathEnsemble for PathSummaries {
    #[inline]
    fn num_paths(&self) -> usize {
        self.terminals.len()
    }

    #[inline]
    fn num_steps(&self) -> usize {
        self.n_steps
    }

    #[inline]
    fn terminal(&self, path: usize) -> f64 {
        self.terminals[path]
    }

    #[inline]
    fn maximum(&self, path: usize) -> f64 {
        self.maxima[path]
    }
}

//! Dense row-major path storage.

use crate::simulation::SimulationError;

use super::PathEnsemble;

/// A path ensemble holding every trajectory in full.
///
/// Data is stored row-major: path `p` occupies the contiguous slice
/// `[p * (n_steps + 1), (p + 1) * (n_steps + 1))`, with step 0 holding
/// the initial value. Memory is `n_paths * (n_steps + 1)` floats, so
/// a million paths at daily resolution is roughly 2 GB; switch to
/// [`PathSummaries`] when trajectories are no longer needed.
///
/// [`PathSummaries`]: super::PathSummaries
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPaths {
    data: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
}

impl StoredPaths {
    /// Builds an ensemble from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::ShapeMismatch`] if `data.len()` is
    /// not `n_paths * (n_steps + 1)`.
    pub fn from_flat(
        data: Vec<f64>,
        n_paths: usize,
        n_steps: usize,
    ) -> Result<Self, SimulationError> {
        let expected = n_paths * (n_steps + 1);
        if data.len() != expected {
            return Err(SimulationError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            n_paths,
            n_steps,
        })
    }

    pub(crate) fn from_parts(data: Vec<f64>, n_paths: usize, n_steps: usize) -> Self {
        debug_assert_eq!(data.len(), n_paths * (n_steps + 1));
        Self {
            data,
            n_paths,
            n_steps,
        }
    }

    /// Value of `path` at `step`, where step 0 is the initial value.
    ///
    /// # Panics
    ///
    /// Panics if `path >= num_paths()` or `step > num_steps()`.
    #[inline]
    pub fn value(&self, path: usize, step: usize) -> f64 {
        assert!(path < self.n_paths, "path index out of bounds");
        assert!(step <= self.n_steps, "step index out of bounds");
        self.data[path * (self.n_steps + 1) + step]
    }

    /// Full trajectory of `path`, initial value first.
    ///
    /// # Panics
    ///
    /// Panics if `path >= num_paths()`.
    #[inline]
    pub fn trajectory(&self, path: usize) -> &[f64] {
        assert!(path < self.n_paths, "path index out of bounds");
        let stride = self.n_steps + 1;
        &self.data[path * stride..(path + 1) * stride]
    }
}

impl PathEnsemble for StoredPaths {
    #[inline]
    fn num_paths(&self) -> usize {
        self.n_paths
    }

    #[inline]
    fn num_steps(&self) -> usize {
        self.n_steps
    }

    #[inline]
    fn terminal(&self, path: usize) -> f64 {
        self.value(path, self.n_steps)
    }

    fn maximum(&self, path: usize) -> f64 {
        self.trajectory(path)
            .iter()
            .fold(f64::NEG_INFINITY, |acc, &s| acc.max(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_path_ensemble() -> StoredPaths {
        // Path 0: rises through 160 then falls back.
        // Path 1: starts at its own maximum.
        StoredPaths::from_flat(vec![100.0, 160.0, 140.0, 100.0, 90.0, 80.0], 2, 2).unwrap()
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let result = StoredPaths::from_flat(vec![1.0, 2.0, 3.0], 2, 2);
        assert_eq!(
            result.unwrap_err(),
            SimulationError::ShapeMismatch {
                expected: 6,
                got: 3
            }
        );
    }

    #[test]
    fn test_value_indexes_row_major() {
        let paths = two_path_ensemble();
        assert_eq!(paths.value(0, 0), 100.0);
        assert_eq!(paths.value(0, 1), 160.0);
        assert_eq!(paths.value(0, 2), 140.0);
        assert_eq!(paths.value(1, 0), 100.0);
        assert_eq!(paths.value(1, 2), 80.0);
    }

    #[test]
    fn test_trajectory_is_contiguous_slice() {
        let paths = two_path_ensemble();
        assert_eq!(paths.trajectory(0), &[100.0, 160.0, 140.0]);
        assert_eq!(paths.trajectory(1), &[100.0, 90.0, 80.0]);
    }

    #[test]
    fn test_terminal_reads_final_step() {
        let paths = two_path_ensemble();
        assert_eq!(paths.terminal(0), 140.0);
        assert_eq!(paths.terminal(1), 80.0);
    }

    #[test]
    fn test_maximum_includes_initial_value() {
        let paths = two_path_ensemble();
        assert_eq!(paths.maximum(0), 160.0);
        // A monotone falling path peaks at its start.
        assert_eq!(paths.maximum(1), 100.0);
    }

    #[test]
    fn test_dimensions_reported() {
        let paths = two_path_ensemble();
        assert_eq!(paths.num_paths(), 2);
        assert_eq!(paths.num_steps(), 2);
    }

    #[test]
    #[should_panic(expected = "path index out of bounds")]
    fn test_path_out_of_bounds_panics() {
        let paths = two_path_ensemble();
        paths.value(2, 0);
    }

    #[test]
    #[should_panic(expected = "step index out of bounds")]
    fn test_step_out_of_bounds_panics() {
        let paths = two_path_ensemble();
        paths.value(0, 3);
    }

    // ===== Property-based tests =====

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use crate::ensemble::PathSummaries;
        use proptest::prelude::*;

        fn grid_strategy() -> impl Strategy<Value = (Vec<f64>, usize, usize)> {
            (1usize..8, 1usize..12).prop_flat_map(|(n_paths, n_steps)| {
                let len = n_paths * (n_steps + 1);
                (
                    prop::collection::vec(0.01..1.0e4f64, len..=len),
                    Just(n_paths),
                    Just(n_steps),
                )
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_maximum_dominates_every_observation(
                (data, n_paths, n_steps) in grid_strategy()
            ) {
                let paths = StoredPaths::from_flat(data, n_paths, n_steps).unwrap();
                for p in 0..n_paths {
                    let max = paths.maximum(p);
                    prop_assert!(max >= paths.terminal(p));
                    for &value in paths.trajectory(p) {
                        prop_assert!(max >= value);
                    }
                }
            }

            #[test]
            fn test_summaries_agree_with_storage(
                (data, n_paths, n_steps) in grid_strategy()
            ) {
                let paths = StoredPaths::from_flat(data, n_paths, n_steps).unwrap();
                let summaries = PathSummaries::from_ensemble(&paths);
                for p in 0..n_paths {
                    prop_assert_eq!(summaries.terminal(p), paths.terminal(p));
                    prop_assert_eq!(summaries.maximum(p), paths.maximum(p));
                }
            }
        }
    }
}

//! Sample statistics for simulation estimators.
//!
//! Monte Carlo pricers and the CVA engine aggregate per-path values into an
//! estimate and an uncertainty. The helpers here centralise that
//! aggregation: the mean, the unbiased sample variance, and the standard
//! error of the mean.
//!
//! All functions use generic type parameter `T: num_traits::Float` for
//! f32/f64 support.

use num_traits::Float;

/// Arithmetic mean of a sample.
///
/// # Mathematical Definition
/// ```text
/// mean(x) = (1/n) * Σ xᵢ
/// ```
///
/// # Panics
/// Panics if `values` is empty.
///
/// # Examples
/// ```
/// use optra_core::math::stats::mean;
///
/// let m = mean(&[1.0_f64, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(m, 3.0);
/// ```
#[inline]
pub fn mean<T: Float>(values: &[T]) -> T {
    assert!(!values.is_empty(), "mean requires a non-empty sample");

    let sum = values.iter().fold(T::zero(), |acc, &x| acc + x);
    sum / T::from(values.len()).unwrap()
}

/// Unbiased sample variance.
///
/// # Mathematical Definition
/// ```text
/// var(x) = (1/(n-1)) * Σ (xᵢ - mean(x))²
/// ```
///
/// The n-1 divisor makes the estimator unbiased, which is the convention
/// every standard error in the workspace is built on.
///
/// # Panics
/// Panics if `values` has fewer than two observations.
///
/// # Examples
/// ```
/// use optra_core::math::stats::sample_variance;
///
/// let var = sample_variance(&[1.0_f64, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(var, 2.5);
/// ```
pub fn sample_variance<T: Float>(values: &[T]) -> T {
    assert!(
        values.len() >= 2,
        "sample variance requires at least two observations"
    );

    let m = mean(values);
    let sum_sq = values.iter().fold(T::zero(), |acc, &x| {
        let dev = x - m;
        acc + dev * dev
    });

    sum_sq / T::from(values.len() - 1).unwrap()
}

/// Sample standard deviation, the square root of [`sample_variance`].
///
/// # Panics
/// Panics if `values` has fewer than two observations.
#[inline]
pub fn sample_std<T: Float>(values: &[T]) -> T {
    sample_variance(values).sqrt()
}

/// Standard error of the sample mean.
///
/// # Mathematical Definition
/// ```text
/// se(x) = std(x) / √n
/// ```
///
/// This is the uncertainty attached to every Monte Carlo estimate; it
/// shrinks as O(1/√n) with the number of paths.
///
/// # Panics
/// Panics if `values` has fewer than two observations.
///
/// # Examples
/// ```
/// use optra_core::math::stats::standard_error;
///
/// let se = standard_error(&[1.0_f64, 2.0, 3.0, 4.0, 5.0]);
/// assert!((se - 0.7071067811865476).abs() < 1e-15);
/// ```
#[inline]
pub fn standard_error<T: Float>(values: &[T]) -> T {
    sample_std(values) / T::from(values.len()).unwrap().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ===== Known-value tests =====

    #[test]
    fn test_mean_known_values() {
        assert_eq!(mean(&[1.0_f64, 2.0, 3.0, 4.0, 5.0]), 3.0);
        assert_eq!(mean(&[10.0_f64]), 10.0);
        assert_eq!(mean(&[-2.0_f64, 2.0]), 0.0);
    }

    #[test]
    fn test_sample_variance_known_values() {
        assert_relative_eq!(
            sample_variance(&[1.0_f64, 2.0, 3.0, 4.0, 5.0]),
            2.5,
            epsilon = 1e-15
        );
        // Two observations: squared half-distance times two over one
        assert_relative_eq!(sample_variance(&[1.0_f64, 3.0]), 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_sample_std_known_values() {
        assert_relative_eq!(
            sample_std(&[1.0_f64, 2.0, 3.0, 4.0, 5.0]),
            2.5_f64.sqrt(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_standard_error_known_values() {
        // se = sqrt(2.5) / sqrt(5) = sqrt(0.5)
        assert_relative_eq!(
            standard_error(&[1.0_f64, 2.0, 3.0, 4.0, 5.0]),
            0.5_f64.sqrt(),
            epsilon = 1e-15
        );
    }

    // ===== Edge cases =====

    #[test]
    fn test_constant_sample_has_zero_variance() {
        let values = [4.0_f64; 8];
        assert_eq!(sample_variance(&values), 0.0);
        assert_eq!(standard_error(&values), 0.0);
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn test_mean_empty_panics() {
        let empty: [f64; 0] = [];
        mean(&empty);
    }

    #[test]
    #[should_panic(expected = "at least two")]
    fn test_variance_single_observation_panics() {
        sample_variance(&[1.0_f64]);
    }

    // ===== Generic type tests =====

    #[test]
    fn test_stats_with_f32() {
        let values = [1.0_f32, 2.0, 3.0];
        assert_eq!(mean(&values), 2.0_f32);
        assert_relative_eq!(sample_variance(&values), 1.0_f32, epsilon = 1e-6);
    }

    // ===== Property-based tests =====

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn sample_strategy() -> impl Strategy<Value = Vec<f64>> {
            prop::collection::vec(-1.0e6..1.0e6f64, 2..200)
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_mean_within_sample_bounds(values in sample_strategy()) {
                let m = mean(&values);
                let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
                let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

                prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9);
            }

            #[test]
            fn test_variance_non_negative(values in sample_strategy()) {
                prop_assert!(sample_variance(&values) >= 0.0);
            }

            #[test]
            fn test_standard_error_below_std(values in sample_strategy()) {
                // √n ≥ √2 > 1, so the standard error never exceeds the
                // standard deviation
                prop_assert!(standard_error(&values) <= sample_std(&values) + 1e-12);
            }

            #[test]
            fn test_mean_shift_invariance(values in sample_strategy(), shift in -1.0e3..1.0e3f64) {
                let shifted: Vec<f64> = values.iter().map(|x| x + shift).collect();
                let got = mean(&shifted);
                let expected = mean(&values) + shift;

                prop_assert!((got - expected).abs() < 1e-6);
            }
        }
    }
}

//! Standard normal distribution functions.
//!
//! The cumulative distribution function drives every closed form in this
//! crate, so it has to be cheap, monotone, and well behaved far into the
//! tails. The implementation uses the Abramowitz & Stegun 7.1.26
//! polynomial approximation of the complementary error function, accurate
//! to 1.5e-7 absolute over the whole real line and exactly symmetric by
//! construction (erfc(-x) = 2 - erfc(x)), which makes put-call parity hold
//! to machine precision rather than to approximation accuracy.

use num_traits::Float;

/// Complementary error function via the A&S 7.1.26 polynomial.
///
/// Five-term polynomial in t = 1/(1 + p|x|), evaluated in Horner form and
/// damped by exp(-x²). The negative half-line uses the reflection
/// erfc(-x) = 2 - erfc(x).
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let negative = x < T::zero();
    let x_abs = x.abs();

    let t = T::one() / (T::one() + p * x_abs);
    let poly = ((((a5 * t + a4) * t + a3) * t + a2) * t + a1) * t;
    let result = poly * (-x_abs * x_abs).exp();

    if negative {
        T::from(2.0).unwrap() - result
    } else {
        result
    }
}

/// Standard normal cumulative distribution function Φ(x).
///
/// Strictly inside (0, 1), monotone non-decreasing, Φ(0) = 0.5, and
/// symmetric: Φ(-x) = 1 - Φ(x). Stable for |x| well beyond 10, where it
/// saturates cleanly at 0 and 1 instead of producing NaN.
///
/// # Examples
/// ```
/// use optra_models::analytical::distributions::norm_cdf;
///
/// let phi = norm_cdf(0.0_f64);
/// assert!((phi - 0.5).abs() < 1e-9);
///
/// // Symmetry
/// let x = 1.3_f64;
/// assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();

    // Φ(x) = erfc(-x/√2) / 2
    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function φ(x).
///
/// # Examples
/// ```
/// use optra_models::analytical::distributions::norm_pdf;
///
/// // φ(0) = 1/√(2π)
/// let peak = norm_pdf(0.0_f64);
/// assert!((peak - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    let frac_1_sqrt_2pi = T::from(0.398_942_280_401_432_7).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}

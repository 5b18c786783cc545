//! Monte Carlo estimate with sampling uncertainty.

/// A Monte Carlo price together with its standard error.
///
/// The standard error is the sample standard deviation of the
/// discounted payoffs divided by the square root of the path count.
/// It shrinks as `1 / sqrt(n_paths)`, so quartering the error costs
/// sixteen times the paths.
///
/// # Examples
///
/// ```rust
/// use optra_pricing::mc::McEstimate;
///
/// let estimate = McEstimate::new(9.92, 0.05);
/// let half_width = estimate.confidence_95();
/// assert!((half_width - 0.098).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McEstimate {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
}

impl McEstimate {
    /// Creates an estimate from a price and its standard error.
    pub fn new(price: f64, std_error: f64) -> Self {
        Self { price, std_error }
    }

    /// Half-width of the 95% confidence interval.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Half-width of the 99% confidence interval.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

//! Correlation matrices and Cholesky factorisation.
//!
//! The multi-factor simulator draws independent standard normals and
//! correlates them through the lower-triangular Cholesky factor L of the
//! correlation matrix C = L·Lᵀ. This module owns the validated matrix
//! type, the factorisation, and the shock transform w = L·z.

use std::fmt;

use num_traits::Float;

/// Errors from correlation matrix construction and factorisation.
#[derive(Debug, Clone, PartialEq)]
pub enum CorrelationError {
    /// Data length does not match the declared square dimension.
    InvalidDimensions {
        /// Expected number of entries (dim * dim)
        expected: usize,
        /// Number of entries provided
        got: usize,
    },

    /// A diagonal entry is not 1.
    InvalidDiagonal {
        /// Row (and column) index of the offending entry
        index: usize,
        /// The offending value
        value: f64,
    },

    /// The matrix is not symmetric.
    NotSymmetric {
        /// Row index of the offending pair
        i: usize,
        /// Column index of the offending pair
        j: usize,
    },

    /// An off-diagonal entry is outside [-1, 1] or non-finite.
    OutOfRange {
        /// Row index of the offending entry
        i: usize,
        /// Column index of the offending entry
        j: usize,
        /// The offending value
        value: f64,
    },

    /// The matrix admits no real Cholesky factor.
    NotPositiveDefinite,
}

impl fmt::Display for CorrelationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrelationError::InvalidDimensions { expected, got } => {
                write!(f, "Invalid dimensions: expected {} entries, got {}", expected, got)
            }
            CorrelationError::InvalidDiagonal { index, value } => {
                write!(f, "Invalid diagonal at index {}: {} (must be 1)", index, value)
            }
            CorrelationError::NotSymmetric { i, j } => {
                write!(f, "Matrix not symmetric at ({}, {})", i, j)
            }
            CorrelationError::OutOfRange { i, j, value } => {
                write!(f, "Correlation out of range at ({}, {}): {}", i, j, value)
            }
            CorrelationError::NotPositiveDefinite => {
                write!(f, "Matrix is not positive definite")
            }
        }
    }
}

impl std::error::Error for CorrelationError {}

/// A validated correlation matrix, stored row-major.
///
/// Construction enforces unit diagonal, symmetry, and entries in [-1, 1].
/// Positive definiteness is established by [`CorrelationMatrix::cholesky`],
/// which is also where degenerate (perfectly correlated) matrices fail.
///
/// # Examples
/// ```
/// use optra_models::correlation::CorrelationMatrix;
///
/// let matrix = CorrelationMatrix::from_rho(0.5_f64).unwrap();
/// let factor = matrix.cholesky().unwrap();
///
/// let shocks = factor.transform(&[1.0, 1.0]);
/// assert!((shocks[0] - 1.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix<T: Float> {
    data: Vec<T>,
    dim: usize,
}

impl<T: Float> CorrelationMatrix<T> {
    /// Creates a validated correlation matrix from row-major entries.
    ///
    /// # Errors
    /// - `CorrelationError::InvalidDimensions` if `data.len() != dim * dim`
    /// - `CorrelationError::InvalidDiagonal` if any diagonal entry differs
    ///   from 1 by more than 1e-10
    /// - `CorrelationError::NotSymmetric` if entries differ across the
    ///   diagonal by more than 1e-10
    /// - `CorrelationError::OutOfRange` if any entry is outside [-1, 1]
    ///   or non-finite
    pub fn new(data: &[T], dim: usize) -> Result<Self, CorrelationError> {
        if data.len() != dim * dim {
            return Err(CorrelationError::InvalidDimensions {
                expected: dim * dim,
                got: data.len(),
            });
        }

        let one = T::one();
        let tolerance = T::from(1e-10).unwrap();

        for i in 0..dim {
            let diag = data[i * dim + i];
            if !diag.is_finite() || (diag - one).abs() > tolerance {
                return Err(CorrelationError::InvalidDiagonal {
                    index: i,
                    value: diag.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        for i in 0..dim {
            for j in (i + 1)..dim {
                let upper = data[i * dim + j];
                let lower = data[j * dim + i];

                if !upper.is_finite() || upper.abs() > one {
                    return Err(CorrelationError::OutOfRange {
                        i,
                        j,
                        value: upper.to_f64().unwrap_or(f64::NAN),
                    });
                }

                if (upper - lower).abs() > tolerance {
                    return Err(CorrelationError::NotSymmetric { i, j });
                }
            }
        }

        Ok(Self {
            data: data.to_vec(),
            dim,
        })
    }

    /// The identity correlation: independent factors.
    pub fn identity(dim: usize) -> Self {
        let mut data = vec![T::zero(); dim * dim];
        for i in 0..dim {
            data[i * dim + i] = T::one();
        }
        Self { data, dim }
    }

    /// A 2x2 matrix with off-diagonal correlation ρ.
    ///
    /// # Errors
    /// - `CorrelationError::OutOfRange` if |ρ| > 1 or ρ is non-finite.
    ///   ρ = ±1 constructs but fails at factorisation.
    pub fn from_rho(rho: T) -> Result<Self, CorrelationError> {
        let one = T::one();
        Self::new(&[one, rho, rho, one], 2)
    }

    /// Returns the dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the entry at (i, j).
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.dim && j < self.dim, "correlation index out of bounds");
        self.data[i * self.dim + j]
    }

    /// Computes the lower-triangular Cholesky factor L with C = L·Lᵀ.
    ///
    /// # Errors
    /// - `CorrelationError::NotPositiveDefinite` if a pivot is not
    ///   strictly positive, which includes perfectly correlated (ρ = ±1)
    ///   matrices.
    pub fn cholesky(&self) -> Result<CholeskyFactor<T>, CorrelationError> {
        let n = self.dim;
        let zero = T::zero();
        let mut lower = vec![zero; n * n];

        for i in 0..n {
            for j in 0..=i {
                let mut sum = zero;
                for k in 0..j {
                    sum = sum + lower[i * n + k] * lower[j * n + k];
                }

                if i == j {
                    let pivot = self.data[i * n + i] - sum;
                    if !(pivot > zero) {
                        return Err(CorrelationError::NotPositiveDefinite);
                    }
                    lower[i * n + j] = pivot.sqrt();
                } else {
                    lower[i * n + j] = (self.data[i * n + j] - sum) / lower[j * n + j];
                }
            }
        }

        Ok(CholeskyFactor {
            data: lower,
            dim: n,
        })
    }
}

/// Lower-triangular Cholesky factor of a correlation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct CholeskyFactor<T: Float> {
    data: Vec<T>,
    dim: usize,
}

impl<T: Float> CholeskyFactor<T> {
    /// Returns the dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the entry at (i, j); zero above the diagonal.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.dim && j < self.dim, "factor index out of bounds");
        if j > i {
            T::zero()
        } else {
            self.data[i * self.dim + j]
        }
    }

    /// Correlates a vector of independent shocks: w = L·z.
    ///
    /// # Panics
    /// Panics if `shocks.len()` differs from the factor dimension.
    pub fn transform(&self, shocks: &[T]) -> Vec<T> {
        let mut correlated = vec![T::zero(); self.dim];
        self.transform_into(shocks, &mut correlated);
        correlated
    }

    /// Correlates shocks into a caller-provided buffer, allocation-free.
    ///
    /// # Panics
    /// Panics if either slice length differs from the factor dimension.
    pub fn transform_into(&self, shocks: &[T], correlated: &mut [T]) {
        assert_eq!(shocks.len(), self.dim, "shock vector length mismatch");
        assert_eq!(correlated.len(), self.dim, "output vector length mismatch");

        for i in 0..self.dim {
            let mut sum = T::zero();
            for j in 0..=i {
                sum = sum + self.data[i * self.dim + j] * shocks[j];
            }
            correlated[i] = sum;
        }
    }
}

//! Core traits for generic numeric computation.
//!
//! The analytical layer is generic over the floating-point type so the same
//! closed forms serve f32 and f64 callers. The numerical engines in the
//! upper layers instantiate everything at f64.

/// Generic floating-point trait for numeric computations.
///
/// This trait provides a unified interface over the standard floating-point
/// types (f64, f32).
///
/// # Type Safety
/// All implementing types must support:
/// - Arithmetic operations (+, -, *, /)
/// - Comparisons (PartialOrd)
/// - Mathematical functions (exp, ln, sqrt, etc.)
/// - Copy and Clone semantics
///
/// # Examples
/// ```
/// use optra_core::traits::Float;
///
/// fn forward_price<T: Float>(spot: T, rate: T, expiry: T) -> T {
///     spot * (rate * expiry).exp()
/// }
///
/// let forward: f64 = forward_price(100.0, 0.05, 1.0);
/// assert!((forward - 105.127109).abs() < 1e-5);
/// ```
pub use num_traits::Float;

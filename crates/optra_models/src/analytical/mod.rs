//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes-Merton model for vanilla calls and puts
//! - Reflection-principle formulas for up-barrier calls
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Standard normal distribution utilities
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Fail fast**: Contract terms are validated before any formula runs
//! - **Numerical Stability**: Uses an erfc-based CDF, stable deep into
//!   the tails

pub mod barrier;
pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use barrier::{up_and_in_call, up_and_out_call, BarrierValue};
pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;

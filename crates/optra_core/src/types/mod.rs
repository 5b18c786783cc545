//! Shared error types.
//!
//! This module provides:
//! - `error`: Structured error types for pricing operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`PricingError`] from `error`

pub mod error;

// Re-export commonly used types at module level
pub use error::PricingError;

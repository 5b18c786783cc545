//! # optra_core: Numerical Foundation for the Optra Pricing Workspace
//!
//! ## Layer 1 (Foundation) Role
//!
//! optra_core is the bottom layer of the 4-layer architecture, providing:
//! - Sample statistics for simulation estimators (`math::stats`)
//! - Traits for generic numerical computation (`traits`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other optra_* crates, with a single
//! external dependency:
//! - num-traits: Traits for generic numerical computation
//!
//! Every estimator in the upper layers reports uncertainty through the
//! statistics in this crate, and every failure mode in the workspace
//! collapses to one of the two [`types::PricingError`] categories.
//!
//! ## Usage Examples
//!
//! ```rust
//! use optra_core::math::stats::{mean, standard_error};
//! use optra_core::types::PricingError;
//!
//! let samples = [9.8_f64, 10.1, 9.9, 10.2];
//! let estimate = mean(&samples);
//! let uncertainty = standard_error(&samples);
//! assert!((estimate - 10.0).abs() < 0.1);
//! assert!(uncertainty > 0.0);
//!
//! let err = PricingError::InvalidParameter("volatility must be positive".to_string());
//! assert_eq!(format!("{}", err), "Invalid parameter: volatility must be positive");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;

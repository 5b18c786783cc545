//! # Optra Models (L2: Model Layer)
//!
//! Market parameters, option contracts, and closed-form pricing.
//!
//! This crate provides:
//! - Validated lognormal market parameters (`market`)
//! - Instrument definitions: vanilla and barrier option contracts (`instruments`)
//! - Analytical formulas: Black-Scholes-Merton vanilla prices, Greeks, and
//!   reflection-principle barrier prices (`analytical`)
//! - Correlation matrices and Cholesky factorisation for multi-factor
//!   simulation (`correlation`)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`** so the closed forms serve f32 and f64
//! - **Validate at construction**: a `MarketParams` or `OptionContract` that
//!   exists is already in the model's domain
//! - **Fail fast, never clamp**: degenerate inputs are errors, not limits
//!   to approach through an epsilon

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod correlation;
pub mod instruments;
pub mod market;

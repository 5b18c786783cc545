//! Option contract definitions.
//!
//! This module provides:
//! - `payoff`: Call/put payoff kinds
//! - `contract`: Validated vanilla and barrier option contracts
//! - `error`: Structured instrument validation errors
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionKind`] from `payoff`
//! - [`Barrier`], [`BarrierStyle`], [`OptionContract`] from `contract`
//! - [`InstrumentError`] from `error`

pub mod contract;
pub mod error;
pub mod payoff;

// Re-export commonly used types at module level
pub use contract::{Barrier, BarrierStyle, OptionContract};
pub use error::InstrumentError;
pub use payoff::OptionKind;

//! Monte Carlo pricing over path ensembles.
//!
//! Pricers here are pure consumers: they take any [`PathEnsemble`]
//! plus a contract and a discount rate, and return an [`McEstimate`]
//! carrying both the price and its standard error. Simulation noise is
//! never an error condition; it is quantified and reported.
//!
//! [`PathEnsemble`]: crate::ensemble::PathEnsemble

mod error;
mod estimate;
mod pricer;

pub use error::McError;
pub use estimate::McEstimate;
pub use pricer::{price_up_and_out_call, price_vanilla};

//! Correlated geometric Brownian motion path simulation.
//!
//! One simulator covers every factor count. A single underlying is a
//! one-factor run with an identity correlation matrix; a counterparty
//! model is a two-factor run with a single correlation coefficient;
//! anything larger takes a full [`CorrelationMatrix`] from the model
//! layer. The stepping scheme is the exact lognormal solution of the
//! GBM SDE, so path distributions carry no time-discretisation bias at
//! the step points.
//!
//! [`CorrelationMatrix`]: optra_models::correlation::CorrelationMatrix

mod config;
mod error;
mod simulator;

pub use config::{SimulationConfig, MAX_PATHS, MAX_STEPS};
pub use error::SimulationError;
pub use simulator::{simulate_gbm, PathSimulator};

//! Credit Valuation Adjustment calculation.
//!
//! CVA is the expected loss from counterparty default:
//!
//! ```text
//! CVA = E[ LGD x discounted payoff x 1{default} ]
//! ```
//!
//! where LGD is the loss given default (one minus the recovery rate)
//! and the default indicator comes from a Merton structural model: the
//! counterparty defaults when its simulated firm value at maturity
//! falls below its debt threshold.
//!
//! The module splits into:
//!
//! - [`CounterpartyParams`]: validated firm-value, debt, and recovery
//!   inputs, plus the analytical Merton default probability.
//! - [`CvaEngine`]: the correlated two-factor Monte Carlo run.
//! - [`CvaResult`]: point estimates with the standard error and the
//!   independence-based analytical contrast.

mod engine;
mod error;
mod params;
mod result;

pub use engine::CvaEngine;
pub use error::CvaError;
pub use params::CounterpartyParams;
pub use result::CvaResult;

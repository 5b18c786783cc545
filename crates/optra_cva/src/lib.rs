//! # Optra CVA (L4: Credit Adjustment Layer)
//!
//! Credit Valuation Adjustment for barrier options under a Merton
//! structural default model.
//!
//! The engine couples two correlated geometric Brownian motions: the
//! option's underlying asset and the counterparty's firm value. A
//! path defaults when the terminal firm value sits below the debt
//! threshold; the loss on that path is the unrecovered fraction of the
//! discounted option payoff. CVA is the expected loss over all paths,
//! reported with its standard error and contrasted against an
//! analytical approximation that assumes independence between default
//! and payoff.
//!
//! ## Usage Example
//!
//! ```rust
//! use optra_cva::cva::{CounterpartyParams, CvaEngine};
//! use optra_models::instruments::OptionContract;
//! use optra_models::market::MarketParams;
//! use optra_pricing::simulation::SimulationConfig;
//!
//! let market = MarketParams::new(100.0, 0.08, 0.3).unwrap();
//! let counterparty = CounterpartyParams::new(200.0, 0.25, 175.0, 0.4).unwrap();
//! let engine = CvaEngine::new(market, counterparty, 0.3).unwrap();
//!
//! let contract = OptionContract::up_and_out_call(100.0, 1.0, 150.0).unwrap();
//! let config = SimulationConfig::new(10_000, 50, 42).unwrap();
//! let result = engine.run(&contract, &config).unwrap();
//!
//! assert!(result.cva >= 0.0);
//! assert!(result.cva <= result.default_free_value + 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod cva;

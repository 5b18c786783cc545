//! Binomial lattice pricing.
//!
//! A Cox-Ross-Rubinstein recombining tree for European options. The
//! lattice complements the analytical and Monte Carlo pricers as an
//! independent numerical check: it converges to the Black-Scholes
//! price as the step count grows, without sharing either the CDF
//! approximation or the sampling noise of the other two routes.

mod binomial;

pub use binomial::{BinomialTree, LatticeError};

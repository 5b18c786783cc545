//! Shared numerical routines.
//!
//! This module provides:
//! - `stats`: Sample statistics for Monte Carlo estimators

pub mod stats;

//! Random number generation for Monte Carlo simulation.
//!
//! This module wraps the `rand` ecosystem in a thin, deliberately
//! small interface:
//!
//! - **Reproducibility**: every generator is constructed from an
//!   explicit `u64` seed and remembers it, so a simulation can be
//!   rerun bit-for-bit from its configuration alone.
//! - **Batch fills**: [`SimRng::fill_normal`] writes into a
//!   caller-owned buffer, keeping the hot simulation loop free of
//!   allocation.
//!
//! There is no fallback to entropy-based seeding. A simulation without
//! a recorded seed cannot be reproduced, so the seed is a required
//! input rather than an optional convenience.

mod prng;

pub use prng::SimRng;

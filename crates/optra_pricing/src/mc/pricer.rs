//! Discounted-mean Monte Carlo pricers.

use rayon::prelude::*;

use optra_core::math::stats;
use optra_models::instruments::OptionContract;

use crate::ensemble::PathEnsemble;

use super::error::McError;
use super::estimate::McEstimate;

/// Prices a European vanilla option from terminal values.
///
/// The estimate is the discounted mean of per-path payoffs; the
/// standard error comes with it. Payoff evaluation runs in parallel
/// over paths, but aggregation is sequential in path order, so the
/// result is identical across thread counts.
///
/// # Errors
///
/// Returns [`McError::UnexpectedBarrier`] for a barrier contract and
/// [`McError::TooFewPaths`] for an ensemble with fewer than two paths.
pub fn price_vanilla<E>(
    paths: &E,
    contract: &OptionContract<f64>,
    rate: f64,
) -> Result<McEstimate, McError>
where
    E: PathEnsemble + Sync,
{
    if contract.barrier().is_some() {
        return Err(McError::UnexpectedBarrier);
    }
    let n = paths.num_paths();
    if n < 2 {
        return Err(McError::TooFewPaths(n));
    }

    let payoffs: Vec<f64> = (0..n)
        .into_par_iter()
        .map(|path| contract.vanilla_payoff(paths.terminal(path)))
        .collect();
    Ok(discounted_estimate(&payoffs, rate, contract.expiry()))
}

/// Prices an up-and-out call by knockout over monitored maxima.
///
/// A path pays nothing if its running maximum ever reaches the barrier
/// level; otherwise it pays the vanilla call payoff at expiry.
///
/// The knockout check sees the simulation's monitoring points only. A
/// continuous crossing between steps goes undetected, so the estimate
/// systematically exceeds the continuous-barrier closed form; the bias
/// shrinks as the step count grows.
///
/// # Errors
///
/// Returns [`McError::MissingBarrier`] for a contract without a
/// barrier and [`McError::TooFewPaths`] for an ensemble with fewer
/// than two paths.
pub fn price_up_and_out_call<E>(
    paths: &E,
    contract: &OptionContract<f64>,
    rate: f64,
) -> Result<McEstimate, McError>
where
    E: PathEnsemble + Sync,
{
    let level = contract.barrier().ok_or(McError::MissingBarrier)?.level();
    let n = paths.num_paths();
    if n < 2 {
        return Err(McError::TooFewPaths(n));
    }

    let payoffs: Vec<f64> = (0..n)
        .into_par_iter()
        .map(|path| {
            if paths.maximum(path) >= level {
                0.0
            } else {
                contract.vanilla_payoff(paths.terminal(path))
            }
        })
        .collect();
    Ok(discounted_estimate(&payoffs, rate, contract.expiry()))
}

fn discounted_estimate(payoffs: &[f64], rate: f64, expiry: f64) -> McEstimate {
    let discount = (-rate * expiry).exp();
    McEstimate::new(
        discount * stats::mean(payoffs),
        discount * stats::standard_error(payoffs),
    )
}

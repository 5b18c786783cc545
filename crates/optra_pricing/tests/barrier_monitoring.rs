//! Barrier pricing: the continuous-barrier closed form against
//! discretely monitored Monte Carlo.

use approx::assert_relative_eq;
use optra_models::analytical::{up_and_out_call, BlackScholes};
use optra_models::instruments::OptionContract;
use optra_models::market::MarketParams;
use optra_pricing::ensemble::PathEnsemble;
use optra_pricing::mc::price_up_and_out_call;
use optra_pricing::simulation::{simulate_gbm, SimulationConfig};

fn barrier_market() -> MarketParams<f64> {
    MarketParams::new(100.0, 0.08, 0.3).unwrap()
}

fn barrier_contract(level: f64) -> OptionContract<f64> {
    OptionContract::up_and_out_call(100.0, 1.0, level).unwrap()
}

#[test]
fn test_closed_form_reference_price() {
    let market = barrier_market();
    let value = up_and_out_call(&market, 100.0, 150.0, 1.0).unwrap();
    assert_relative_eq!(value.price(), 5.3129743348, epsilon = 1e-6);
}

#[test]
fn test_simulation_agrees_with_closed_form_at_fine_monitoring() {
    let market = barrier_market();
    let contract = barrier_contract(150.0);
    let closed = up_and_out_call(&market, 100.0, 150.0, 1.0)
        .unwrap()
        .price();

    let config = SimulationConfig::new(40_000, 500, 2718).unwrap();
    let paths = simulate_gbm(&market, contract.expiry(), &config).unwrap();
    let estimate = price_up_and_out_call(&paths, &contract, market.rate()).unwrap();

    // Discrete monitoring misses intra-step crossings, so the estimate
    // sits above the continuous-barrier value.
    assert!(
        estimate.price > closed - 2.0 * estimate.std_error,
        "estimate {} fell below closed form {closed}",
        estimate.price
    );
    assert!(
        estimate.price - closed < 0.8,
        "estimate {} drifted too far above closed form {closed}",
        estimate.price
    );
    assert!(estimate.std_error > 0.02 && estimate.std_error < 0.12);
}

#[test]
fn test_monitoring_bias_shrinks_with_step_count() {
    let market = barrier_market();
    let contract = barrier_contract(150.0);

    let coarse_config = SimulationConfig::new(40_000, 5, 101).unwrap();
    let fine_config = SimulationConfig::new(40_000, 500, 202).unwrap();

    let coarse_paths = simulate_gbm(&market, contract.expiry(), &coarse_config).unwrap();
    let fine_paths = simulate_gbm(&market, contract.expiry(), &fine_config).unwrap();

    let coarse = price_up_and_out_call(&coarse_paths, &contract, market.rate()).unwrap();
    let fine = price_up_and_out_call(&fine_paths, &contract, market.rate()).unwrap();

    // Five monitoring points miss far more crossings than five hundred.
    assert!(
        coarse.price > fine.price + 0.3,
        "coarse {} not clearly above fine {}",
        coarse.price,
        fine.price
    );
}

#[test]
fn test_tighter_barrier_is_worth_less_on_the_same_paths() {
    let market = barrier_market();
    let config = SimulationConfig::new(40_000, 250, 606).unwrap();
    let paths = simulate_gbm(&market, 1.0, &config).unwrap();

    let tight = price_up_and_out_call(&paths, &barrier_contract(120.0), market.rate()).unwrap();
    let loose = price_up_and_out_call(&paths, &barrier_contract(150.0), market.rate()).unwrap();
    // Same ensemble: every payoff under the tight barrier is also paid
    // under the loose one.
    assert!(tight.price < loose.price);
}

#[test]
fn test_knockout_bounded_by_vanilla_on_the_same_paths() {
    let market = barrier_market();
    let config = SimulationConfig::new(20_000, 100, 808).unwrap();
    let paths = simulate_gbm(&market, 1.0, &config).unwrap();

    let knockout = price_up_and_out_call(&paths, &barrier_contract(150.0), market.rate()).unwrap();
    let vanilla_analytic = BlackScholes::new(market).price_call(100.0, 1.0).unwrap();
    assert!(knockout.price < vanilla_analytic);
}

#[test]
fn test_spot_at_the_barrier_is_dead_on_arrival() {
    // The closed form rejects these inputs; the simulator prices the
    // knocked-out contract at exactly zero.
    let market = MarketParams::new(160.0, 0.08, 0.3).unwrap();
    assert!(up_and_out_call(&market, 100.0, 150.0, 1.0).is_err());

    let config = SimulationConfig::new(1_000, 10, 99).unwrap();
    let paths = simulate_gbm(&market, 1.0, &config).unwrap();
    assert!(paths.maximum(0) >= 150.0);

    let estimate = price_up_and_out_call(&paths, &barrier_contract(150.0), market.rate()).unwrap();
    assert_eq!(estimate.price, 0.0);
    assert_eq!(estimate.std_error, 0.0);
}

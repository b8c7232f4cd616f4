//! Analytical comparison tests for the strategy simulator.
//!
//! With the pricing surface flat at the generator volatility, drift equal to
//! the risk-free rate and the horizon at expiry, the discounted mean payoff
//! must converge to the Black-Scholes premium.
//!
//! # Test Categories
//!
//! 1. **Convergence**: discounted expected value vs closed form
//! 2. **Probability of profit**: simulated frequency vs lognormal tail

use approx::assert_relative_eq;
use pricer_core::market_data::surfaces::ParametricVol;
use pricer_models::analytical::{norm_cdf, BlackScholes};
use pricer_models::instruments::OptionType;
use pricer_models::strategies::{long_call, long_put};
use pricer_pricing::mc::{MonteCarloConfig, SimulationParams, StrategySimulator};

/// spot, strike, rate, vol, maturity
fn standard_params() -> (f64, f64, f64, f64, f64) {
    (100.0, 100.0, 0.05, 0.2, 1.0)
}

fn simulator(vol: f64) -> StrategySimulator {
    StrategySimulator::new(
        MonteCarloConfig::builder()
            .n_paths(200_000)
            .market_volatility(vol)
            .seed(42)
            .build()
            .unwrap(),
    )
}

/// Horizon of one full trading year lands exactly on a 1y expiry.
fn to_expiry(spot: f64, rate: f64) -> SimulationParams {
    SimulationParams::new(spot, spot, 252.0, rate, rate)
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_long_call_converges_to_black_scholes() {
    let (spot, strike, rate, vol, maturity) = standard_params();
    let surface = ParametricVol::new(vol, 0.0, 0.0).unwrap();

    let result = simulator(vol)
        .simulate(&long_call(strike, maturity).unwrap(), &to_expiry(spot, rate), &surface)
        .unwrap();

    assert_eq!(result.time_remaining, 0.0);
    let discounted = result.expected_value * (-rate * maturity).exp();
    let analytical =
        BlackScholes::premium(strike, maturity, OptionType::Call, spot, rate, vol).unwrap();

    assert_relative_eq!(discounted, analytical, max_relative = 0.01);
    assert_relative_eq!(result.entry_cost, analytical, epsilon = 1e-12);
}

#[test]
fn test_long_put_converges_to_black_scholes() {
    let (spot, strike, rate, vol, maturity) = standard_params();
    let surface = ParametricVol::new(vol, 0.0, 0.0).unwrap();

    let result = simulator(vol)
        .simulate(&long_put(strike, maturity).unwrap(), &to_expiry(spot, rate), &surface)
        .unwrap();

    let discounted = result.expected_value * (-rate * maturity).exp();
    let analytical =
        BlackScholes::premium(strike, maturity, OptionType::Put, spot, rate, vol).unwrap();

    assert_relative_eq!(discounted, analytical, max_relative = 0.01);
}

// ============================================================================
// Probability of Profit
// ============================================================================

#[test]
fn test_call_probability_of_profit_matches_lognormal_tail() {
    let (spot, strike, rate, vol, maturity) = standard_params();
    let surface = ParametricVol::new(vol, 0.0, 0.0).unwrap();

    let result = simulator(vol)
        .simulate(&long_call(strike, maturity).unwrap(), &to_expiry(spot, rate), &surface)
        .unwrap();

    // Profitable iff S_T > K + premium
    let breakeven = strike + result.entry_cost;
    let z = ((breakeven / spot).ln() - (rate - 0.5 * vol * vol) * maturity) / (vol * maturity.sqrt());
    let expected = 1.0 - norm_cdf(z);

    assert!(
        (result.probability_of_profit - expected).abs() < 0.01,
        "simulated {}, lognormal {}",
        result.probability_of_profit,
        expected
    );
}

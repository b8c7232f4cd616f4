//! Check command implementation
//!
//! Numerical self-checks of the pricing stack: put-call parity,
//! finite-difference delta, implied volatility round trip, surface floor,
//! factory validation and Monte Carlo convergence.

use tracing::{info, warn};

use pricer_core::market_data::surfaces::{ParametricVol, VolatilitySurface, VOL_FLOOR};
use pricer_models::analytical::{implied_volatility, BlackScholes};
use pricer_models::instruments::{OptionType, VanillaOption};
use pricer_models::strategies::{bull_call_spread, long_call};
use pricer_pricing::mc::{MonteCarloConfig, SimulationParams, StrategySimulator};

use crate::{CliError, Result};

const SPOT: f64 = 100.0;
const STRIKE: f64 = 100.0;
const EXPIRY: f64 = 1.0;
const RATE: f64 = 0.05;
const VOL: f64 = 0.2;

const PARITY_TOLERANCE: f64 = 1e-5;
const FD_BUMP: f64 = 0.01;
const FD_TOLERANCE: f64 = 1e-4;
const IV_TOLERANCE: f64 = 1e-4;
const MC_RELATIVE_TOLERANCE: f64 = 0.01;

/// Outcome of one self-check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// Check name
    pub name: &'static str,
    /// Whether the check passed
    pub passed: bool,
    /// Measured values
    pub detail: String,
}

impl CheckOutcome {
    fn from_result(name: &'static str, result: Result<(bool, String)>) -> Self {
        match result {
            Ok((passed, detail)) => Self {
                name,
                passed,
                detail,
            },
            Err(err) => Self {
                name,
                passed: false,
                detail: format!("error: {}", err),
            },
        }
    }
}

fn put_call_parity() -> Result<(bool, String)> {
    let call = BlackScholes::calculate(STRIKE, EXPIRY, OptionType::Call, SPOT, RATE, VOL)?;
    let put = BlackScholes::calculate(STRIKE, EXPIRY, OptionType::Put, SPOT, RATE, VOL)?;

    let lhs = call.premium - put.premium;
    let rhs = SPOT - STRIKE * (-RATE * EXPIRY).exp();
    let diff = (lhs - rhs).abs();
    Ok((
        diff < PARITY_TOLERANCE,
        format!("C - P = {:.8}, S - K·e^(-rT) = {:.8}", lhs, rhs),
    ))
}

fn finite_difference_delta() -> Result<(bool, String)> {
    let analytic = BlackScholes::calculate(STRIKE, EXPIRY, OptionType::Call, SPOT, RATE, VOL)?;
    let up = BlackScholes::premium(STRIKE, EXPIRY, OptionType::Call, SPOT + FD_BUMP, RATE, VOL)?;
    let down = BlackScholes::premium(STRIKE, EXPIRY, OptionType::Call, SPOT - FD_BUMP, RATE, VOL)?;

    let numeric = (up - down) / (2.0 * FD_BUMP);
    let diff = (numeric - analytic.delta).abs();
    Ok((
        diff < FD_TOLERANCE,
        format!("analytic {:.8}, central difference {:.8}", analytic.delta, numeric),
    ))
}

fn implied_vol_round_trip() -> Result<(bool, String)> {
    let target = 0.35;
    let option = VanillaOption::new(105.0, 0.5, OptionType::Call)?;
    let price = BlackScholes::premium(105.0, 0.5, OptionType::Call, SPOT, RATE, target)?;
    let sigma = implied_volatility(&option, SPOT, price, RATE)?;

    Ok((
        (sigma - target).abs() < IV_TOLERANCE,
        format!("σ = {}, recovered {:.8}", target, sigma),
    ))
}

fn surface_floor() -> Result<(bool, String)> {
    // Steep negative smile drives the raw level far below zero in the wings
    let surface = ParametricVol::new(0.05, 0.0, -5.0)?;
    let lowest = [20.0, 50.0, 200.0, 500.0]
        .iter()
        .map(|&strike| surface.volatility(strike, 0.05, SPOT))
        .fold(f64::INFINITY, f64::min);

    Ok((
        lowest >= VOL_FLOOR,
        format!("lowest wing vol {:.4}, floor {}", lowest, VOL_FLOOR),
    ))
}

fn factory_validation() -> Result<(bool, String)> {
    let inverted = bull_call_spread(110.0, 100.0, EXPIRY);
    let ordered = bull_call_spread(100.0, 110.0, EXPIRY);
    Ok((
        inverted.is_err() && ordered.is_ok(),
        format!(
            "110/100 rejected: {}, 100/110 accepted: {}",
            inverted.is_err(),
            ordered.is_ok()
        ),
    ))
}

fn monte_carlo_convergence(paths: usize, seed: u64) -> Result<(bool, String)> {
    let config = MonteCarloConfig::builder()
        .n_paths(paths)
        .market_volatility(VOL)
        .seed(seed)
        .build()?;
    let surface = ParametricVol::new(VOL, 0.0, 0.0)?;
    let strategy = long_call(STRIKE, EXPIRY)?;
    let days = EXPIRY * config.trading_days_per_year();
    let params = SimulationParams::new(SPOT, SPOT, days, RATE, RATE);

    let result = StrategySimulator::new(config).simulate(&strategy, &params, &surface)?;
    let discounted = result.expected_value * (-RATE * EXPIRY).exp();
    let analytic = BlackScholes::premium(STRIKE, EXPIRY, OptionType::Call, SPOT, RATE, VOL)?;
    let relative = (discounted - analytic).abs() / analytic;

    Ok((
        relative < MC_RELATIVE_TOLERANCE,
        format!(
            "MC {:.5}, Black-Scholes {:.5}, rel. error {:.3}%",
            discounted,
            analytic,
            relative * 100.0
        ),
    ))
}

/// Run every check and collect the outcomes
pub fn run_checks(paths: usize, seed: u64) -> Vec<CheckOutcome> {
    vec![
        CheckOutcome::from_result("put-call parity", put_call_parity()),
        CheckOutcome::from_result("finite-difference delta", finite_difference_delta()),
        CheckOutcome::from_result("implied vol round trip", implied_vol_round_trip()),
        CheckOutcome::from_result("surface floor", surface_floor()),
        CheckOutcome::from_result("factory validation", factory_validation()),
        CheckOutcome::from_result(
            "monte carlo convergence",
            monte_carlo_convergence(paths, seed),
        ),
    ]
}

/// Run the check command
pub fn run(paths: usize, seed: u64) -> Result<()> {
    info!("Running self-checks...");

    let outcomes = run_checks(paths, seed);
    for outcome in &outcomes {
        let status = if outcome.passed { "PASS" } else { "FAIL" };
        println!("[{}] {:<26} {}", status, outcome.name, outcome.detail);
        if !outcome.passed {
            warn!(check = outcome.name, "check failed");
        }
    }

    let failed = outcomes.iter().filter(|outcome| !outcome.passed).count();
    if failed > 0 {
        return Err(CliError::ChecksFailed {
            failed,
            total: outcomes.len(),
        });
    }

    info!("All checks passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_checks_pass() {
        let outcomes = run_checks(200_000, 42);
        for outcome in &outcomes {
            assert!(outcome.passed, "{}: {}", outcome.name, outcome.detail);
        }
        assert_eq!(outcomes.len(), 6);
    }

    #[test]
    fn test_error_becomes_failure() {
        let outcome = CheckOutcome::from_result(
            "broken",
            Err(CliError::Scenario("boom".to_string())),
        );
        assert!(!outcome.passed);
        assert!(outcome.detail.contains("boom"));
    }

    #[test]
    fn test_invalid_path_count_fails_convergence() {
        let outcome = CheckOutcome::from_result("mc", monte_carlo_convergence(0, 1));
        assert!(!outcome.passed);
    }
}

//! Implied volatility from an observed option price.
//!
//! Newton-Raphson on the Black-Scholes premium with vega as the derivative,
//! starting from [`IV_INITIAL_GUESS`]. If Newton does not converge the search
//! falls back to bounded bisection on [`IV_BRACKET`], which always returns a
//! volatility inside the bracket.
//!
//! The only "no solution" outcome is a vega that is already negligible at
//! the initial guess: the price is flat in σ there and no update is possible.

use num_traits::Float;
use pricer_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};
use pricer_core::types::SolverError;

use super::black_scholes::BlackScholes;
use super::error::AnalyticalError;
use crate::instruments::VanillaOption;

/// Starting volatility for the Newton phase.
pub const IV_INITIAL_GUESS: f64 = 0.20;

/// Absolute price tolerance for both phases.
pub const IV_PRICE_TOLERANCE: f64 = 1e-6;

/// Newton iteration budget.
pub const IV_MAX_NEWTON_ITERATIONS: usize = 100;

/// Vega (per unit σ) below which a Newton step is not attempted.
pub const IV_VEGA_FLOOR: f64 = 1e-8;

/// Newton iterates are clamped to at least this volatility.
pub const IV_MIN_VOLATILITY: f64 = 1e-5;

/// Bisection search interval for σ.
pub const IV_BRACKET: (f64, f64) = (0.001, 5.0);

/// Bisection iteration budget.
pub const IV_BISECTION_ITERATIONS: usize = 30;

/// Solves for the volatility that reproduces `market_price`.
///
/// # Arguments
/// * `option` - The contract the price was observed for
/// * `spot` - Current spot price
/// * `market_price` - Observed premium
/// * `rate` - Risk-free rate
///
/// # Errors
/// - `AnalyticalError::InvalidExpiry` if the option has zero expiry
/// - `AnalyticalError::InvalidSpot` if spot <= 0
/// - `AnalyticalError::InvalidMarketPrice` if the price is negative or not finite
/// - `AnalyticalError::Unsolvable` if vega vanishes at the initial guess
///
/// # Examples
/// ```
/// use pricer_models::analytical::{implied_volatility, BlackScholes};
/// use pricer_models::instruments::{OptionType, VanillaOption};
///
/// let option = VanillaOption::new(105.0_f64, 0.5, OptionType::Call).unwrap();
/// let price = BlackScholes::premium(105.0, 0.5, OptionType::Call, 100.0, 0.03, 0.35).unwrap();
///
/// let sigma = implied_volatility(&option, 100.0, price, 0.03).unwrap();
/// assert!((sigma - 0.35).abs() < 1e-4);
/// ```
pub fn implied_volatility<T: Float>(
    option: &VanillaOption<T>,
    spot: T,
    market_price: T,
    rate: T,
) -> Result<T, AnalyticalError> {
    let strike = option.strike();
    let expiry = option.expiry();
    let option_type = option.option_type();
    let initial_guess = T::from(IV_INITIAL_GUESS).unwrap();

    // Price and vega are only ever evaluated at σ >= IV_MIN_VOLATILITY, so
    // validating once with the initial guess covers every evaluation.
    BlackScholes::premium(strike, expiry, option_type, spot, rate, initial_guess)?;

    if !(market_price >= T::zero()) || !market_price.is_finite() {
        return Err(AnalyticalError::InvalidMarketPrice {
            price: market_price.to_f64().unwrap_or(f64::NAN),
        });
    }

    let price_error = |sigma: T| {
        BlackScholes::from_parts(spot, rate, sigma).price(strike, expiry, option_type)
            - market_price
    };

    let tolerance = T::from(IV_PRICE_TOLERANCE).unwrap();
    let newton_config = SolverConfig::new(tolerance, IV_MAX_NEWTON_ITERATIONS)
        .with_derivative_tolerance(T::from(IV_VEGA_FLOOR).unwrap())
        .with_lower_bound(T::from(IV_MIN_VOLATILITY).unwrap());

    let newton = NewtonRaphsonSolver::new(newton_config).find_root_fused(
        |sigma| {
            let model = BlackScholes::from_parts(spot, rate, sigma);
            (
                model.price(strike, expiry, option_type) - market_price,
                model.vega(strike, expiry),
            )
        },
        initial_guess,
    );

    match newton {
        Ok(sigma) => Ok(sigma),
        Err(SolverError::DerivativeNearZero { iteration: 0, .. }) => {
            Err(AnalyticalError::Unsolvable {
                reason: format!(
                    "vega below {} at initial guess σ = {}",
                    IV_VEGA_FLOOR, IV_INITIAL_GUESS
                ),
            })
        }
        Err(_) => {
            let (lo, hi) = IV_BRACKET;
            BisectionSolver::new(SolverConfig::new(tolerance, IV_BISECTION_ITERATIONS))
                .find_root(price_error, T::from(lo).unwrap(), T::from(hi).unwrap())
                .map_err(|err| AnalyticalError::Unsolvable {
                    reason: err.to_string(),
                })
        }
    }
}

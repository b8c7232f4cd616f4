//! Textbook strategy constructors.
//!
//! Each constructor validates that its strikes are strictly ordered and that
//! every leg is a valid contract.
//!
//! # Examples
//! ```
//! use pricer_models::strategies::bull_call_spread;
//!
//! assert!(bull_call_spread(100.0_f64, 110.0, 0.5).is_ok());
//! assert!(bull_call_spread(110.0_f64, 100.0, 0.5).is_err());
//! ```

use num_traits::Float;

use super::{Strategy, StrategyError};
use crate::instruments::{OptionType, VanillaOption};

fn ensure_increasing<T: Float>(
    strategy: &'static str,
    strikes: &[T],
) -> Result<(), StrategyError> {
    if strikes.windows(2).all(|pair| pair[0] < pair[1]) {
        return Ok(());
    }
    Err(StrategyError::InvalidStrikeOrder {
        strategy,
        strikes: strikes
            .iter()
            .map(|k| k.to_f64().unwrap_or(f64::NAN))
            .collect(),
    })
}

fn option<T: Float>(
    strike: T,
    expiry: T,
    option_type: OptionType,
) -> Result<VanillaOption<T>, StrategyError> {
    Ok(VanillaOption::new(strike, expiry, option_type)?)
}

/// +1 call.
pub fn long_call<T: Float>(strike: T, expiry: T) -> Result<Strategy<T>, StrategyError> {
    Ok(Strategy::new("Long Call").with_leg(option(strike, expiry, OptionType::Call)?, 1))
}

/// +1 put.
pub fn long_put<T: Float>(strike: T, expiry: T) -> Result<Strategy<T>, StrategyError> {
    Ok(Strategy::new("Long Put").with_leg(option(strike, expiry, OptionType::Put)?, 1))
}

/// +1 call at `k_low`, -1 call at `k_high`. Requires `k_low < k_high`.
pub fn bull_call_spread<T: Float>(
    k_low: T,
    k_high: T,
    expiry: T,
) -> Result<Strategy<T>, StrategyError> {
    ensure_increasing("Bull Call Spread", &[k_low, k_high])?;
    Ok(Strategy::new("Bull Call Spread")
        .with_leg(option(k_low, expiry, OptionType::Call)?, 1)
        .with_leg(option(k_high, expiry, OptionType::Call)?, -1))
}

/// +1 put at `k_high`, -1 put at `k_low`. Requires `k_low < k_high`.
///
/// Note the argument order: the long (higher) strike comes first.
pub fn bear_put_spread<T: Float>(
    k_high: T,
    k_low: T,
    expiry: T,
) -> Result<Strategy<T>, StrategyError> {
    ensure_increasing("Bear Put Spread", &[k_low, k_high])?;
    Ok(Strategy::new("Bear Put Spread")
        .with_leg(option(k_high, expiry, OptionType::Put)?, 1)
        .with_leg(option(k_low, expiry, OptionType::Put)?, -1))
}

/// +1 call and +1 put at the same strike.
pub fn straddle<T: Float>(strike: T, expiry: T) -> Result<Strategy<T>, StrategyError> {
    Ok(Strategy::new("Long Straddle")
        .with_leg(option(strike, expiry, OptionType::Call)?, 1)
        .with_leg(option(strike, expiry, OptionType::Put)?, 1))
}

/// +1 put at `k_low`, +1 call at `k_high`. Requires `k_low < k_high`.
pub fn strangle<T: Float>(k_low: T, k_high: T, expiry: T) -> Result<Strategy<T>, StrategyError> {
    ensure_increasing("Long Strangle", &[k_low, k_high])?;
    Ok(Strategy::new("Long Strangle")
        .with_leg(option(k_low, expiry, OptionType::Put)?, 1)
        .with_leg(option(k_high, expiry, OptionType::Call)?, 1))
}

/// Short put spread plus short call spread.
///
/// Legs: -1 put(`kp_short`), +1 put(`kp_long`), -1 call(`kc_short`),
/// +1 call(`kc_long`). Requires `kp_long < kp_short < kc_short < kc_long`.
pub fn iron_condor<T: Float>(
    kp_long: T,
    kp_short: T,
    kc_short: T,
    kc_long: T,
    expiry: T,
) -> Result<Strategy<T>, StrategyError> {
    ensure_increasing("Iron Condor", &[kp_long, kp_short, kc_short, kc_long])?;
    Ok(Strategy::new("Iron Condor")
        .with_leg(option(kp_short, expiry, OptionType::Put)?, -1)
        .with_leg(option(kp_long, expiry, OptionType::Put)?, 1)
        .with_leg(option(kc_short, expiry, OptionType::Call)?, -1)
        .with_leg(option(kc_long, expiry, OptionType::Call)?, 1))
}

//! Multi-leg option strategies.
//!
//! A [`Strategy`] is a named list of [`StrategyLeg`]s, each a vanilla option
//! with a signed quantity (positive = long, negative = short). The
//! [`factories`] module builds the common textbook structures and enforces
//! their strike ordering.

mod error;
pub mod factories;
mod strategy;

pub use error::StrategyError;
pub use factories::{
    bear_put_spread, bull_call_spread, iron_condor, long_call, long_put, straddle, strangle,
};
pub use strategy::{Strategy, StrategyLeg};

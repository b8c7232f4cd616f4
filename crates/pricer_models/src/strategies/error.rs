//! Strategy construction errors.

use crate::instruments::InstrumentError;
use thiserror::Error;

/// Errors raised while assembling a strategy.
///
/// # Examples
/// ```
/// use pricer_models::strategies::StrategyError;
///
/// let err = StrategyError::InvalidStrikeOrder {
///     strategy: "Bull Call Spread",
///     strikes: vec![110.0, 100.0],
/// };
/// assert!(err.to_string().contains("Bull Call Spread"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrategyError {
    /// Strikes are not strictly increasing in the order the structure requires.
    #[error("Invalid strike order for {strategy}: {strikes:?} must be strictly increasing")]
    InvalidStrikeOrder {
        /// Name of the structure being built
        strategy: &'static str,
        /// Strikes in the order they must increase
        strikes: Vec<f64>,
    },

    /// A leg's option contract failed validation.
    #[error("Invalid leg: {0}")]
    InvalidLeg(#[from] InstrumentError),
}

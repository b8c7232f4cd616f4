//! Market data error types.

use thiserror::Error;

/// Market data construction errors.
///
/// Surfaces validate their parameters once, at construction, so that
/// lookups on the pricing hot path never fail.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidVolatility { volatility: -0.1 };
/// assert!(format!("{}", err).contains("-0.1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Volatility level is non-positive or not finite.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// A shape parameter is not finite.
    #[error("Invalid surface parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },
}

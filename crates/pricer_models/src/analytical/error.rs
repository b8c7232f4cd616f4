//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to Black-Scholes pricing and implied volatility

use thiserror::Error;

/// Analytical pricing errors.
///
/// Domain violations are reported explicitly rather than producing NaN or
/// zero-filled Greeks. Callers must treat any variant as "cannot price".
///
/// # Variants
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidStrike`: Non-positive strike price
/// - `InvalidExpiry`: Non-positive time to expiry
/// - `InvalidVolatility`: Negative or non-finite volatility
/// - `InvalidMarketPrice`: Negative or non-finite observed price
/// - `Unsolvable`: Implied volatility has no usable solution
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry (non-positive).
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility (negative).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Observed option price cannot be inverted.
    #[error("Invalid market price: {price}")]
    InvalidMarketPrice {
        /// The invalid price
        price: f64,
    },

    /// No implied volatility could be found.
    #[error("Implied volatility unsolvable: {reason}")]
    Unsolvable {
        /// Why the solver gave up
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = AnalyticalError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike price: K = 0");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = AnalyticalError::InvalidExpiry { expiry: -0.25 };
        assert_eq!(format!("{}", err), "Invalid time to expiry: T = -0.25");
    }

    #[test]
    fn test_unsolvable_display() {
        let err = AnalyticalError::Unsolvable {
            reason: "vega vanished".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Implied volatility unsolvable: vega vanished"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidVolatility { volatility: -1.0 };
        let _: &dyn std::error::Error = &err;
    }
}

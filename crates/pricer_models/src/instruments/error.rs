//! Instrument error types.

use thiserror::Error;

/// Instrument construction errors.
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Strike is non-positive or not finite.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Expiry is negative or not finite.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },
}

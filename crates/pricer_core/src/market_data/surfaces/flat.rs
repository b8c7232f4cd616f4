//! Flat volatility surface implementation.

use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Flat volatility surface with constant volatility.
///
/// The same volatility applies to every strike, expiry and spot. Used for
/// unit tests and plain Black-Scholes assumptions.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
///
/// let surface = FlatVol::new(0.20_f64).unwrap();
///
/// assert_eq!(surface.volatility(80.0, 0.5, 100.0), 0.20);
/// assert_eq!(surface.volatility(120.0, 2.0, 100.0), 0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatVol<T: Float> {
    /// The constant volatility
    sigma: T,
}

impl<T: Float> FlatVol<T> {
    /// Construct a flat volatility surface.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidVolatility` if `sigma` is not strictly
    /// positive and finite.
    pub fn new(sigma: T) -> Result<Self, MarketDataError> {
        if !(sigma > T::zero()) || !sigma.is_finite() {
            return Err(MarketDataError::InvalidVolatility {
                volatility: sigma.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { sigma })
    }

    /// Return the constant volatility.
    #[inline]
    pub fn sigma(&self) -> T {
        self.sigma
    }
}

impl<T: Float> VolatilitySurface<T> for FlatVol<T> {
    #[inline]
    fn volatility(&self, _strike: T, _expiry: T, _spot: T) -> T {
        self.sigma
    }
}

//! Volatility surface trait definition.

use num_traits::Float;

/// Volatility lookup used by the pricing engines.
///
/// All implementations are generic over `T: Float`.
///
/// # Contract
///
/// - `volatility(strike, expiry, spot)` returns σ(K, T; S)
/// - Lookups are pure: no interior mutability, no observable side effects.
///   A single surface instance is shared by reference across all Monte Carlo
///   workers without synchronisation.
/// - The result is always strictly positive. Degenerate inputs
///   (non-positive strike, expiry or spot) fall back to a level volatility
///   rather than failing.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
///
/// let surface = FlatVol::new(0.20_f64).unwrap();
/// let sigma = surface.volatility(100.0, 1.0, 100.0);
/// assert_eq!(sigma, 0.20);
/// ```
pub trait VolatilitySurface<T: Float> {
    /// Return the volatility for the given strike, expiry (years) and spot.
    fn volatility(&self, strike: T, expiry: T, spot: T) -> T;
}

impl<T: Float, S: VolatilitySurface<T> + ?Sized> VolatilitySurface<T> for &S {
    #[inline]
    fn volatility(&self, strike: T, expiry: T, spot: T) -> T {
        (**self).volatility(strike, expiry, spot)
    }
}

//! Static dispatch over the concrete volatility surfaces.

use super::{FlatVol, ParametricVol, VolatilitySurface};
use num_traits::Float;

/// Static dispatch enum wrapping the concrete surface implementations.
///
/// The set of volatility models is closed, so configuration-driven code
/// (e.g. a CLI scenario file) holds a `VolSurfaceEnum` instead of a trait
/// object.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{
///     FlatVol, ParametricVol, VolSurfaceEnum, VolatilitySurface,
/// };
///
/// let surfaces = [
///     VolSurfaceEnum::from(FlatVol::new(0.2_f64).unwrap()),
///     VolSurfaceEnum::from(ParametricVol::new(0.2_f64, 0.0, 0.0).unwrap()),
/// ];
///
/// for surface in &surfaces {
///     assert!((surface.volatility(100.0, 1.0, 100.0) - 0.2).abs() < 1e-12);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolSurfaceEnum<T: Float> {
    /// Constant volatility
    Flat(FlatVol<T>),
    /// Moneyness-driven smile
    Parametric(ParametricVol<T>),
}

impl<T: Float> VolSurfaceEnum<T> {
    /// Short model name used in logs and reports.
    pub fn model_name(&self) -> &'static str {
        match self {
            VolSurfaceEnum::Flat(_) => "flat",
            VolSurfaceEnum::Parametric(_) => "parametric",
        }
    }
}

impl<T: Float> VolatilitySurface<T> for VolSurfaceEnum<T> {
    #[inline]
    fn volatility(&self, strike: T, expiry: T, spot: T) -> T {
        match self {
            VolSurfaceEnum::Flat(surface) => surface.volatility(strike, expiry, spot),
            VolSurfaceEnum::Parametric(surface) => surface.volatility(strike, expiry, spot),
        }
    }
}

impl<T: Float> From<FlatVol<T>> for VolSurfaceEnum<T> {
    fn from(surface: FlatVol<T>) -> Self {
        VolSurfaceEnum::Flat(surface)
    }
}

impl<T: Float> From<ParametricVol<T>> for VolSurfaceEnum<T> {
    fn from(surface: ParametricVol<T>) -> Self {
        VolSurfaceEnum::Parametric(surface)
    }
}

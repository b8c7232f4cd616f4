//! Parametric smile surface.
//!
//! σ(K, T; S) = σ_atm + (slope·m + convexity·m²)·f(T),  m = ln(K/S)
//!
//! with f(T) = 1/√T for T ≥ 0.10 and 1 below, floored at [`VOL_FLOOR`].

use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Lowest volatility a parametric surface will ever return.
pub const VOL_FLOOR: f64 = 0.01;

/// Expiries below this use an unscaled smile; 1/√T blows up near zero.
pub const MIN_TIME_SCALING_EXPIRY: f64 = 0.10;

/// Moneyness-driven volatility smile.
///
/// `slope` tilts the smile (negative = equity-style put skew) and
/// `convexity` curves it. The smile amplitude decays with 1/√T so that
/// short-dated options carry a steeper smile.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{ParametricVol, VolatilitySurface};
///
/// let surface = ParametricVol::new(0.20_f64, -0.10, 0.30).unwrap();
///
/// // ATM returns the ATM level
/// assert!((surface.volatility(100.0, 1.0, 100.0) - 0.20).abs() < 1e-12);
///
/// // OTM puts are bid up by the negative slope
/// assert!(surface.volatility(80.0, 1.0, 100.0) > 0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametricVol<T: Float> {
    atm_vol: T,
    slope: T,
    convexity: T,
}

impl<T: Float> ParametricVol<T> {
    /// Construct a parametric surface.
    ///
    /// # Errors
    ///
    /// - `MarketDataError::InvalidVolatility` if `atm_vol` is not positive and finite
    /// - `MarketDataError::InvalidParameter` if `slope` or `convexity` is not finite
    pub fn new(atm_vol: T, slope: T, convexity: T) -> Result<Self, MarketDataError> {
        if !(atm_vol > T::zero()) || !atm_vol.is_finite() {
            return Err(MarketDataError::InvalidVolatility {
                volatility: atm_vol.to_f64().unwrap_or(f64::NAN),
            });
        }
        for (name, value) in [("slope", slope), ("convexity", convexity)] {
            if !value.is_finite() {
                return Err(MarketDataError::InvalidParameter {
                    name,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(Self {
            atm_vol,
            slope,
            convexity,
        })
    }

    /// Returns the at-the-money volatility level.
    #[inline]
    pub fn atm_vol(&self) -> T {
        self.atm_vol
    }

    /// Returns the linear moneyness coefficient.
    #[inline]
    pub fn slope(&self) -> T {
        self.slope
    }

    /// Returns the quadratic moneyness coefficient.
    #[inline]
    pub fn convexity(&self) -> T {
        self.convexity
    }
}

impl<T: Float> VolatilitySurface<T> for ParametricVol<T> {
    fn volatility(&self, strike: T, expiry: T, spot: T) -> T {
        let zero = T::zero();
        let floor = T::from(VOL_FLOOR).unwrap();

        if spot <= zero || strike <= zero || expiry <= zero {
            return self.atm_vol.max(floor);
        }

        let moneyness = (strike / spot).ln();
        let smile = self.slope * moneyness + self.convexity * moneyness * moneyness;

        let time_factor = if expiry >= T::from(MIN_TIME_SCALING_EXPIRY).unwrap() {
            T::one() / expiry.sqrt()
        } else {
            T::one()
        };

        let vol = self.atm_vol + smile * time_factor;

        // max() discards a NaN operand, so the floor also absorbs overflow
        vol.max(floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_flat_parameters_reproduce_atm() {
        let surface = ParametricVol::new(0.2_f64, 0.0, 0.0).unwrap();
        for strike in [50.0, 100.0, 150.0] {
            for expiry in [0.01, 0.5, 3.0] {
                assert_relative_eq!(
                    surface.volatility(strike, expiry, 100.0),
                    0.2,
                    epsilon = 1e-15
                );
            }
        }
    }

    #[test]
    fn test_smile_formula_long_expiry() {
        let surface = ParametricVol::new(0.2_f64, -0.1, 0.5).unwrap();
        let (strike, expiry, spot) = (90.0, 0.25, 100.0);

        let m = (strike / spot as f64).ln();
        let expected = 0.2 + (-0.1 * m + 0.5 * m * m) / expiry.sqrt();

        assert_relative_eq!(
            surface.volatility(strike, expiry, spot),
            expected,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_short_expiry_uses_unit_time_factor() {
        let surface = ParametricVol::new(0.2_f64, -0.1, 0.5).unwrap();
        let m = (110.0_f64 / 100.0).ln();
        let expected = 0.2 + (-0.1 * m + 0.5 * m * m);

        assert_relative_eq!(
            surface.volatility(110.0, 0.05, 100.0),
            expected,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_time_factor_boundary_is_inclusive() {
        let surface = ParametricVol::new(0.2_f64, 0.0, 1.0).unwrap();
        let m = (120.0_f64 / 100.0).ln();
        let expected = 0.2 + m * m / 0.1_f64.sqrt();

        assert_relative_eq!(
            surface.volatility(120.0, 0.1, 100.0),
            expected,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_floor_applies_to_steep_skew() {
        let surface = ParametricVol::new(0.05_f64, 2.0, 0.0).unwrap();
        // Deep ITM call: negative moneyness drags the raw vol below zero
        assert_eq!(surface.volatility(40.0, 1.0, 100.0), VOL_FLOOR);
    }

    #[test]
    fn test_degenerate_inputs_fall_back_to_atm() {
        let surface = ParametricVol::new(0.3_f64, -0.5, 0.5).unwrap();
        assert_eq!(surface.volatility(100.0, 1.0, 0.0), 0.3);
        assert_eq!(surface.volatility(0.0, 1.0, 100.0), 0.3);
        assert_eq!(surface.volatility(100.0, 0.0, 100.0), 0.3);
        assert_eq!(surface.volatility(100.0, -1.0, 100.0), 0.3);
    }

    #[test]
    fn test_constructor_validation() {
        assert!(matches!(
            ParametricVol::new(0.0_f64, 0.0, 0.0),
            Err(MarketDataError::InvalidVolatility { .. })
        ));
        assert!(matches!(
            ParametricVol::new(0.2_f64, f64::NAN, 0.0),
            Err(MarketDataError::InvalidParameter { name: "slope", .. })
        ));
        assert!(matches!(
            ParametricVol::new(0.2_f64, 0.0, f64::INFINITY),
            Err(MarketDataError::InvalidParameter { name: "convexity", .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn prop_volatility_respects_floor(
            atm_vol in 1e-4f64..3.0,
            slope in -50.0f64..50.0,
            convexity in -50.0f64..50.0,
            strike in -10.0f64..1_000.0,
            expiry in -1.0f64..10.0,
            spot in -10.0f64..1_000.0,
        ) {
            let surface = ParametricVol::new(atm_vol, slope, convexity).unwrap();
            let vol = surface.volatility(strike, expiry, spot);
            prop_assert!(vol >= VOL_FLOOR, "vol {} below floor", vol);
        }
    }
}

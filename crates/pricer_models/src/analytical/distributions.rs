//! Standard normal distribution functions used by the pricer.
//!
//! The CDF is built on a full-precision complementary error function from
//! `statrs`. Only the lower tail `Φ(-|x|)` is evaluated; the upper tail is
//! its complement, so `norm_cdf(x) + norm_cdf(-x) == 1` to within one
//! rounding for every finite `x`.

use num_traits::Float;
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

#[inline]
fn lower_tail(abs_x: f64) -> f64 {
    0.5 * erfc(abs_x / SQRT_2)
}

/// Standard normal cumulative distribution function Φ(x).
///
/// Evaluated in `f64` regardless of `T`. NaN propagates.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0_f64), 0.5);
/// assert!((norm_cdf(1.0_f64) - 0.841_344_746_068_542_9).abs() < 1e-14);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let x = x.to_f64().unwrap_or(f64::NAN);
    let tail = lower_tail(x.abs());
    let cdf = if x < 0.0 { tail } else { 1.0 - tail };
    T::from(cdf).unwrap_or_else(T::nan)
}

/// Standard normal density φ(x) = exp(-x²/2) / sqrt(2π).
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.398_942_280_401_432_7).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    T::from(FRAC_1_SQRT_2PI).unwrap() * (-half * x * x).exp()
}

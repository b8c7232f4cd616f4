//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Greeks conventions
//!
//! [`Greeks`] reports vega and rho per 1% move of volatility and rate, and
//! theta per trading day ([`TRADING_DAYS_PER_YEAR`]). The raw sensitivity
//! methods on [`BlackScholes`] return unscaled partial derivatives.

use num_traits::Float;
use pricer_core::market_data::surfaces::VolatilitySurface;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// Trading days per year. Converts annual theta to daily theta and
/// simulation horizons in days to years.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Scale applied to vega and rho so they read per 1% move.
const PER_PERCENT: f64 = 0.01;

/// Below this, σ√T or T is treated as zero and the deterministic limit applies.
const DEGENERATE_EPSILON: f64 = 1e-10;

/// Stand-in for ±∞ in d₁/d₂ when the diffusion term vanishes.
const LARGE_D: f64 = 100.0;

/// Premium and scaled sensitivities of one option (or a weighted sum).
///
/// Produced whole or not at all: any invalid input yields an
/// [`AnalyticalError`] instead of a partially filled structure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T> {
    /// Option value
    pub premium: T,
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// Value change per trading day
    pub theta: T,
    /// Value change per 1% volatility move
    pub vega: T,
    /// Value change per 1% rate move
    pub rho: T,
}

impl<T: Float> Greeks<T> {
    /// All fields zero. Starting point for accumulating positions.
    pub fn zero() -> Self {
        Self {
            premium: T::zero(),
            delta: T::zero(),
            gamma: T::zero(),
            theta: T::zero(),
            vega: T::zero(),
            rho: T::zero(),
        }
    }

    /// Every field multiplied by `factor` (e.g. a signed leg quantity).
    pub fn scaled(&self, factor: T) -> Self {
        Self {
            premium: self.premium * factor,
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            theta: self.theta * factor,
            vega: self.vega * factor,
            rho: self.rho * factor,
        }
    }
}

impl<T: Float> std::ops::Add for Greeks<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            premium: self.premium + rhs.premium,
            delta: self.delta + rhs.delta,
            gamma: self.gamma + rhs.gamma,
            theta: self.theta + rhs.theta,
            vega: self.vega + rhs.vega,
            rho: self.rho + rhs.rho,
        }
    }
}

impl<T: Float> Default for Greeks<T> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Validates inputs in a fixed order: expiry, spot, strike, volatility.
fn validate_inputs<T: Float>(
    strike: T,
    expiry: T,
    spot: T,
    volatility: T,
) -> Result<(), AnalyticalError> {
    check_expiry(expiry)?;
    check_spot(spot)?;
    check_strike(strike)?;
    check_volatility(volatility)
}

fn check_expiry<T: Float>(expiry: T) -> Result<(), AnalyticalError> {
    if !(expiry > T::zero()) || !expiry.is_finite() {
        return Err(AnalyticalError::InvalidExpiry {
            expiry: expiry.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

fn check_spot<T: Float>(spot: T) -> Result<(), AnalyticalError> {
    if !(spot > T::zero()) || !spot.is_finite() {
        return Err(AnalyticalError::InvalidSpot {
            spot: spot.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

fn check_strike<T: Float>(strike: T) -> Result<(), AnalyticalError> {
    if !(strike > T::zero()) || !strike.is_finite() {
        return Err(AnalyticalError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

fn check_volatility<T: Float>(volatility: T) -> Result<(), AnalyticalError> {
    if !(volatility >= T::zero()) || !volatility.is_finite() {
        return Err(AnalyticalError::InvalidVolatility {
            volatility: volatility.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing and Greeks calculations for European
/// options under lognormal dynamics.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised)
    /// * `volatility` - Volatility (must be non-negative; zero prices the deterministic limit)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility < 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    ///
    /// // Invalid spot
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    ///
    /// // Negative volatility
    /// assert!(BlackScholes::new(100.0_f64, 0.05, -0.1).is_err());
    ///
    /// // Zero volatility is a legal degenerate case
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_ok());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        check_spot(spot)?;
        check_volatility(volatility)?;

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Builds a model from parameters the caller has already validated.
    #[inline]
    pub(crate) fn from_parts(spot: T, rate: T, volatility: T) -> Self {
        Self {
            spot,
            rate,
            volatility,
        }
    }

    /// Computes the full Greeks set for one option.
    ///
    /// Vega and rho are per 1% move; theta is per trading day.
    ///
    /// # Errors
    /// In this order:
    /// - `AnalyticalError::InvalidExpiry` if expiry <= 0
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidStrike` if strike <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility < 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let greeks = BlackScholes::calculate(100.0_f64, 1.0, OptionType::Call, 100.0, 0.05, 0.2)
    ///     .unwrap();
    /// assert!((greeks.premium - 10.4506).abs() < 1e-3);
    ///
    /// assert!(BlackScholes::calculate(100.0_f64, 0.0, OptionType::Call, 100.0, 0.05, 0.2).is_err());
    /// ```
    pub fn calculate(
        strike: T,
        expiry: T,
        option_type: OptionType,
        spot: T,
        rate: T,
        volatility: T,
    ) -> Result<Greeks<T>, AnalyticalError> {
        validate_inputs(strike, expiry, spot, volatility)?;
        Ok(Self::from_parts(spot, rate, volatility).greeks_unchecked(strike, expiry, option_type))
    }

    /// [`calculate`](Self::calculate) with volatility read from a surface at
    /// `(strike, expiry, spot)`.
    pub fn calculate_with_surface<S>(
        strike: T,
        expiry: T,
        option_type: OptionType,
        spot: T,
        rate: T,
        surface: &S,
    ) -> Result<Greeks<T>, AnalyticalError>
    where
        S: VolatilitySurface<T> + ?Sized,
    {
        let volatility = surface.volatility(strike, expiry, spot);
        Self::calculate(strike, expiry, option_type, spot, rate, volatility)
    }

    /// Premium only. Same validation as [`calculate`](Self::calculate)
    /// without computing the sensitivities.
    pub fn premium(
        strike: T,
        expiry: T,
        option_type: OptionType,
        spot: T,
        rate: T,
        volatility: T,
    ) -> Result<T, AnalyticalError> {
        validate_inputs(strike, expiry, spot, volatility)?;
        Ok(Self::from_parts(spot, rate, volatility).price(strike, expiry, option_type))
    }

    /// [`premium`](Self::premium) with volatility read from a surface.
    pub fn premium_with_surface<S>(
        strike: T,
        expiry: T,
        option_type: OptionType,
        spot: T,
        rate: T,
        surface: &S,
    ) -> Result<T, AnalyticalError>
    where
        S: VolatilitySurface<T> + ?Sized,
    {
        let volatility = surface.volatility(strike, expiry, spot);
        Self::premium(strike, expiry, option_type, spot, rate, volatility)
    }

    fn greeks_unchecked(&self, strike: T, expiry: T, option_type: OptionType) -> Greeks<T> {
        let per_percent = T::from(PER_PERCENT).unwrap();
        let trading_days = T::from(TRADING_DAYS_PER_YEAR).unwrap();

        Greeks {
            premium: self.price(strike, expiry, option_type),
            delta: self.delta(strike, expiry, option_type),
            gamma: self.gamma(strike, expiry),
            theta: self.theta(strike, expiry, option_type) / trading_days,
            vega: self.vega(strike, expiry) * per_percent,
            rho: self.rho(strike, expiry, option_type) * per_percent,
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    #[inline]
    fn is_degenerate(&self, expiry: T) -> bool {
        let epsilon = T::from(DEGENERATE_EPSILON).unwrap();
        expiry <= epsilon || self.volatility * expiry.sqrt() <= epsilon
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// When σ√T vanishes (zero expiry or zero volatility) the result is
    /// ±100 according to the sign of the forward moneyness ln(S/K) + rT,
    /// which prices the deterministic limit through the usual formulas.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let half = T::from(0.5).unwrap();

        if self.is_degenerate(expiry) {
            let large = T::from(LARGE_D).unwrap();
            let forward_moneyness = (self.spot / strike).ln() + self.rate * expiry.max(zero);
            return if forward_moneyness > zero {
                large
            } else if forward_moneyness < zero {
                -large
            } else {
                zero
            };
        }

        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = self.volatility * sqrt_t;

        // d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return self.d1(strike, expiry);
        }

        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0);
    ///
    /// // ATM call should have positive value
    /// assert!(price > 0.0);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(DEGENERATE_EPSILON).unwrap();

        // Handle expiry = 0: return intrinsic value
        if expiry <= epsilon {
            return OptionType::Call.intrinsic(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let discount = (-self.rate * expiry).exp();

        // C = S·N(d₁) - K·e^(-rT)·N(d₂)
        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(DEGENERATE_EPSILON).unwrap();

        // Handle expiry = 0: return intrinsic value
        if expiry <= epsilon {
            return OptionType::Put.intrinsic(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let discount = (-self.rate * expiry).exp();

        // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Price of a call or put.
    #[inline]
    pub fn price(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        let one = T::one();
        let zero = T::zero();
        let epsilon = T::from(DEGENERATE_EPSILON).unwrap();

        if expiry <= epsilon {
            return match option_type {
                OptionType::Call if self.spot > strike => one,
                OptionType::Put if self.spot < strike => -one,
                _ => zero,
            };
        }

        let n_d1 = norm_cdf(self.d1(strike, expiry));

        match option_type {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - one,
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts. Zero in the
    /// deterministic limit.
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        let sqrt_t = expiry.sqrt();

        // Gamma = φ(d₁) / (S·σ·√T)
        norm_pdf(d1) / (self.spot * self.volatility * sqrt_t)
    }

    /// Computes Vega (∂V/∂σ), unscaled.
    ///
    /// Vega = S·√T·φ(d₁), identical for calls and puts.
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(DEGENERATE_EPSILON).unwrap();

        if expiry <= epsilon {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        let sqrt_t = expiry.sqrt();

        // Vega = S·√T·φ(d₁)
        self.spot * sqrt_t * norm_pdf(d1)
    }

    /// Computes annual Theta (∂V/∂t).
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    #[inline]
    pub fn theta(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        let epsilon = T::from(DEGENERATE_EPSILON).unwrap();

        if expiry <= epsilon {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let sqrt_t = expiry.sqrt();
        let discount = (-self.rate * expiry).exp();
        let two = T::from(2.0).unwrap();

        // Common term: -(S·σ·φ(d₁))/(2√T)
        let term1 = -(self.spot * self.volatility * norm_pdf(d1)) / (two * sqrt_t);

        match option_type {
            OptionType::Call => term1 - self.rate * strike * discount * norm_cdf(d2),
            OptionType::Put => term1 + self.rate * strike * discount * norm_cdf(-d2),
        }
    }

    /// Computes Rho (∂V/∂r), unscaled.
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        let epsilon = T::from(DEGENERATE_EPSILON).unwrap();

        if expiry <= epsilon {
            return T::zero();
        }

        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        match option_type {
            OptionType::Call => strike * expiry * discount * norm_cdf(d2),
            OptionType::Put => -strike * expiry * discount * norm_cdf(-d2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::surfaces::{FlatVol, ParametricVol};
    use proptest::prelude::*;

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.volatility(), 0.2);
    }

    #[test]
    fn test_new_invalid_spot() {
        for spot in [-100.0, 0.0, f64::NAN] {
            assert!(matches!(
                BlackScholes::new(spot, 0.05, 0.2),
                Err(AnalyticalError::InvalidSpot { .. })
            ));
        }
    }

    #[test]
    fn test_new_invalid_volatility_negative() {
        match BlackScholes::new(100.0_f64, 0.05, -0.2).unwrap_err() {
            AnalyticalError::InvalidVolatility { volatility } => assert_eq!(volatility, -0.2),
            other => panic!("Expected InvalidVolatility error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(BlackScholes::new(100.0_f64, -0.02, 0.2).is_ok());
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_d2_atm_zero_rate() {
        // ATM with r=0: d1 = σ√T / 2, d2 = -σ√T / 2
        let bs = BlackScholes::new(100.0_f64, 0.0, 0.2).unwrap();
        assert_relative_eq!(bs.d1(100.0, 1.0), 0.1, epsilon = 1e-10);
        assert_relative_eq!(bs.d2(100.0, 1.0), -0.1, epsilon = 1e-10);
    }

    #[test]
    fn test_d1_expiry_zero() {
        let bs = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.d1(100.0, 0.0) > 50.0);
        assert!(bs.d1(120.0, 0.0) < -50.0);
    }

    #[test]
    fn test_d1_zero_volatility_uses_forward_moneyness() {
        // S = K but positive rate puts the forward above the strike
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap();
        assert_eq!(bs.d1(100.0, 1.0), LARGE_D);

        // Forward below the strike
        assert_eq!(bs.d1(110.0, 1.0), -LARGE_D);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_reference_values() {
        // S=100, K=100, r=0.05, σ=0.2, T=1 against the closed form
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(100.0, 1.0), 10.450_583_572_185_565, epsilon = 1e-9);
        assert_relative_eq!(bs.price_put(100.0, 1.0), 5.573_526_022_256_971, epsilon = 1e-9);
    }

    #[test]
    fn test_price_expiry_zero_is_intrinsic() {
        let bs = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(100.0, 0.0), 10.0, epsilon = 1e-10);
        assert_relative_eq!(bs.price_put(100.0, 0.0), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_volatility_prices_discounted_forward() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap();
        let forward_intrinsic = 100.0 - 95.0 * (-0.05_f64).exp();

        assert_relative_eq!(bs.price_call(95.0, 1.0), forward_intrinsic, epsilon = 1e-10);
        assert_relative_eq!(bs.price_put(95.0, 1.0), 0.0, epsilon = 1e-10);
        assert_eq!(bs.gamma(95.0, 1.0), 0.0);
    }

    #[test]
    fn test_deep_otm_call() {
        let bs = BlackScholes::new(50.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.price_call(100.0, 1.0) < 0.01);
    }

    #[test]
    fn test_put_call_parity_various_strikes() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let call = bs.price_call(strike, 1.0);
            let put = bs.price_put(strike, 1.0);
            let forward = 100.0 - strike * (-0.05_f64).exp();
            assert_relative_eq!(call - put, forward, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_put_call_parity_negative_rate() {
        let bs = BlackScholes::new(100.0_f64, -0.02, 0.2).unwrap();
        let call = bs.price_call(100.0, 1.0);
        let put = bs.price_put(100.0, 1.0);
        let forward = 100.0 - 100.0 * (0.02_f64).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-10);
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_delta_bounds() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let call_delta = bs.delta(strike, 1.0, OptionType::Call);
            let put_delta = bs.delta(strike, 1.0, OptionType::Put);
            assert!((0.0..=1.0).contains(&call_delta));
            assert!((-1.0..=0.0).contains(&put_delta));
            assert_relative_eq!(put_delta, call_delta - 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_gamma_maximum_near_atm() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let gamma_atm = bs.gamma(100.0, 1.0);
        assert!(gamma_atm >= bs.gamma(80.0, 1.0));
        assert!(gamma_atm >= bs.gamma(120.0, 1.0));
    }

    #[test]
    fn test_theta_and_rho_signs() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.theta(100.0, 1.0, OptionType::Call) < 0.0);
        assert!(bs.rho(100.0, 1.0, OptionType::Call) > 0.0);
        assert!(bs.rho(100.0, 1.0, OptionType::Put) < 0.0);
    }

    #[test]
    fn test_delta_vs_finite_diff() {
        // S=100, K=100, T=1, r=0.05, σ=0.2, h=0.01
        let h = 0.01;
        let greeks =
            BlackScholes::calculate(100.0_f64, 1.0, OptionType::Call, 100.0, 0.05, 0.2).unwrap();
        let up =
            BlackScholes::calculate(100.0_f64, 1.0, OptionType::Call, 100.0 + h, 0.05, 0.2).unwrap();
        let down =
            BlackScholes::calculate(100.0_f64, 1.0, OptionType::Call, 100.0 - h, 0.05, 0.2).unwrap();

        let fd_delta = (up.premium - down.premium) / (2.0 * h);
        assert!((greeks.delta - fd_delta).abs() < 1e-4);
    }

    #[test]
    fn test_gamma_vs_finite_diff() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let h = 0.01;

        let bs_up = BlackScholes::new(100.0 + h, 0.05, 0.2).unwrap();
        let bs_dn = BlackScholes::new(100.0 - h, 0.05, 0.2).unwrap();

        let fd_gamma = (bs_up.price_call(100.0, 1.0) - 2.0 * bs.price_call(100.0, 1.0)
            + bs_dn.price_call(100.0, 1.0))
            / (h * h);

        assert_relative_eq!(bs.gamma(100.0, 1.0), fd_gamma, epsilon = 1e-3);
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let h = 0.001;
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let bs_up = BlackScholes::new(100.0, 0.05, 0.2 + h).unwrap();
        let bs_dn = BlackScholes::new(100.0, 0.05, 0.2 - h).unwrap();

        let fd_vega = (bs_up.price_call(100.0, 1.0) - bs_dn.price_call(100.0, 1.0)) / (2.0 * h);
        assert_relative_eq!(bs.vega(100.0, 1.0), fd_vega, epsilon = 1e-3);
    }

    #[test]
    fn test_rho_vs_finite_diff() {
        let h = 0.0001;
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let bs_up = BlackScholes::new(100.0, 0.05 + h, 0.2).unwrap();
        let bs_dn = BlackScholes::new(100.0, 0.05 - h, 0.2).unwrap();

        let fd_rho = (bs_up.price_call(100.0, 1.0) - bs_dn.price_call(100.0, 1.0)) / (2.0 * h);
        assert_relative_eq!(bs.rho(100.0, 1.0, OptionType::Call), fd_rho, epsilon = 1e-3);
    }

    // ==========================================================
    // calculate / premium Tests
    // ==========================================================

    #[test]
    fn test_calculate_scales_greeks() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let greeks =
            BlackScholes::calculate(105.0_f64, 0.75, OptionType::Put, 100.0, 0.05, 0.2).unwrap();

        assert_relative_eq!(greeks.premium, bs.price_put(105.0, 0.75), epsilon = 1e-14);
        assert_relative_eq!(greeks.delta, bs.delta(105.0, 0.75, OptionType::Put), epsilon = 1e-14);
        assert_relative_eq!(greeks.gamma, bs.gamma(105.0, 0.75), epsilon = 1e-14);
        assert_relative_eq!(greeks.vega, bs.vega(105.0, 0.75) * 0.01, epsilon = 1e-14);
        assert_relative_eq!(
            greeks.rho,
            bs.rho(105.0, 0.75, OptionType::Put) * 0.01,
            epsilon = 1e-14
        );
        assert_relative_eq!(
            greeks.theta,
            bs.theta(105.0, 0.75, OptionType::Put) / 252.0,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_calculate_rejects_domain_violations() {
        let call = OptionType::Call;
        assert!(matches!(
            BlackScholes::calculate(100.0_f64, 0.0, call, 100.0, 0.05, 0.2),
            Err(AnalyticalError::InvalidExpiry { .. })
        ));
        assert!(matches!(
            BlackScholes::calculate(100.0_f64, -1.0, call, 100.0, 0.05, 0.2),
            Err(AnalyticalError::InvalidExpiry { .. })
        ));
        assert!(matches!(
            BlackScholes::calculate(100.0_f64, 1.0, call, 0.0, 0.05, 0.2),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
        assert!(matches!(
            BlackScholes::calculate(-5.0_f64, 1.0, call, 100.0, 0.05, 0.2),
            Err(AnalyticalError::InvalidStrike { .. })
        ));
        assert!(matches!(
            BlackScholes::calculate(100.0_f64, 1.0, call, 100.0, 0.05, -0.01),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_validation_order() {
        // Every input invalid: expiry is reported first
        assert!(matches!(
            BlackScholes::calculate(-1.0_f64, 0.0, OptionType::Put, -1.0, 0.05, -1.0),
            Err(AnalyticalError::InvalidExpiry { .. })
        ));
        // Spot before strike
        assert!(matches!(
            BlackScholes::premium(-1.0_f64, 1.0, OptionType::Put, -1.0, 0.05, -1.0),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
    }

    #[test]
    fn test_zero_volatility_greeks_are_finite() {
        let greeks =
            BlackScholes::calculate(100.0_f64, 1.0, OptionType::Call, 100.0, 0.05, 0.0).unwrap();
        for value in [
            greeks.premium,
            greeks.delta,
            greeks.gamma,
            greeks.theta,
            greeks.vega,
            greeks.rho,
        ] {
            assert!(value.is_finite());
        }
        assert_relative_eq!(greeks.delta, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_premium_matches_calculate() {
        let premium =
            BlackScholes::premium(90.0_f64, 0.5, OptionType::Call, 100.0, 0.03, 0.25).unwrap();
        let greeks =
            BlackScholes::calculate(90.0_f64, 0.5, OptionType::Call, 100.0, 0.03, 0.25).unwrap();
        assert_eq!(premium, greeks.premium);
    }

    #[test]
    fn test_surface_overloads_read_volatility() {
        let flat = FlatVol::new(0.2_f64).unwrap();
        let scalar =
            BlackScholes::calculate(110.0_f64, 1.0, OptionType::Call, 100.0, 0.05, 0.2).unwrap();
        let surfaced =
            BlackScholes::calculate_with_surface(110.0_f64, 1.0, OptionType::Call, 100.0, 0.05, &flat)
                .unwrap();
        assert_eq!(scalar, surfaced);

        let skew = ParametricVol::new(0.2_f64, -0.3, 0.0).unwrap();
        let sigma = skew.volatility(90.0, 1.0, 100.0);
        let expected =
            BlackScholes::premium(90.0_f64, 1.0, OptionType::Put, 100.0, 0.05, sigma).unwrap();
        let actual =
            BlackScholes::premium_with_surface(90.0_f64, 1.0, OptionType::Put, 100.0, 0.05, &skew)
                .unwrap();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_greeks_accumulate() {
        let call = BlackScholes::calculate(100.0_f64, 1.0, OptionType::Call, 100.0, 0.05, 0.2)
            .unwrap();
        let put =
            BlackScholes::calculate(100.0_f64, 1.0, OptionType::Put, 100.0, 0.05, 0.2).unwrap();

        let straddle = Greeks::zero() + call.scaled(1.0) + put.scaled(1.0);
        assert_relative_eq!(straddle.premium, call.premium + put.premium, epsilon = 1e-14);
        assert_relative_eq!(straddle.gamma, 2.0 * call.gamma, epsilon = 1e-14);

        let flat = call.scaled(1.0) + call.scaled(-1.0);
        assert_eq!(flat, Greeks::default());
    }

    #[test]
    fn test_f32_compatibility() {
        let bs = BlackScholes::new(100.0_f32, 0.05_f32, 0.2_f32).unwrap();
        assert!(bs.price_call(100.0_f32, 1.0_f32) > 0.0_f32);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn prop_put_call_parity(
            strike in 10.0f64..300.0,
            expiry in 0.01f64..5.0,
            spot in 10.0f64..300.0,
            rate in -0.05f64..0.15,
            volatility in 0.0f64..2.0,
        ) {
            let call = BlackScholes::premium(strike, expiry, OptionType::Call, spot, rate, volatility)
                .unwrap();
            let put = BlackScholes::premium(strike, expiry, OptionType::Put, spot, rate, volatility)
                .unwrap();
            let forward = spot - strike * (-rate * expiry).exp();

            prop_assert!(
                (call - put - forward).abs() < 1e-5,
                "parity gap {}",
                call - put - forward
            );
        }
    }
}

//! Vanilla option definitions.

use std::fmt;

use num_traits::Float;

use super::error::InstrumentError;

/// Call or put.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// assert_eq!(OptionType::Call.intrinsic(110.0_f64, 100.0), 10.0);
/// assert_eq!(OptionType::Put.intrinsic(110.0_f64, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike
    Call,
    /// Right to sell at the strike
    Put,
}

impl OptionType {
    /// Returns `true` for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Exercise value `max(S - K, 0)` for calls, `max(K - S, 0)` for puts.
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let value = match self {
            OptionType::Call => spot - strike,
            OptionType::Put => strike - spot,
        };
        value.max(T::zero())
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// European vanilla option contract.
///
/// Immutable once constructed. `expiry` is measured in years; an expiry
/// of zero is a legal contract that can only be valued intrinsically.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float`
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionType, VanillaOption};
///
/// let option = VanillaOption::new(100.0_f64, 0.5, OptionType::Put).unwrap();
/// assert_eq!(option.strike(), 100.0);
/// assert_eq!(option.intrinsic_value(90.0), 10.0);
///
/// assert!(VanillaOption::new(0.0_f64, 0.5, OptionType::Put).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption<T: Float> {
    strike: T,
    expiry: T,
    option_type: OptionType,
}

impl<T: Float> VanillaOption<T> {
    /// Creates a new vanilla option.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidStrike` if strike <= 0 or not finite
    /// - `InstrumentError::InvalidExpiry` if expiry < 0 or not finite
    pub fn new(strike: T, expiry: T, option_type: OptionType) -> Result<Self, InstrumentError> {
        if !(strike > T::zero()) || !strike.is_finite() {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !(expiry >= T::zero()) || !expiry.is_finite() {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            strike,
            expiry,
            option_type,
        })
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the call/put flag.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Exercise value at the given spot.
    #[inline]
    pub fn intrinsic_value(&self, spot: T) -> T {
        self.option_type.intrinsic(spot, self.strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsic_call() {
        assert_eq!(OptionType::Call.intrinsic(120.0_f64, 100.0), 20.0);
        assert_eq!(OptionType::Call.intrinsic(80.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_intrinsic_put() {
        assert_eq!(OptionType::Put.intrinsic(80.0_f64, 100.0), 20.0);
        assert_eq!(OptionType::Put.intrinsic(120.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_option_type_display() {
        assert_eq!(OptionType::Call.to_string(), "Call");
        assert_eq!(OptionType::Put.to_string(), "Put");
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Put.is_call());
    }

    #[test]
    fn test_new_valid() {
        let option = VanillaOption::new(105.0_f64, 0.25, OptionType::Call).unwrap();
        assert_eq!(option.strike(), 105.0);
        assert_eq!(option.expiry(), 0.25);
        assert_eq!(option.option_type(), OptionType::Call);
    }

    #[test]
    fn test_zero_expiry_allowed() {
        let option = VanillaOption::new(100.0_f64, 0.0, OptionType::Call).unwrap();
        assert_eq!(option.intrinsic_value(103.0), 3.0);
    }

    #[test]
    fn test_invalid_strike() {
        for strike in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                VanillaOption::new(strike, 1.0, OptionType::Call),
                Err(InstrumentError::InvalidStrike { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_expiry() {
        for expiry in [-0.01, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                VanillaOption::new(100.0, expiry, OptionType::Put),
                Err(InstrumentError::InvalidExpiry { .. })
            ));
        }
    }
}

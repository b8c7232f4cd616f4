//! Market inputs for one strategy simulation.

use super::error::SimulationError;

/// Where the market is, where it is expected to go, and how fast.
///
/// `drift` is the annualised expected return of the underlying used by the
/// path generator; `rate` is the risk-free rate used for leg pricing.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationParams;
///
/// let params = SimulationParams::new(100.0, 110.0, 30.0, 0.05, 0.08);
/// assert!(params.validate().is_ok());
///
/// let bad = SimulationParams::new(0.0, 110.0, 30.0, 0.05, 0.08);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationParams {
    /// Spot at which entry premiums are paid.
    pub current_spot: f64,
    /// Spot at which the point projection is made.
    pub target_spot: f64,
    /// Horizon in trading days.
    pub days_to_target: f64,
    /// Risk-free rate.
    pub rate: f64,
    /// Annualised drift of the simulated underlying.
    pub drift: f64,
}

impl SimulationParams {
    /// Creates a parameter set. Call [`validate`](Self::validate) before use.
    pub fn new(
        current_spot: f64,
        target_spot: f64,
        days_to_target: f64,
        rate: f64,
        drift: f64,
    ) -> Self {
        Self {
            current_spot,
            target_spot,
            days_to_target,
            rate,
            drift,
        }
    }

    /// Checks that the current spot is positive, the horizon is non-negative
    /// and every value is finite. The target spot may be any finite value.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameter` naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let checks: [(&'static str, f64, bool); 5] = [
            ("current_spot", self.current_spot, self.current_spot > 0.0),
            ("target_spot", self.target_spot, true),
            ("days_to_target", self.days_to_target, self.days_to_target >= 0.0),
            ("rate", self.rate, true),
            ("drift", self.drift, true),
        ];

        for (name, value, in_domain) in checks {
            if !in_domain || !value.is_finite() {
                return Err(SimulationError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

//! Solver configuration.

use num_traits::Float;

/// Configuration shared by the root-finding solvers.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config = SolverConfig::<f64>::default();
/// assert_eq!(config.max_iterations, 100);
///
/// let config = SolverConfig::new(1e-6, 30).with_lower_bound(1e-5);
/// assert_eq!(config.lower_bound, Some(1e-5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance.
    ///
    /// The solver stops when `|f(x)| < tolerance`.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    pub max_iterations: usize,

    /// Newton-Raphson stops with `SolverError::DerivativeNearZero` when
    /// `|f'(x)|` falls below this value.
    pub derivative_tolerance: T,

    /// Optional floor applied to every Newton iterate.
    pub lower_bound: Option<T>,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 100
    /// - `derivative_tolerance`: 1e-30
    /// - `lower_bound`: none
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
            derivative_tolerance: T::from(1e-30).unwrap(),
            lower_bound: None,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified tolerance and iteration budget.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
            ..Self::default()
        }
    }

    /// Set the derivative floor used by Newton-Raphson.
    #[inline]
    pub fn with_derivative_tolerance(mut self, derivative_tolerance: T) -> Self {
        self.derivative_tolerance = derivative_tolerance;
        self
    }

    /// Clamp Newton iterates to at least `lower_bound`.
    #[inline]
    pub fn with_lower_bound(mut self, lower_bound: T) -> Self {
        self.lower_bound = Some(lower_bound);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert!((config.tolerance - 1e-10).abs() < 1e-15);
        assert_eq!(config.max_iterations, 100);
        assert!(config.lower_bound.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = SolverConfig::new(1e-6_f64, 100)
            .with_derivative_tolerance(1e-8)
            .with_lower_bound(1e-5);
        assert_eq!(config.derivative_tolerance, 1e-8);
        assert_eq!(config.lower_bound, Some(1e-5));
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_new_rejects_zero_tolerance() {
        let _ = SolverConfig::new(0.0_f64, 10);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_new_rejects_zero_iterations() {
        let _ = SolverConfig::new(1e-6_f64, 0);
    }
}

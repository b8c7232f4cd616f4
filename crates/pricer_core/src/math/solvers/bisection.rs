//! Bisection root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Bounded bisection root finder.
///
/// Halves the bracket `[a, b]` for at most `max_iterations` steps. Unlike
/// Newton-Raphson it cannot diverge: once the bracket is validated it always
/// returns a value inside `[a, b]`.
///
/// The search direction is taken from the endpoint values, so both
/// increasing and decreasing functions are supported. When the bracket does
/// not contain a sign change the iterates converge onto the endpoint whose
/// value is closest to zero.
///
/// # Returns
///
/// The first midpoint with `|f(mid)| < tolerance`, otherwise the midpoint of
/// the final bracket.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::new(1e-9, 60));
///
/// // Decreasing function with root at x = 3
/// let root = solver.find_root(|x: f64| 3.0 - x, 0.0, 10.0).unwrap();
/// assert!((root - 3.0).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Find a root of `f` in the bracket `[a, b]`.
    ///
    /// # Errors
    ///
    /// * `SolverError::InvalidBracket` - If `a >= b` or either endpoint is not finite
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        if !(a < b) || !a.is_finite() || !b.is_finite() {
            return Err(SolverError::InvalidBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        let two = T::from(2.0).unwrap();
        let increasing = f(b) >= f(a);

        let mut lo = a;
        let mut hi = b;

        for _iteration in 0..self.config.max_iterations {
            let mid = (lo + hi) / two;
            let f_mid = f(mid);

            if f_mid.abs() < self.config.tolerance {
                return Ok(mid);
            }

            // Root lies below mid when f(mid) is on the far side of zero
            if (f_mid > T::zero()) == increasing {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        Ok((lo + hi) / two)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

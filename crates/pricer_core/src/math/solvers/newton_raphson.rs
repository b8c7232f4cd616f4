//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a root. It may fail if:
/// - The derivative is near zero (`SolverError::DerivativeNearZero`)
/// - The initial guess is far from the root (`SolverError::MaxIterationsExceeded`)
/// - An iterate overflows (`SolverError::NumericalInstability`)
///
/// Callers that need guaranteed termination inside a bounded domain should
/// fall back to [`BisectionSolver`](super::BisectionSolver) on error.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let root = solver.find_root(f, f_prime, 1.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative too small
    /// * `Err(SolverError::NumericalInstability)` - Iterate became non-finite
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    ///
    /// // Solve x³ - x - 2 = 0
    /// let f = |x: f64| x * x * x - x - 2.0;
    /// let f_prime = |x: f64| 3.0 * x * x - 1.0;
    ///
    /// let root = solver.find_root(f, f_prime, 1.5).unwrap();
    /// assert!((f(root)).abs() < 1e-10);
    /// ```
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.find_root_fused(|x| (f(x), f_prime(x)), x0)
    }

    /// Find a root of a function that yields its value and derivative together.
    ///
    /// Useful when both come out of one evaluation, e.g. an option premium and
    /// its vega from a single Black-Scholes call.
    ///
    /// # Arguments
    ///
    /// * `f_and_derivative` - Returns `(f(x), f'(x))`
    /// * `x0` - Initial guess
    pub fn find_root_fused<F>(&self, f_and_derivative: F, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> (T, T),
    {
        let mut x = x0;

        for iteration in 0..self.config.max_iterations {
            let (f_val, f_prime_val) = f_and_derivative(x);

            if f_val.abs() < self.config.tolerance {
                return Ok(x);
            }

            if !(f_prime_val.abs() >= self.config.derivative_tolerance) {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                    iteration,
                });
            }

            x = x - f_val / f_prime_val;

            if let Some(lower_bound) = self.config.lower_bound {
                if x <= lower_bound {
                    x = lower_bound;
                }
            }

            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

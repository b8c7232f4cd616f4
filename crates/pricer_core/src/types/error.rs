//! Root-finding solver errors.

use thiserror::Error;

/// Root-finding solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Iteration budget exhausted without convergence
/// - `DerivativeNearZero`: Newton step would divide by a near-zero slope
/// - `InvalidBracket`: Bracket endpoints are not strictly ordered
/// - `NumericalInstability`: Iterate became non-finite
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative near zero (division by zero risk in Newton-Raphson).
    #[error("Derivative near zero at x = {x} (iteration {iteration})")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
        /// Zero-based iteration at which the derivative collapsed
        iteration: usize,
    },

    /// Bracket endpoints are not strictly ordered.
    #[error("Invalid bracket: [{a}, {b}]")]
    InvalidBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

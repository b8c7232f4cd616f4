//! Root-finding solvers for numerical computation.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Fast quadratic convergence using derivatives
//! - [`BisectionSolver`]: Bounded bracketing method with guaranteed termination
//!
//! Both are configured through [`SolverConfig`]:
//! - `tolerance`: Convergence tolerance on `|f(x)|` (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//! - `derivative_tolerance`: Newton slope floor (default: 1e-30)
//! - `lower_bound`: Optional clamp applied to every Newton iterate
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};
//!
//! let f = |x: f64| x * x - 2.0;
//! let f_prime = |x: f64| 2.0 * x;
//!
//! let newton = NewtonRaphsonSolver::new(SolverConfig::default());
//! let root = newton.find_root(f, f_prime, 1.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//!
//! let bisection = BisectionSolver::new(SolverConfig::new(1e-12, 60));
//! let root = bisection.find_root(f, 0.0, 2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-8);
//! ```

mod bisection;
mod config;
mod newton_raphson;

pub use bisection::BisectionSolver;
pub use config::SolverConfig;
pub use newton_raphson::NewtonRaphsonSolver;

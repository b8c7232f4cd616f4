//! # pricer_core: Numerical Foundation for the Strategy Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Solver error type: `SolverError` (`types::error`)
//! - Root-finding solvers: Newton-Raphson and bisection (`math::solvers`)
//! - Volatility surfaces: flat and parametric smile (`market_data::surfaces`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::surfaces::{ParametricVol, VolatilitySurface};
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Smile lookup: 20% ATM vol with a downward skew
//! let surface = ParametricVol::new(0.20_f64, -0.10, 0.05).unwrap();
//! let sigma = surface.volatility(90.0, 0.5, 100.0);
//! assert!(sigma > 0.20);
//!
//! // Root finding
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//! let root = solver.find_root(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0).unwrap();
//! # assert!((root - std::f64::consts::SQRT_2).abs() < 1e-8);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;

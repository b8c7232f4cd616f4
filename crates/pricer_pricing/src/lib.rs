//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing turns the closed-form models of Layer 2 into a risk/reward
//! engine for multi-leg option strategies:
//! - Parallel Monte Carlo simulation of the underlying to a target horizon
//! - Antithetic variates for variance reduction
//! - Per-worker random streams, seeded or drawn from OS entropy
//! - Batch evaluation that survives individual strategy failures
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): volatility surfaces
//! - Layer 2 (pricer_models): instruments, strategies, Black-Scholes
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::market_data::surfaces::FlatVol;
//! use pricer_models::strategies::long_call;
//! use pricer_pricing::mc::{MonteCarloConfig, SimulationParams, StrategySimulator};
//!
//! let simulator = StrategySimulator::new(
//!     MonteCarloConfig::builder().n_paths(20_000).seed(42).build().unwrap(),
//! );
//!
//! let result = simulator
//!     .simulate(
//!         &long_call(100.0, 1.0).unwrap(),
//!         &SimulationParams::new(100.0, 110.0, 63.0, 0.05, 0.08),
//!         &FlatVol::new(0.2).unwrap(),
//!     )
//!     .unwrap();
//!
//! assert!(result.probability_of_profit > 0.0);
//! assert!(result.projected_value > result.entry_cost);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for [`mc::SimulationResult`] and [`mc::SimulationParams`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;

pub use mc::{
    MonteCarloConfig, Scenario, SimulationError, SimulationParams, SimulationResult,
    StrategySimulator,
};

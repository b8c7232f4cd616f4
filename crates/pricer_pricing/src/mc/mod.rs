//! Monte Carlo risk/reward simulation for option strategies.
//!
//! # Architecture
//!
//! ```text
//! StrategySimulator
//! ├── MonteCarloConfig   (paths, workers, generator vol, seed)
//! ├── SimulationParams   (spots, horizon, rate, drift)
//! ├── PricerRng          (one per worker)
//! └── Orchestration
//!     ├── entry pricing + net Greeks
//!     ├── partition_paths() → rayon workers
//!     ├── antithetic path valuation
//!     └── target-spot projection
//! ```
//!
//! Terminal spots follow geometric Brownian motion in one step:
//! `S_T = S_0 · exp((μ − σ²/2)·t + σ·√t·Z)`.
//!
//! # Example
//!
//! ```rust
//! use pricer_core::market_data::surfaces::ParametricVol;
//! use pricer_models::strategies::bull_call_spread;
//! use pricer_pricing::mc::{MonteCarloConfig, SimulationParams, StrategySimulator};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(10_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let simulator = StrategySimulator::new(config);
//! let spread = bull_call_spread(100.0, 110.0, 0.25).unwrap();
//! let surface = ParametricVol::new(0.22, -0.1, 0.3).unwrap();
//! let params = SimulationParams::new(100.0, 108.0, 21.0, 0.04, 0.06);
//!
//! let result = simulator.simulate(&spread, &params, &surface).unwrap();
//! assert!(result.entry_cost > 0.0 && result.entry_cost < 10.0);
//! ```

mod batch;
mod config;
mod error;
mod params;
mod result;
mod simulator;

pub use batch::{BatchOutcome, BatchReport, Scenario};
pub use config::{
    MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_MARKET_VOLATILITY, DEFAULT_PATHS,
    DEFAULT_TRADING_DAYS, MAX_PATHS,
};
pub use error::{ConfigError, SimulationError};
pub use params::SimulationParams;
pub use result::SimulationResult;
pub use simulator::{partition_paths, StrategySimulator};

//! CLI error types

use pricer_core::market_data::MarketDataError;
use pricer_models::analytical::AnalyticalError;
use pricer_models::instruments::InstrumentError;
use pricer_models::strategies::StrategyError;
use pricer_pricing::mc::{ConfigError, SimulationError};
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Scenario file could not be parsed
    #[error("Scenario file error: {0}")]
    Scenario(String),

    /// Contract construction error
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Strategy construction error
    #[error(transparent)]
    Strategy(#[from] StrategyError),

    /// Surface construction error
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    /// Pricing or implied volatility error
    #[error(transparent)]
    Pricing(#[from] AnalyticalError),

    /// Simulator configuration error
    #[error("Simulation config error: {0}")]
    SimulationConfig(#[from] ConfigError),

    /// Simulation error
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// One or more self-checks failed
    #[error("{failed} of {total} checks failed")]
    ChecksFailed {
        /// Number of failing checks
        failed: usize,
        /// Number of checks run
        total: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV rendering error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

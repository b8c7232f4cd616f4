//! Error types for the Monte Carlo strategy simulator.
//!
//! This module defines structured error types for configuration validation
//! and for failures that abort a single simulation call.

use std::fmt;

use pricer_models::analytical::AnalyticalError;
use pricer_models::strategies::StrategyError;
use thiserror::Error;

/// Configuration error for the Monte Carlo simulator.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    InvalidPathCount(usize),
    /// Worker count of zero.
    InvalidWorkerCount(usize),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(count) => {
                write!(
                    f,
                    "Invalid path count {}: must be in range [1, 10_000_000]",
                    count
                )
            }
            Self::InvalidWorkerCount(count) => {
                write!(f, "Invalid worker count {}: must be at least 1", count)
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure that aborts one strategy evaluation.
///
/// None of these are produced inside the path loop; per-path pricing
/// failures are absorbed as zero contributions instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Strategy has no legs.
    #[error("Strategy '{strategy}' has no legs")]
    EmptyStrategy {
        /// Strategy name
        strategy: String,
    },

    /// A market input is out of its domain.
    #[error("Invalid simulation parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A leg could not be priced at the current spot.
    #[error("Strategy '{strategy}' leg {leg}: entry pricing failed: {source}")]
    LegPricing {
        /// Strategy name
        strategy: String,
        /// Zero-based leg index
        leg: usize,
        /// Underlying pricing error
        #[source]
        source: AnalyticalError,
    },

    /// A leg could not be priced at the target spot.
    #[error("Strategy '{strategy}' leg {leg}: projection failed: {source}")]
    Projection {
        /// Strategy name
        strategy: String,
        /// Zero-based leg index
        leg: usize,
        /// Underlying pricing error
        #[source]
        source: AnalyticalError,
    },

    /// The strategy could not be constructed.
    #[error("Strategy construction failed: {0}")]
    Construction(#[from] StrategyError),

    /// The simulator configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

//! Monte Carlo simulation configuration.
//!
//! This module provides the configuration type and builder for the
//! strategy simulator.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Default number of simulation paths.
pub const DEFAULT_PATHS: usize = 100_000;

/// Default volatility of the price-path generator.
pub const DEFAULT_MARKET_VOLATILITY: f64 = 0.20;

/// Default trading days per year for converting horizons to years.
pub const DEFAULT_TRADING_DAYS: f64 = 252.0;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// `market_volatility` drives the simulated terminal spot. It is distinct
/// from the per-leg pricing volatility, which comes from the surface.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .n_workers(4)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_workers(), 4);
/// assert!(config.antithetic());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MonteCarloConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Number of parallel workers.
    n_workers: usize,
    /// Volatility of the path generator.
    market_volatility: f64,
    /// Days per year used to convert the target horizon.
    trading_days_per_year: f64,
    /// Pair every draw with its negation.
    antithetic: bool,
    /// Optional base seed; worker `i` uses `seed + i`.
    seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            n_workers: default_workers(),
            market_volatility: DEFAULT_MARKET_VOLATILITY,
            trading_days_per_year: DEFAULT_TRADING_DAYS,
            antithetic: true,
            seed: None,
        }
    }
}

/// Detected hardware parallelism, at least 1.
fn default_workers() -> usize {
    num_cpus::get().max(1)
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of parallel workers.
    #[inline]
    pub fn n_workers(&self) -> usize {
        self.n_workers
    }

    /// Returns the path-generator volatility.
    #[inline]
    pub fn market_volatility(&self) -> f64 {
        self.market_volatility
    }

    /// Returns the trading-day count per year.
    #[inline]
    pub fn trading_days_per_year(&self) -> f64 {
        self.trading_days_per_year
    }

    /// Returns whether antithetic variates are used.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - `n_workers` is 0
    /// - `market_volatility` is not positive and finite
    /// - `trading_days_per_year` is not positive and finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_workers == 0 {
            return Err(ConfigError::InvalidWorkerCount(self.n_workers));
        }
        if !(self.market_volatility > 0.0) || !self.market_volatility.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "market_volatility",
                value: format!("{} (must be positive)", self.market_volatility),
            });
        }
        if !(self.trading_days_per_year > 0.0) || !self.trading_days_per_year.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "trading_days_per_year",
                value: format!("{} (must be positive)", self.trading_days_per_year),
            });
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Unset fields take the defaults of [`MonteCarloConfig::default`]; the
/// result is validated at build time.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .market_volatility(0.25)
///     .antithetic(false)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.market_volatility(), 0.25);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_workers: Option<usize>,
    market_volatility: Option<f64>,
    trading_days_per_year: Option<f64>,
    antithetic: Option<bool>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths, in [1, 10_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of parallel workers (at least 1).
    #[inline]
    pub fn n_workers(mut self, n_workers: usize) -> Self {
        self.n_workers = Some(n_workers);
        self
    }

    /// Sets the path-generator volatility.
    #[inline]
    pub fn market_volatility(mut self, market_volatility: f64) -> Self {
        self.market_volatility = Some(market_volatility);
        self
    }

    /// Sets the trading days per year.
    #[inline]
    pub fn trading_days_per_year(mut self, days: f64) -> Self {
        self.trading_days_per_year = Some(days);
        self
    }

    /// Enables or disables antithetic variates.
    #[inline]
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = Some(antithetic);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any value fails [`MonteCarloConfig::validate`].
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let defaults = MonteCarloConfig::default();

        let config = MonteCarloConfig {
            n_paths: self.n_paths.unwrap_or(defaults.n_paths),
            n_workers: self.n_workers.unwrap_or(defaults.n_workers),
            market_volatility: self.market_volatility.unwrap_or(defaults.market_volatility),
            trading_days_per_year: self
                .trading_days_per_year
                .unwrap_or(defaults.trading_days_per_year),
            antithetic: self.antithetic.unwrap_or(defaults.antithetic),
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

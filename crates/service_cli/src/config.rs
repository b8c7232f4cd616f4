//! Scenario configuration
//!
//! Loads a strategy batch and its market inputs from a TOML file, or falls
//! back to a built-in preset batch.
//!
//! ```toml
//! [market]
//! spot = 100.0
//! target = 110.0
//! days = 14
//! rate = 0.05
//! drift = 0.05
//!
//! [surface]
//! model = "parametric"
//! atm_vol = 0.20
//! slope = -0.10
//! convexity = 0.30
//!
//! [simulation]
//! paths = 100000
//! seed = 42
//!
//! [[strategies]]
//! kind = "bull_call_spread"
//! k_low = 100.0
//! k_high = 110.0
//! expiry = 0.5
//! ```

use std::path::Path;

use pricer_core::market_data::surfaces::{FlatVol, ParametricVol, VolSurfaceEnum};
use pricer_core::market_data::MarketDataError;
use pricer_models::strategies::{self, Strategy, StrategyError};
use pricer_pricing::mc::{ConfigError, MonteCarloConfig, Scenario, SimulationParams};
use serde::Deserialize;

use crate::{CliError, Result};

/// Market block: where the underlying is and where it is expected to go.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketSection {
    /// Current spot
    pub spot: f64,
    /// Target spot for the point projection
    pub target: f64,
    /// Horizon in trading days
    pub days: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Annualised drift of the simulated underlying
    pub drift: f64,
}

impl Default for MarketSection {
    fn default() -> Self {
        Self {
            spot: 100.0,
            target: 110.0,
            days: 14.0,
            rate: 0.05,
            drift: 0.05,
        }
    }
}

impl MarketSection {
    /// Simulation inputs for this market block
    pub fn params(&self) -> SimulationParams {
        SimulationParams::new(self.spot, self.target, self.days, self.rate, self.drift)
    }
}

/// Surface block, selected by `model`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum SurfaceSection {
    /// Constant volatility
    Flat {
        /// Volatility level
        sigma: f64,
    },
    /// Skew/smile around an ATM level
    Parametric {
        /// ATM volatility
        atm_vol: f64,
        /// Skew coefficient
        #[serde(default)]
        slope: f64,
        /// Smile coefficient
        #[serde(default)]
        convexity: f64,
    },
}

impl Default for SurfaceSection {
    fn default() -> Self {
        SurfaceSection::Flat { sigma: 0.20 }
    }
}

impl SurfaceSection {
    /// Build the surface, validating its parameters
    pub fn build(&self) -> std::result::Result<VolSurfaceEnum<f64>, MarketDataError> {
        Ok(match *self {
            SurfaceSection::Flat { sigma } => FlatVol::new(sigma)?.into(),
            SurfaceSection::Parametric {
                atm_vol,
                slope,
                convexity,
            } => ParametricVol::new(atm_vol, slope, convexity)?.into(),
        })
    }
}

/// Simulation block. Unset values use the simulator defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    /// Number of paths
    pub paths: Option<usize>,
    /// Number of workers
    pub workers: Option<usize>,
    /// Base seed
    pub seed: Option<u64>,
    /// Generator volatility; defaults to the surface ATM level
    pub market_vol: Option<f64>,
    /// Disable antithetic pairing
    pub antithetic: Option<bool>,
}

/// One strategy entry: a factory kind and its strikes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyKind {
    /// One long call
    LongCall {
        /// Strike
        strike: f64,
        /// Expiry in years
        expiry: f64,
    },
    /// One long put
    LongPut {
        /// Strike
        strike: f64,
        /// Expiry in years
        expiry: f64,
    },
    /// Long low-strike call, short high-strike call
    BullCallSpread {
        /// Lower strike
        k_low: f64,
        /// Upper strike
        k_high: f64,
        /// Expiry in years
        expiry: f64,
    },
    /// Long high-strike put, short low-strike put
    BearPutSpread {
        /// Upper strike
        k_high: f64,
        /// Lower strike
        k_low: f64,
        /// Expiry in years
        expiry: f64,
    },
    /// Long call and put at one strike
    Straddle {
        /// Strike
        strike: f64,
        /// Expiry in years
        expiry: f64,
    },
    /// Long low-strike put, long high-strike call
    Strangle {
        /// Put strike
        k_low: f64,
        /// Call strike
        k_high: f64,
        /// Expiry in years
        expiry: f64,
    },
    /// Short strangle inside a long strangle
    IronCondor {
        /// Long put strike
        put_long: f64,
        /// Short put strike
        put_short: f64,
        /// Short call strike
        call_short: f64,
        /// Long call strike
        call_long: f64,
        /// Expiry in years
        expiry: f64,
    },
}

impl StrategyKind {
    /// Run the matching factory
    pub fn build(&self) -> std::result::Result<Strategy<f64>, StrategyError> {
        match *self {
            StrategyKind::LongCall { strike, expiry } => strategies::long_call(strike, expiry),
            StrategyKind::LongPut { strike, expiry } => strategies::long_put(strike, expiry),
            StrategyKind::BullCallSpread {
                k_low,
                k_high,
                expiry,
            } => strategies::bull_call_spread(k_low, k_high, expiry),
            StrategyKind::BearPutSpread {
                k_high,
                k_low,
                expiry,
            } => strategies::bear_put_spread(k_high, k_low, expiry),
            StrategyKind::Straddle { strike, expiry } => strategies::straddle(strike, expiry),
            StrategyKind::Strangle {
                k_low,
                k_high,
                expiry,
            } => strategies::strangle(k_low, k_high, expiry),
            StrategyKind::IronCondor {
                put_long,
                put_short,
                call_short,
                call_long,
                expiry,
            } => strategies::iron_condor(put_long, put_short, call_short, call_long, expiry),
        }
    }
}

/// Labelled strategy entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StrategyEntry {
    /// Report label; defaults to the strategy name
    #[serde(default)]
    pub label: Option<String>,
    /// Factory and strikes
    #[serde(flatten)]
    pub kind: StrategyKind,
}

impl StrategyEntry {
    fn preset(kind: StrategyKind) -> Self {
        Self { label: None, kind }
    }

    /// Build the strategy; construction errors travel with the scenario
    pub fn to_scenario(&self) -> Scenario {
        let strategy = self.kind.build();
        let label = match (&self.label, &strategy) {
            (Some(label), _) => label.clone(),
            (None, Ok(strategy)) => strategy.name().to_string(),
            (None, Err(_)) => format!("{:?}", self.kind),
        };
        Scenario::new(label, strategy)
    }
}

/// A complete scenario file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioFile {
    /// Market inputs
    #[serde(default)]
    pub market: MarketSection,
    /// Pricing surface
    #[serde(default)]
    pub surface: SurfaceSection,
    /// Simulator settings
    #[serde(default)]
    pub simulation: SimulationSection,
    /// Strategies to evaluate
    #[serde(default)]
    pub strategies: Vec<StrategyEntry>,
}

impl ScenarioFile {
    /// Parse a scenario from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let scenario: ScenarioFile = toml::from_str(content)
            .map_err(|e| CliError::Scenario(format!("Failed to parse TOML: {}", e)))?;
        if scenario.strategies.is_empty() {
            return Err(CliError::Scenario("no [[strategies]] defined".to_string()));
        }
        Ok(scenario)
    }

    /// Load a scenario file from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Built-in batch: one of each factory around a spot of 100
    pub fn preset() -> Self {
        let expiry = 1.0;
        Self {
            market: MarketSection::default(),
            surface: SurfaceSection::default(),
            simulation: SimulationSection::default(),
            strategies: vec![
                StrategyEntry::preset(StrategyKind::LongCall {
                    strike: 110.0,
                    expiry,
                }),
                StrategyEntry::preset(StrategyKind::LongPut {
                    strike: 100.0,
                    expiry,
                }),
                StrategyEntry::preset(StrategyKind::BullCallSpread {
                    k_low: 100.0,
                    k_high: 110.0,
                    expiry,
                }),
                StrategyEntry::preset(StrategyKind::BearPutSpread {
                    k_high: 100.0,
                    k_low: 90.0,
                    expiry,
                }),
                StrategyEntry::preset(StrategyKind::Straddle {
                    strike: 100.0,
                    expiry,
                }),
                StrategyEntry::preset(StrategyKind::Strangle {
                    k_low: 95.0,
                    k_high: 105.0,
                    expiry,
                }),
                StrategyEntry::preset(StrategyKind::IronCondor {
                    put_long: 85.0,
                    put_short: 95.0,
                    call_short: 105.0,
                    call_long: 115.0,
                    expiry,
                }),
            ],
        }
    }

    /// Scenarios in file order
    pub fn scenarios(&self) -> Vec<Scenario> {
        self.strategies.iter().map(StrategyEntry::to_scenario).collect()
    }

    /// Generator volatility: explicit value, else the surface ATM level
    pub fn market_vol(&self) -> f64 {
        self.simulation.market_vol.unwrap_or(match self.surface {
            SurfaceSection::Flat { sigma } => sigma,
            SurfaceSection::Parametric { atm_vol, .. } => atm_vol,
        })
    }

    /// Simulator configuration; command-line overrides win over the file
    pub fn monte_carlo_config(
        &self,
        paths: Option<usize>,
        workers: Option<usize>,
        seed: Option<u64>,
    ) -> std::result::Result<MonteCarloConfig, ConfigError> {
        let mut builder = MonteCarloConfig::builder()
            .market_volatility(self.market_vol())
            .maybe_seed(seed.or(self.simulation.seed));

        if let Some(paths) = paths.or(self.simulation.paths) {
            builder = builder.n_paths(paths);
        }
        if let Some(workers) = workers.or(self.simulation.workers) {
            builder = builder.n_workers(workers);
        }
        if let Some(antithetic) = self.simulation.antithetic {
            builder = builder.antithetic(antithetic);
        }
        builder.build()
    }
}

impl Default for ScenarioFile {
    fn default() -> Self {
        Self::preset()
    }
}

//! Parallel Monte Carlo strategy simulator.
//!
//! # Overview
//!
//! [`StrategySimulator::simulate`] coordinates:
//! 1. Entry pricing of every leg at the current spot (premium and net Greeks)
//! 2. Path partitioning across workers (via [`partition_paths`])
//! 3. Per-worker terminal-spot sampling with antithetic pairs
//! 4. Revaluation of the strategy on each path and tallying of profitable paths
//! 5. A point projection at the target spot
//!
//! Workers run on the rayon pool and each owns its [`PricerRng`]. Tallies are
//! merged only after every worker has finished.

use pricer_core::market_data::surfaces::VolatilitySurface;
use pricer_models::analytical::{AnalyticalError, BlackScholes, Greeks};
use pricer_models::strategies::{Strategy, StrategyLeg};
use rayon::prelude::*;
use tracing::{debug, info};

use super::config::MonteCarloConfig;
use super::error::SimulationError;
use super::params::SimulationParams;
use super::result::SimulationResult;
use crate::rng::PricerRng;

/// Normals drawn per `fill_normal` call inside a worker.
const NORMAL_BATCH: usize = 1024;

/// Splits `total` paths into `workers` contiguous shares.
///
/// Every worker gets `total / workers`; the last one also takes the
/// remainder. A zero worker count yields no shares.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::partition_paths;
///
/// assert_eq!(partition_paths(10, 3), vec![3, 3, 4]);
/// assert_eq!(partition_paths(10, 3).iter().sum::<usize>(), 10);
/// ```
pub fn partition_paths(total: usize, workers: usize) -> Vec<usize> {
    if workers == 0 {
        return Vec::new();
    }
    let base = total / workers;
    let mut shares = vec![base; workers];
    if let Some(last) = shares.last_mut() {
        *last += total % workers;
    }
    shares
}

/// Per-worker accumulator, merged after join.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct PathTally {
    profitable: usize,
    value_sum: f64,
    paths: usize,
}

impl PathTally {
    #[inline]
    fn record(&mut self, value: f64, entry_cost: f64) {
        if value - entry_cost > 0.0 {
            self.profitable += 1;
        }
        self.value_sum += value;
        self.paths += 1;
    }

    fn merge(mut self, other: Self) -> Self {
        self.profitable += other.profitable;
        self.value_sum += other.value_sum;
        self.paths += other.paths;
        self
    }
}

/// Value of one leg at `spot` with `remaining` years to expiry.
///
/// Intrinsic once the leg has expired, Black-Scholes with surface volatility
/// otherwise. Not weighted by quantity.
fn leg_value<S>(
    leg: &StrategyLeg<f64>,
    spot: f64,
    remaining: f64,
    rate: f64,
    surface: &S,
) -> Result<f64, AnalyticalError>
where
    S: VolatilitySurface<f64> + ?Sized,
{
    if remaining <= 0.0 {
        return Ok(leg.option.intrinsic_value(spot));
    }
    BlackScholes::premium_with_surface(
        leg.option.strike(),
        remaining,
        leg.option.option_type(),
        spot,
        rate,
        surface,
    )
}

/// Immutable per-call inputs shared by every worker.
struct PathContext<'a, S: ?Sized> {
    legs: &'a [StrategyLeg<f64>],
    surface: &'a S,
    spot: f64,
    rate: f64,
    entry_cost: f64,
    /// (μ − σ²/2)·t
    drift_term: f64,
    /// σ·√t
    diffusion: f64,
    remaining: f64,
}

impl<'a, S> PathContext<'a, S>
where
    S: VolatilitySurface<f64> + ?Sized,
{
    /// Strategy value on the path driven by the standard normal `z`.
    /// Legs that fail to price contribute zero.
    fn path_value(&self, z: f64) -> f64 {
        let terminal = self.spot * (self.drift_term + self.diffusion * z).exp();
        self.legs
            .iter()
            .map(|leg| {
                leg_value(leg, terminal, self.remaining, self.rate, self.surface).unwrap_or(0.0)
                    * leg.weight()
            })
            .sum()
    }

    fn run_worker(&self, paths: usize, antithetic: bool, rng: &mut PricerRng) -> PathTally {
        let mut tally = PathTally::default();
        let draws = if antithetic { paths.div_ceil(2) } else { paths };
        let mut buffer = vec![0.0; NORMAL_BATCH.min(draws)];
        let mut left = paths;
        let mut drawn = 0;

        while drawn < draws {
            let batch = NORMAL_BATCH.min(draws - drawn);
            let normals = &mut buffer[..batch];
            rng.fill_normal(normals);

            for &z in normals.iter() {
                tally.record(self.path_value(z), self.entry_cost);
                left -= 1;
                // Odd remainder: the last draw has no mirror
                if antithetic && left > 0 {
                    tally.record(self.path_value(-z), self.entry_cost);
                    left -= 1;
                }
            }
            drawn += batch;
        }

        tally
    }
}

/// Monte Carlo risk/reward evaluator for option strategies.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::surfaces::FlatVol;
/// use pricer_models::strategies::straddle;
/// use pricer_pricing::mc::{MonteCarloConfig, SimulationParams, StrategySimulator};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(2_000)
///     .n_workers(2)
///     .seed(7)
///     .build()
///     .unwrap();
/// let simulator = StrategySimulator::new(config);
///
/// let strategy = straddle(100.0, 0.5).unwrap();
/// let params = SimulationParams::new(100.0, 110.0, 20.0, 0.05, 0.05);
/// let surface = FlatVol::new(0.25).unwrap();
///
/// let result = simulator.simulate(&strategy, &params, &surface).unwrap();
/// assert_eq!(result.n_paths, 2_000);
/// assert!((0.0..=1.0).contains(&result.probability_of_profit));
/// ```
#[derive(Clone, Debug)]
pub struct StrategySimulator {
    config: MonteCarloConfig,
}

impl StrategySimulator {
    /// Creates a simulator from a validated configuration.
    pub fn new(config: MonteCarloConfig) -> Self {
        Self { config }
    }

    /// Returns the simulator configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Evaluates `strategy` under `params`, pricing legs off `surface`.
    ///
    /// The horizon is `days_to_target / trading_days_per_year`. Time left on
    /// the position is measured against the first leg's expiry; at or past it
    /// every leg is valued at intrinsic.
    ///
    /// # Errors
    ///
    /// - `SimulationError::EmptyStrategy` if the strategy has no legs
    /// - `SimulationError::InvalidParameter` for out-of-domain market inputs
    /// - `SimulationError::LegPricing` if a leg cannot be priced at entry
    /// - `SimulationError::Projection` if a leg cannot be priced at the target spot
    pub fn simulate<S>(
        &self,
        strategy: &Strategy<f64>,
        params: &SimulationParams,
        surface: &S,
    ) -> Result<SimulationResult, SimulationError>
    where
        S: VolatilitySurface<f64> + Sync + ?Sized,
    {
        let first_leg = strategy
            .first_leg()
            .ok_or_else(|| SimulationError::EmptyStrategy {
                strategy: strategy.name().to_string(),
            })?;
        params.validate()?;

        let (entry_cost, net_greeks) = self.price_entry(strategy, params, surface)?;

        let time_to_target = params.days_to_target / self.config.trading_days_per_year();
        let time_remaining = (first_leg.option.expiry() - time_to_target).max(0.0);

        let market_vol = self.config.market_volatility();
        let context = PathContext {
            legs: strategy.legs(),
            surface,
            spot: params.current_spot,
            rate: params.rate,
            entry_cost,
            drift_term: (params.drift - 0.5 * market_vol * market_vol) * time_to_target,
            diffusion: market_vol * time_to_target.sqrt(),
            remaining: time_remaining,
        };

        let n_paths = self.config.n_paths();
        let shares = partition_paths(n_paths, self.config.n_workers());
        let antithetic = self.config.antithetic();
        let base_seed = self.config.seed();

        debug!(
            strategy = strategy.name(),
            n_paths,
            workers = shares.len(),
            ?shares,
            seeded = base_seed.is_some(),
            "partitioned simulation paths"
        );

        let tally = shares
            .into_par_iter()
            .enumerate()
            .map(|(worker, share)| {
                let mut rng = match base_seed {
                    Some(seed) => PricerRng::from_seed(seed.wrapping_add(worker as u64)),
                    None => PricerRng::from_entropy(worker as u64),
                };
                debug!(worker, share, seed = rng.seed(), "worker started");
                context.run_worker(share, antithetic, &mut rng)
            })
            .reduce(PathTally::default, PathTally::merge);

        let total = tally.paths as f64;
        let probability_of_profit = tally.profitable as f64 / total;
        let expected_value = tally.value_sum / total;

        let projected_value =
            self.project(strategy, params.target_spot, time_remaining, params.rate, surface)?;
        let profit_percent = if entry_cost == 0.0 {
            0.0
        } else {
            (projected_value - entry_cost) / entry_cost.abs() * 100.0
        };

        info!(
            strategy = strategy.name(),
            n_paths = tally.paths,
            entry_cost,
            expected_value,
            probability_of_profit,
            "simulation complete"
        );

        Ok(SimulationResult {
            strategy_name: strategy.name().to_string(),
            entry_cost,
            projected_value,
            profit_percent,
            probability_of_profit,
            expected_value,
            net_greeks,
            n_paths: tally.paths,
            time_to_target,
            time_remaining,
        })
    }

    /// Signed entry premium and quantity-weighted Greeks at the current spot.
    fn price_entry<S>(
        &self,
        strategy: &Strategy<f64>,
        params: &SimulationParams,
        surface: &S,
    ) -> Result<(f64, Greeks<f64>), SimulationError>
    where
        S: VolatilitySurface<f64> + ?Sized,
    {
        let mut entry_cost = 0.0;
        let mut net = Greeks::zero();

        for (index, leg) in strategy.legs().iter().enumerate() {
            let greeks = BlackScholes::calculate_with_surface(
                leg.option.strike(),
                leg.option.expiry(),
                leg.option.option_type(),
                params.current_spot,
                params.rate,
                surface,
            )
            .map_err(|source| SimulationError::LegPricing {
                strategy: strategy.name().to_string(),
                leg: index,
                source,
            })?;

            entry_cost += greeks.premium * leg.weight();
            net = net + greeks.scaled(leg.weight());
        }

        Ok((entry_cost, net))
    }

    /// Strategy value at `spot` with `remaining` years left.
    ///
    /// Live legs have no Black-Scholes value at a non-positive spot and
    /// project to zero there.
    fn project<S>(
        &self,
        strategy: &Strategy<f64>,
        spot: f64,
        remaining: f64,
        rate: f64,
        surface: &S,
    ) -> Result<f64, SimulationError>
    where
        S: VolatilitySurface<f64> + ?Sized,
    {
        if remaining > 0.0 && spot <= 0.0 {
            return Ok(0.0);
        }
        strategy
            .legs()
            .iter()
            .enumerate()
            .try_fold(0.0, |value, (index, leg)| {
                let value_at = leg_value(leg, spot, remaining, rate, surface).map_err(|source| {
                    SimulationError::Projection {
                        strategy: strategy.name().to_string(),
                        leg: index,
                        source,
                    }
                })?;
                Ok(value + value_at * leg.weight())
            })
    }
}

//! Batch evaluation of many named strategies.
//!
//! A failing strategy (bad construction, unpriceable leg) is reported by
//! label and the batch moves on to the next one.

use pricer_core::market_data::surfaces::VolatilitySurface;
use pricer_models::strategies::{Strategy, StrategyError};
use tracing::warn;

use super::error::SimulationError;
use super::params::SimulationParams;
use super::result::SimulationResult;
use super::simulator::StrategySimulator;

/// A labelled strategy, or the error raised while building it.
#[derive(Clone, Debug)]
pub struct Scenario {
    /// Label used in reports
    pub label: String,
    /// Constructed strategy or its construction failure
    pub strategy: Result<Strategy<f64>, StrategyError>,
}

impl Scenario {
    /// Wraps a factory result under `label`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_models::strategies::bull_call_spread;
    /// use pricer_pricing::mc::Scenario;
    ///
    /// let ok = Scenario::new("spread", bull_call_spread(100.0, 110.0, 0.5));
    /// let bad = Scenario::new("inverted", bull_call_spread(110.0, 100.0, 0.5));
    /// assert!(ok.strategy.is_ok());
    /// assert!(bad.strategy.is_err());
    /// ```
    pub fn new(
        label: impl Into<String>,
        strategy: Result<Strategy<f64>, StrategyError>,
    ) -> Self {
        Self {
            label: label.into(),
            strategy,
        }
    }
}

impl From<Strategy<f64>> for Scenario {
    fn from(strategy: Strategy<f64>) -> Self {
        Self {
            label: strategy.name().to_string(),
            strategy: Ok(strategy),
        }
    }
}

/// Result for one scenario of a batch.
#[derive(Clone, Debug)]
pub struct BatchOutcome {
    /// Scenario label
    pub label: String,
    /// Simulation result or the error that stopped it
    pub result: Result<SimulationResult, SimulationError>,
}

/// Outcomes of a batch run, in input order.
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    /// One entry per scenario
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    /// Successful results with their labels.
    pub fn succeeded(&self) -> impl Iterator<Item = (&str, &SimulationResult)> {
        self.outcomes.iter().filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .ok()
                .map(|result| (outcome.label.as_str(), result))
        })
    }

    /// Failures with their labels.
    pub fn failed(&self) -> impl Iterator<Item = (&str, &SimulationError)> {
        self.outcomes.iter().filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .err()
                .map(|err| (outcome.label.as_str(), err))
        })
    }

    /// Returns `true` if every scenario succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.result.is_ok())
    }
}

impl StrategySimulator {
    /// Simulates each scenario in turn under the same market inputs.
    ///
    /// Errors never abort the batch: they are logged at `warn` level and
    /// recorded against the scenario label.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_core::market_data::surfaces::FlatVol;
    /// use pricer_models::strategies::{bull_call_spread, long_put};
    /// use pricer_pricing::mc::{MonteCarloConfig, Scenario, SimulationParams, StrategySimulator};
    ///
    /// let simulator = StrategySimulator::new(
    ///     MonteCarloConfig::builder().n_paths(1_000).seed(1).build().unwrap(),
    /// );
    /// let scenarios = vec![
    ///     Scenario::new("inverted spread", bull_call_spread(110.0, 100.0, 0.5)),
    ///     Scenario::new("protective put", long_put(95.0, 0.5)),
    /// ];
    /// let params = SimulationParams::new(100.0, 90.0, 10.0, 0.05, 0.0);
    ///
    /// let report = simulator.simulate_batch(&scenarios, &params, &FlatVol::new(0.2).unwrap());
    /// assert_eq!(report.failed().count(), 1);
    /// assert_eq!(report.succeeded().count(), 1);
    /// ```
    pub fn simulate_batch<S>(
        &self,
        scenarios: &[Scenario],
        params: &SimulationParams,
        surface: &S,
    ) -> BatchReport
    where
        S: VolatilitySurface<f64> + Sync + ?Sized,
    {
        let outcomes = scenarios
            .iter()
            .map(|scenario| {
                let result = match &scenario.strategy {
                    Ok(strategy) => self.simulate(strategy, params, surface),
                    Err(err) => Err(SimulationError::from(err.clone())),
                };
                if let Err(err) = &result {
                    warn!(scenario = %scenario.label, error = %err, "strategy failed, continuing");
                }
                BatchOutcome {
                    label: scenario.label.clone(),
                    result,
                }
            })
            .collect();

        BatchReport { outcomes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::MonteCarloConfig;
    use pricer_core::market_data::surfaces::FlatVol;
    use pricer_models::strategies::{bull_call_spread, straddle, strangle};

    fn simulator() -> StrategySimulator {
        StrategySimulator::new(
            MonteCarloConfig::builder()
                .n_paths(2_000)
                .n_workers(2)
                .seed(2024)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_batch_continues_after_failure() {
        let scenarios = vec![
            Scenario::new("bad spread", bull_call_spread(110.0, 100.0, 0.5)),
            Scenario::from(Strategy::<f64>::new("Empty")),
            Scenario::new("straddle", straddle(100.0, 0.5)),
            Scenario::new("strangle", strangle(95.0, 105.0, 0.5)),
        ];
        let params = SimulationParams::new(100.0, 105.0, 15.0, 0.05, 0.05);

        let report = simulator().simulate_batch(&scenarios, &params, &FlatVol::new(0.2).unwrap());

        assert_eq!(report.outcomes.len(), 4);
        assert!(!report.all_succeeded());

        let failed: Vec<_> = report.failed().map(|(label, _)| label).collect();
        assert_eq!(failed, vec!["bad spread", "Empty"]);

        let succeeded: Vec<_> = report.succeeded().map(|(label, _)| label).collect();
        assert_eq!(succeeded, vec!["straddle", "strangle"]);
    }

    #[test]
    fn test_batch_error_kinds() {
        let scenarios = vec![
            Scenario::new("bad spread", bull_call_spread(110.0, 100.0, 0.5)),
            Scenario::from(Strategy::<f64>::new("Empty")),
        ];
        let params = SimulationParams::new(100.0, 100.0, 5.0, 0.05, 0.05);
        let report = simulator().simulate_batch(&scenarios, &params, &FlatVol::new(0.2).unwrap());

        assert!(matches!(
            report.outcomes[0].result,
            Err(SimulationError::Construction(StrategyError::InvalidStrikeOrder { .. }))
        ));
        assert!(matches!(
            report.outcomes[1].result,
            Err(SimulationError::EmptyStrategy { .. })
        ));
    }

    #[test]
    fn test_empty_batch() {
        let params = SimulationParams::new(100.0, 100.0, 5.0, 0.05, 0.05);
        let report = simulator().simulate_batch(&[], &params, &FlatVol::new(0.2).unwrap());
        assert!(report.outcomes.is_empty());
        assert!(report.all_succeeded());
    }
}

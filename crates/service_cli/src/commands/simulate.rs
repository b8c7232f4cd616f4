//! Simulate command implementation
//!
//! Runs a batch of strategies through the Monte Carlo simulator. Failing
//! strategies are reported in the output and do not stop the batch.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use pricer_pricing::mc::{BatchReport, StrategySimulator};

use crate::config::ScenarioFile;
use crate::output::{write_report, OutputFormat};
use crate::Result;

/// Command-line overrides for the simulation block
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulateOverrides {
    /// Path count
    pub paths: Option<usize>,
    /// Worker count
    pub workers: Option<usize>,
    /// Base seed
    pub seed: Option<u64>,
}

/// Evaluate every strategy of a scenario
pub fn run_batch(scenario: &ScenarioFile, overrides: SimulateOverrides) -> Result<BatchReport> {
    let surface = scenario.surface.build()?;
    let config =
        scenario.monte_carlo_config(overrides.paths, overrides.workers, overrides.seed)?;
    let params = scenario.market.params();

    info!(
        strategies = scenario.strategies.len(),
        paths = config.n_paths(),
        workers = config.n_workers(),
        surface = surface.model_name(),
        "starting batch"
    );

    let simulator = StrategySimulator::new(config);
    Ok(simulator.simulate_batch(&scenario.scenarios(), &params, &surface))
}

/// Run the simulate command
pub fn run(
    scenario_path: Option<&Path>,
    overrides: SimulateOverrides,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let scenario = match scenario_path {
        Some(path) => {
            info!("Loading scenario from: {}", path.display());
            ScenarioFile::from_file(path)?
        }
        None => {
            info!("No scenario file given, using preset batch");
            ScenarioFile::preset()
        }
    };

    let report = run_batch(&scenario, overrides)?;
    let failed = report.failed().count();
    if failed > 0 {
        warn!("{} of {} strategies failed", failed, report.outcomes.len());
    }

    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_report(&mut writer, &report, format)?;
            writer.flush()?;
            info!("Report written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            write_report(&mut stdout.lock(), &report, format)?;
        }
    }

    Ok(())
}

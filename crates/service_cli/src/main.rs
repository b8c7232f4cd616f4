//! strategist - Command Line Operations for Option Strategy Analysis
//!
//! Operational entry point for the pricing and simulation crates.
//!
//! # Commands
//!
//! - `strategist price` - Black-Scholes premium and Greeks
//! - `strategist iv` - Implied volatility from an observed premium
//! - `strategist simulate [--scenario <file>]` - Monte Carlo risk/reward for a strategy batch
//! - `strategist check` - Numerical self-checks
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate parses arguments and
//! scenario files, calls into the pricer crates and renders reports.
//! Logs go to stderr so that JSON and CSV output on stdout stays clean.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::price::PriceArgs;
use commands::simulate::SimulateOverrides;
use commands::Right;
use output::OutputFormat;

/// Option strategy pricing and Monte Carlo risk CLI
#[derive(Parser)]
#[command(name = "strategist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price European options with Black-Scholes
    Price {
        /// Strike price
        #[arg(short = 'k', long)]
        strike: f64,

        /// Time to expiry in years
        #[arg(short = 't', long)]
        expiry: f64,

        /// Option right; prices both when omitted
        #[arg(short = 'r', long = "right", value_enum)]
        right: Option<Right>,

        /// Spot price
        #[arg(short, long, default_value_t = 100.0)]
        spot: f64,

        /// Risk-free rate
        #[arg(long, default_value_t = 0.05)]
        rate: f64,

        /// ATM volatility
        #[arg(long, default_value_t = 0.20)]
        vol: f64,

        /// Skew coefficient (switches to the parametric surface)
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        slope: f64,

        /// Smile coefficient (switches to the parametric surface)
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        convexity: f64,
    },

    /// Solve for implied volatility
    Iv {
        /// Strike price
        #[arg(short = 'k', long)]
        strike: f64,

        /// Time to expiry in years
        #[arg(short = 't', long)]
        expiry: f64,

        /// Option right
        #[arg(short = 'r', long = "right", value_enum)]
        right: Right,

        /// Observed option premium
        #[arg(short, long)]
        price: f64,

        /// Spot price
        #[arg(short, long, default_value_t = 100.0)]
        spot: f64,

        /// Risk-free rate
        #[arg(long, default_value_t = 0.05)]
        rate: f64,
    },

    /// Simulate a batch of strategies
    Simulate {
        /// Scenario file (TOML); the preset batch is used when omitted
        #[arg(long)]
        scenario: Option<PathBuf>,

        /// Number of Monte Carlo paths
        #[arg(short = 'n', long)]
        paths: Option<usize>,

        /// Number of parallel workers
        #[arg(short, long)]
        workers: Option<usize>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run numerical self-checks
    Check {
        /// Paths for the convergence check
        #[arg(short = 'n', long, default_value_t = 200_000)]
        paths: usize,

        /// Seed for the convergence check
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!("Verbose mode enabled");

    let outcome = match cli.command {
        Commands::Price {
            strike,
            expiry,
            right,
            spot,
            rate,
            vol,
            slope,
            convexity,
        } => commands::price::run(
            &PriceArgs {
                strike,
                expiry,
                right,
                spot,
                rate,
                vol,
                slope,
                convexity,
            },
            cli.format,
        ),
        Commands::Iv {
            strike,
            expiry,
            right,
            price,
            spot,
            rate,
        } => commands::iv::run(
            &commands::iv::IvArgs {
                strike,
                expiry,
                right,
                spot,
                rate,
                price,
            },
            cli.format,
        ),
        Commands::Simulate {
            scenario,
            paths,
            workers,
            seed,
            output,
        } => commands::simulate::run(
            scenario.as_deref(),
            SimulateOverrides {
                paths,
                workers,
                seed,
            },
            cli.format,
            output.as_deref(),
        ),
        Commands::Check { paths, seed } => commands::check::run(paths, seed),
    };

    if let Err(err) = &outcome {
        error!("{}", err);
    }
    outcome
}

//! Implied volatility command implementation

use tracing::info;

use pricer_models::analytical::implied_volatility;
use pricer_models::instruments::VanillaOption;

use super::Right;
use crate::output::OutputFormat;
use crate::{CliError, Result};

/// Inputs of the iv command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IvArgs {
    /// Strike
    pub strike: f64,
    /// Expiry in years
    pub expiry: f64,
    /// Option right
    pub right: Right,
    /// Spot
    pub spot: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Observed premium
    pub price: f64,
}

/// Solve for the volatility implied by the observed premium
pub fn solve(args: &IvArgs) -> Result<f64> {
    let option = VanillaOption::new(args.strike, args.expiry, args.right.into())?;
    let sigma = implied_volatility(&option, args.spot, args.price, args.rate)?;
    info!(strike = args.strike, price = args.price, sigma, "implied volatility solved");
    Ok(sigma)
}

/// Run the iv command
pub fn run(args: &IvArgs, format: OutputFormat) -> Result<()> {
    let sigma = solve(args)?;
    match format {
        OutputFormat::Table => println!("Implied volatility: {:.6} ({:.4}%)", sigma, sigma * 100.0),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "strike": args.strike,
                "expiry": args.expiry,
                "price": args.price,
                "implied_volatility": sigma,
            })
        ),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record(["strike", "expiry", "price", "implied_volatility"])?;
            writer.write_record([
                args.strike.to_string(),
                args.expiry.to_string(),
                args.price.to_string(),
                sigma.to_string(),
            ])?;
            writer.flush().map_err(CliError::Io)?;
        }
    }
    Ok(())
}

//! Price command implementation
//!
//! Prices European options under Black-Scholes and prints premium and Greeks.

use tracing::info;

use pricer_core::market_data::surfaces::VolatilitySurface;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{OptionType, VanillaOption};

use super::{surface_from_args, Right};
use crate::output::{write_greeks, GreeksRow, OutputFormat};
use crate::Result;

/// Inputs of the price command
#[derive(Debug, Clone, PartialEq)]
pub struct PriceArgs {
    /// Strike
    pub strike: f64,
    /// Expiry in years
    pub expiry: f64,
    /// Restrict to one right; both when `None`
    pub right: Option<Right>,
    /// Spot
    pub spot: f64,
    /// Risk-free rate
    pub rate: f64,
    /// ATM volatility
    pub vol: f64,
    /// Surface skew
    pub slope: f64,
    /// Surface smile
    pub convexity: f64,
}

/// Price the requested contracts and collect labelled Greeks
pub fn price_rows(args: &PriceArgs) -> Result<Vec<GreeksRow>> {
    let surface = surface_from_args(args.vol, args.slope, args.convexity)?;
    let rights: Vec<OptionType> = match args.right {
        Some(right) => vec![right.into()],
        None => vec![OptionType::Call, OptionType::Put],
    };

    rights
        .into_iter()
        .map(|option_type| -> Result<GreeksRow> {
            let option = VanillaOption::new(args.strike, args.expiry, option_type)?;
            let greeks = BlackScholes::calculate_with_surface(
                option.strike(),
                option.expiry(),
                option.option_type(),
                args.spot,
                args.rate,
                &surface,
            )?;
            info!(
                %option_type,
                strike = option.strike(),
                vol = surface.volatility(option.strike(), option.expiry(), args.spot),
                premium = greeks.premium,
                "priced contract"
            );
            let label = format!("{} K={} T={}", option_type, option.strike(), option.expiry());
            Ok(GreeksRow::new(label, &greeks))
        })
        .collect()
}

/// Run the price command
pub fn run(args: &PriceArgs, format: OutputFormat) -> Result<()> {
    let rows = price_rows(args)?;
    let stdout = std::io::stdout();
    write_greeks(&mut stdout.lock(), &rows, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;

    fn args() -> PriceArgs {
        PriceArgs {
            strike: 100.0,
            expiry: 1.0,
            right: None,
            spot: 100.0,
            rate: 0.05,
            vol: 0.2,
            slope: 0.0,
            convexity: 0.0,
        }
    }

    #[test]
    fn test_prices_both_rights() {
        let rows = price_rows(&args()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_relative_eq!(rows[0].premium, 10.4506, epsilon = 1e-3);
        assert_relative_eq!(rows[1].premium, 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn test_single_right() {
        let rows = price_rows(&PriceArgs {
            right: Some(Right::Put),
            ..args()
        })
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].delta < 0.0);
    }

    #[test]
    fn test_zero_expiry_is_an_error() {
        let result = price_rows(&PriceArgs {
            expiry: 0.0,
            ..args()
        });
        assert!(matches!(result, Err(CliError::Pricing(_))));
    }
}

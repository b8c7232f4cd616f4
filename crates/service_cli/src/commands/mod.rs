//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use clap::ValueEnum;
use pricer_core::market_data::surfaces::{FlatVol, ParametricVol, VolSurfaceEnum};
use pricer_models::instruments::OptionType;

use crate::Result;

pub mod check;
pub mod iv;
pub mod price;
pub mod simulate;

/// Option right as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Right {
    /// Call option
    Call,
    /// Put option
    Put,
}

impl From<Right> for OptionType {
    fn from(right: Right) -> Self {
        match right {
            Right::Call => OptionType::Call,
            Right::Put => OptionType::Put,
        }
    }
}

/// Flat surface unless a skew or smile coefficient is given
pub fn surface_from_args(vol: f64, slope: f64, convexity: f64) -> Result<VolSurfaceEnum<f64>> {
    if slope == 0.0 && convexity == 0.0 {
        Ok(FlatVol::new(vol)?.into())
    } else {
        Ok(ParametricVol::new(vol, slope, convexity)?.into())
    }
}

//! Option contract definitions.
//!
//! This module provides:
//! - [`OptionType`]: call/put flag
//! - [`VanillaOption`]: validated European option contract
//! - [`InstrumentError`]: construction errors

pub mod error;
pub mod vanilla;

pub use error::InstrumentError;
pub use vanilla::{OptionType, VanillaOption};

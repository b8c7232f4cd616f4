//! Volatility surface abstractions for option pricing.
//!
//! This module provides:
//! - [`VolatilitySurface`]: Volatility lookup by strike, expiry and spot
//! - [`FlatVol`]: Constant volatility surface implementation
//! - [`ParametricVol`]: Moneyness-driven smile with a volatility floor
//! - [`VolSurfaceEnum`]: Static dispatch over the concrete surfaces

mod flat;
mod parametric;
mod surface_enum;
mod traits;

pub use flat::FlatVol;
pub use parametric::{ParametricVol, MIN_TIME_SCALING_EXPIRY, VOL_FLOOR};
pub use surface_enum::VolSurfaceEnum;
pub use traits::VolatilitySurface;

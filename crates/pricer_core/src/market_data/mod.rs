//! Market data structures for option pricing.
//!
//! # Components
//!
//! - [`surfaces`]: Volatility surface trait and implementations (FlatVol, ParametricVol)
//! - [`error`]: Market data error types (MarketDataError)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::surfaces::{FlatVol, VolatilitySurface};
//!
//! let vol_surface = FlatVol::new(0.20_f64).unwrap();
//! let sigma = vol_surface.volatility(100.0, 1.0, 95.0);
//! assert_eq!(sigma, 0.20);
//! ```

pub mod error;
pub mod surfaces;

pub use error::MarketDataError;
pub use surfaces::{FlatVol, ParametricVol, VolSurfaceEnum, VolatilitySurface};

//! Analytical pricing formulas for European options.
//!
//! This module provides:
//! - Black-Scholes prices and Greeks ([`BlackScholes`], [`Greeks`])
//! - Implied volatility via Newton-Raphson with bisection fallback
//! - Standard normal CDF/PDF
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: `f64` in production, `f32` where precision allows
//! - **Explicit failure**: domain violations return [`AnalyticalError`], never NaN
//! - **Surface-aware**: every pricing entry point has a surface-driven overload

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod implied_vol;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks, TRADING_DAYS_PER_YEAR};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use implied_vol::implied_volatility;

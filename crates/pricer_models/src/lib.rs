//! # Pricer Models (L2: Business Logic)
//!
//! Option contracts, multi-leg strategies and their closed-form valuation.
//!
//! This crate provides:
//! - Instrument definitions ([`instruments::VanillaOption`], [`instruments::OptionType`])
//! - Strategy containers and textbook factories ([`strategies`])
//! - Black-Scholes pricing, Greeks and implied volatility ([`analytical`])
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::surfaces::FlatVol;
//! use pricer_models::analytical::BlackScholes;
//! use pricer_models::strategies::bull_call_spread;
//!
//! let surface = FlatVol::new(0.2_f64).unwrap();
//! let spread = bull_call_spread(100.0_f64, 110.0, 0.5).unwrap();
//!
//! let mut cost = 0.0;
//! for leg in spread.legs() {
//!     let premium = BlackScholes::premium_with_surface(
//!         leg.option.strike(),
//!         leg.option.expiry(),
//!         leg.option.option_type(),
//!         100.0,
//!         0.05,
//!         &surface,
//!     )
//!     .unwrap();
//!     cost += premium * f64::from(leg.quantity);
//! }
//!
//! // Long the lower strike, short the higher: a debit spread
//! assert!(cost > 0.0 && cost < 10.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Validated construction**: contracts and factories reject bad inputs up front
//! - **Static dispatch**: volatility surfaces are generic parameters, not trait objects
//! - **Explicit errors**: `thiserror` enums per module, lifted with `#[from]` where one layer wraps another

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod strategies;

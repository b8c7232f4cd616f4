//! Core error types shared by every layer.
//!
//! # Re-exports
//!
//! [`SolverError`] from `error`.

pub mod error;

pub use error::SolverError;

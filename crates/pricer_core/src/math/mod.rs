//! Numerical routines used by the pricing layers.

pub mod solvers;

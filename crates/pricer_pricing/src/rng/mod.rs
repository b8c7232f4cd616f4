//! # Random Number Generation
//!
//! Random number facilities for the Monte Carlo strategy simulator.
//!
//! - **Reproducibility**: a configured seed gives deterministic streams
//! - **Independence**: unseeded generators mix OS entropy, a nanosecond
//!   timestamp, the executing thread's identity and a stream index, so
//!   workers started in the same instant never replay the same stream
//! - **Efficiency**: batch generation into caller-owned `&mut [f64]` buffers
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//!
//! // Independent stream for worker 3
//! let worker_rng = PricerRng::from_entropy(3);
//! # let _ = (normal_value, worker_rng.seed());
//! ```

mod prng;

pub use prng::PricerRng;

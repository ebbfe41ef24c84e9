//! # Pricer Hedging (L3: Simulation)
//!
//! Seeded Geometric Brownian Motion paths and a discrete-time delta-hedging
//! engine for a short European option.
//!
//! This crate provides:
//! - Injectable standard normal sources ([`rng::NormalSource`],
//!   [`rng::PricerRng`])
//! - Exact GBM path simulation ([`paths`])
//! - Self-financing delta-hedge bookkeeping ([`hedging`])
//! - Parallel multi-run error statistics ([`batch`])
//!
//! ## Quick Start
//!
//! ```
//! use pricer_hedging::simulate_hedge;
//! use pricer_models::instruments::OptionType;
//!
//! let run = simulate_hedge(100.0, 100.0, 1.0, 0.05, 0.2, 252, OptionType::Call, Some(42)).unwrap();
//!
//! assert_eq!(run.states.len(), 253);
//! assert!(run.states[0].portfolio_value.abs() < 1e-10);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for hedge states, summaries and statistics

#![deny(missing_docs)]

pub mod batch;
pub mod error;
pub mod hedging;
pub mod paths;
pub mod rng;

pub use batch::{run_multiple_simulations, HedgeErrorStats};
pub use error::HedgingError;
pub use hedging::{
    simulate_hedge, simulate_hedge_with, HedgeConfig, HedgeSimulation, HedgeState, HedgeSummary,
};
pub use paths::PricePath;

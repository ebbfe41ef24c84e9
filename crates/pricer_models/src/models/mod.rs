//! Stochastic dynamics of the underlying.
//!
//! - [`GbmParams`]: Geometric Brownian Motion under the risk-neutral measure
//! - [`GbmStep`]: Exact log-space transition over a fixed time step

pub mod gbm;

pub use gbm::{GbmParams, GbmStep};

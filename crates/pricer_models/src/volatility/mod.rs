//! Volatility inversion and smile analytics.
//!
//! - [`implied`]: Newton-Raphson then bisection inversion of market prices
//! - [`smile`]: Per-strike implied volatilities and smile shape metrics

pub mod implied;
pub mod smile;

pub use implied::{
    calculate_implied_vol, implied_volatility, implied_volatility_bisection,
    implied_volatility_newton, ImpliedVolConfig, ImpliedVolOutcome, SolveMethod, SolverResult,
};
pub use smile::{SmileMetrics, SmilePoint, SmileQuote};

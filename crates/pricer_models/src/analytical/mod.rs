//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form Black-Scholes-Merton results:
//! - [`black_scholes`]: d₁/d₂, prices, put-call parity diagnostic, model object
//! - [`greeks`]: Delta, Gamma, Vega, Theta, Rho
//! - [`distributions`]: Standard normal CDF and PDF
//!
//! ## Design Principles
//!
//! - **Pure functions** of (S, K, T, r, σ): no state, safe to call from any
//!   number of threads
//! - **Explicit expiry boundary**: `T <= 0` never divides by zero
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::{d1, d2, price, put_call_parity_check, BlackScholes, ParityCheck};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use greeks::{all_greeks, Greeks};

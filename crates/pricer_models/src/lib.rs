//! # Pricer Models (L2: Business Logic)
//!
//! Black-Scholes-Merton pricing and risk for European options.
//!
//! This crate provides:
//! - Closed-form prices, d₁/d₂ and a put-call parity diagnostic
//!   ([`analytical::black_scholes`])
//! - Analytical Greeks with per-percent and per-day scaling
//!   ([`analytical::greeks`])
//! - Option definitions: [`instruments::OptionType`],
//!   [`instruments::MarketParameters`], [`instruments::OptionSpec`]
//! - Implied volatility via Newton-Raphson with a bisection fallback, and
//!   smile analytics ([`volatility`])
//! - Exact GBM dynamics for path simulation ([`models::gbm`])
//!
//! ## Design Principles
//!
//! - **Pure functions** of (S, K, T, r, σ, kind); every call is independent
//! - **Non-convergence as data**: implied-vol failures return a tagged
//!   outcome or a NaN sentinel instead of an error
//! - **Validated value types** at the edges, plain `f64` in the formulas
//!
//! ## Quick Start
//!
//! ```
//! use pricer_models::instruments::OptionType;
//! use pricer_models::{all_greeks, implied_vol, price};
//!
//! let premium = price(42.0, 40.0, 0.5, 0.10, 0.20, OptionType::Call);
//! assert!((premium - 4.76).abs() < 0.01);
//!
//! let greeks = all_greeks(42.0, 40.0, 0.5, 0.10, 0.20, OptionType::Call);
//! assert!(greeks.gamma > 0.0);
//!
//! let vol = implied_vol(premium, 42.0, 40.0, 0.5, 0.10, OptionType::Call);
//! assert!((vol - 0.20).abs() < 1e-3);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for parameters, Greeks and solver results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
pub mod volatility;

pub use analytical::{all_greeks, price};
pub use volatility::calculate_implied_vol as implied_vol;

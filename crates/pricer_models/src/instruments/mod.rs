//! Option definitions.
//!
//! This module provides the value types describing a European option:
//! - [`OptionType`]: Call/put discriminant with expiry payoff and delta
//! - [`MarketParameters`]: Validated (S, K, T, r, σ)
//! - [`OptionSpec`]: Market parameters paired with an option type
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{MarketParameters, OptionSpec, OptionType};
//!
//! let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let call = OptionSpec::new(params, OptionType::Call);
//! let put = OptionSpec::new(params, OptionType::Put);
//!
//! // Delta(call) - Delta(put) = 1
//! assert!((call.greeks().delta - put.greeks().delta - 1.0).abs() < 1e-12);
//! ```

mod option_type;
mod params;

pub use option_type::OptionType;
pub use params::{MarketParameters, OptionSpec};

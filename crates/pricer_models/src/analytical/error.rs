//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Parameter validation failures for the closed-form
//!   models and the option-type discriminant

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Raised by validating constructors (`MarketParameters::new`,
/// `BlackScholes::new`, `GbmParams::new`) and by option-type parsing.
/// The closed-form functions themselves never fail.
///
/// # Variants
/// - `InvalidSpot`: Non-positive or non-finite spot price
/// - `InvalidStrike`: Non-positive or non-finite strike
/// - `InvalidExpiry`: Negative or non-finite time to expiry
/// - `InvalidVolatility`: Non-positive or non-finite volatility
/// - `InvalidOptionType`: Unrecognised option-type discriminant
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Option type is neither call nor put.
    #[error("Invalid option type '{value}': expected 'call' or 'put'")]
    InvalidOptionType {
        /// The unrecognised discriminant
        value: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

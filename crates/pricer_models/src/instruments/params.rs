//! Market parameters and option specifications.
//!
//! This module provides the validated value types consumed by the pricing,
//! Greeks and hedging layers.

use super::OptionType;
use crate::analytical::{black_scholes, greeks, AnalyticalError, Greeks};

/// Black-Scholes-Merton market parameters for a single option.
///
/// All fields are validated on construction:
/// - spot `S > 0`
/// - strike `K > 0`
/// - expiry `T >= 0` (years; `T = 0` is the expiry boundary)
/// - volatility `σ > 0`
///
/// The rate `r` is not range-checked; negative rates are allowed.
///
/// # Examples
/// ```
/// use pricer_models::instruments::MarketParameters;
///
/// let params = MarketParameters::new(42.0, 40.0, 0.5, 0.10, 0.20).unwrap();
/// assert_eq!(params.spot(), 42.0);
///
/// // Zero volatility is rejected
/// assert!(MarketParameters::new(42.0, 40.0, 0.5, 0.10, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParameters {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
}

impl MarketParameters {
    /// Creates new market parameters with validation.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or non-finite
    /// - `AnalyticalError::InvalidStrike` if strike <= 0 or non-finite
    /// - `AnalyticalError::InvalidExpiry` if expiry < 0 or non-finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or non-finite
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, AnalyticalError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if !(strike > 0.0 && strike.is_finite()) {
            return Err(AnalyticalError::InvalidStrike { strike });
        }
        if !(expiry >= 0.0 && expiry.is_finite()) {
            return Err(AnalyticalError::InvalidExpiry { expiry });
        }
        if !(volatility > 0.0 && volatility.is_finite()) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Moneyness K/S.
    #[inline]
    pub fn moneyness(&self) -> f64 {
        self.strike / self.spot
    }
}

/// Market parameters paired with an option type.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{MarketParameters, OptionSpec, OptionType};
///
/// let params = MarketParameters::new(42.0, 40.0, 0.5, 0.10, 0.20).unwrap();
/// let spec = OptionSpec::new(params, OptionType::Call);
/// assert!((spec.price() - 4.76).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionSpec {
    params: MarketParameters,
    option_type: OptionType,
}

impl OptionSpec {
    /// Creates a new option specification.
    pub fn new(params: MarketParameters, option_type: OptionType) -> Self {
        Self {
            params,
            option_type,
        }
    }

    /// Returns the market parameters.
    #[inline]
    pub fn params(&self) -> &MarketParameters {
        &self.params
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Black-Scholes-Merton price.
    pub fn price(&self) -> f64 {
        let p = &self.params;
        black_scholes::price(p.spot, p.strike, p.expiry, p.rate, p.volatility, self.option_type)
    }

    /// All five Greeks in one pass.
    pub fn greeks(&self) -> Greeks {
        let p = &self.params;
        greeks::all_greeks(p.spot, p.strike, p.expiry, p.rate, p.volatility, self.option_type)
    }

    /// Payoff if exercised at the current spot.
    pub fn intrinsic(&self) -> f64 {
        self.option_type
            .intrinsic(self.params.spot, self.params.strike)
    }
}

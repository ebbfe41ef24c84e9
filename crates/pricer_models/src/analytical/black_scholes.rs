//! Black-Scholes pricing model for European options.
//!
//! This module provides closed-form prices for European calls and puts,
//! both as free functions of (S, K, T, r, σ) and through the
//! [`BlackScholes`] model object.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Expiry Boundary
//!
//! `T <= 0` is treated as "at expiry": `d1`/`d2` return 0 and `price`
//! returns the intrinsic value instead of evaluating the general formula.

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use super::greeks::{self, Greeks};
use crate::instruments::{MarketParameters, OptionType};

/// Computes the d1 term of the Black-Scholes formula.
///
/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
///
/// Returns 0 when `expiry <= 0`; callers handle the expiry boundary
/// themselves.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::d1;
///
/// // ATM with r = 0: d1 = σ√T / 2
/// assert!((d1(100.0, 100.0, 1.0, 0.0, 0.2) - 0.1).abs() < 1e-12);
/// assert_eq!(d1(100.0, 100.0, 0.0, 0.05, 0.2), 0.0);
/// ```
#[inline]
pub fn d1(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64) -> f64 {
    if expiry <= 0.0 {
        return 0.0;
    }

    let log_moneyness = (spot / strike).ln();
    let drift = (rate + 0.5 * volatility * volatility) * expiry;

    (log_moneyness + drift) / (volatility * expiry.sqrt())
}

/// Computes the d2 term of the Black-Scholes formula.
///
/// d₂ = d₁ - σ√T, and 0 when `expiry <= 0`.
#[inline]
pub fn d2(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64) -> f64 {
    if expiry <= 0.0 {
        return 0.0;
    }

    d1(spot, strike, expiry, rate, volatility) - volatility * expiry.sqrt()
}

/// Black-Scholes-Merton price of a European option.
///
/// Returns the intrinsic value when `expiry <= 0`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::price;
/// use pricer_models::instruments::OptionType;
///
/// // Hull, Example 15.6
/// let call = price(42.0, 40.0, 0.5, 0.10, 0.20, OptionType::Call);
/// assert!((call - 4.76).abs() < 0.01);
///
/// let put = price(42.0, 40.0, 0.5, 0.10, 0.20, OptionType::Put);
/// assert!((put - 0.81).abs() < 0.01);
/// ```
pub fn price(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> f64 {
    if expiry <= 0.0 {
        return option_type.intrinsic(spot, strike);
    }

    let d1 = d1(spot, strike, expiry, rate, volatility);
    let d2 = d1 - volatility * expiry.sqrt();
    let discount = (-rate * expiry).exp();

    match option_type {
        // C = S·N(d₁) - K·e^(-rT)·N(d₂)
        OptionType::Call => spot * norm_cdf(d1) - strike * discount * norm_cdf(d2),
        // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
        OptionType::Put => strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}

/// Outcome of a put-call parity check.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParityCheck {
    /// C + K·e^(-rT)
    pub left_side: f64,
    /// P + S
    pub right_side: f64,
    /// |left_side - right_side|
    pub difference: f64,
    /// `difference` below 1% of spot
    pub is_valid: bool,
    /// Human-readable verdict
    pub message: String,
}

/// Checks put-call parity C + K·e^(-rT) = P + S for observed prices.
///
/// The tolerance is 1% of spot. This is a diagnostic for quoted prices and
/// is not used by the pricing functions themselves.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::put_call_parity_check;
///
/// let check = put_call_parity_check(42.0, 40.0, 0.5, 0.10, 4.76, 0.81);
/// assert!(check.is_valid);
///
/// let check = put_call_parity_check(42.0, 40.0, 0.5, 0.10, 4.76, 3.00);
/// assert!(!check.is_valid);
/// ```
pub fn put_call_parity_check(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    call_price: f64,
    put_price: f64,
) -> ParityCheck {
    let left_side = call_price + strike * (-rate * expiry).exp();
    let right_side = put_price + spot;
    let difference = (left_side - right_side).abs();
    let is_valid = difference < 0.01 * spot;

    let message = if is_valid {
        "Put-call parity holds".to_string()
    } else {
        "Put-call parity violated".to_string()
    };

    ParityCheck {
        left_side,
        right_side,
        difference,
        is_valid,
        message,
    }
}

/// Black-Scholes model for European option pricing.
///
/// Holds the model state (spot, rate, volatility) and prices any
/// (strike, expiry) pair against it.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionType;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price(100.0, 1.0, OptionType::Call);
/// let put_price = bs.price(100.0, 1.0, OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or non-finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or non-finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }

        if !(volatility > 0.0 && volatility.is_finite()) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Builds the model from validated market parameters.
    pub fn from_params(params: &MarketParameters) -> Self {
        Self {
            spot: params.spot(),
            rate: params.rate(),
            volatility: params.volatility(),
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
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

    /// d₁ for the given strike and expiry.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        d1(self.spot, strike, expiry, self.rate, self.volatility)
    }

    /// d₂ for the given strike and expiry.
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        d2(self.spot, strike, expiry, self.rate, self.volatility)
    }

    /// Option price for the given strike, expiry and type.
    #[inline]
    pub fn price(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        price(
            self.spot,
            strike,
            expiry,
            self.rate,
            self.volatility,
            option_type,
        )
    }

    /// European call price.
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        self.price(strike, expiry, OptionType::Call)
    }

    /// European put price.
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        self.price(strike, expiry, OptionType::Put)
    }

    /// All five Greeks for the given strike, expiry and type.
    pub fn greeks(&self, strike: f64, expiry: f64, option_type: OptionType) -> Greeks {
        greeks::all_greeks(
            self.spot,
            strike,
            expiry,
            self.rate,
            self.volatility,
            option_type,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm_zero_rate() {
        // ATM with r=0: d1 = σ√T / 2
        assert_relative_eq!(d1(100.0, 100.0, 1.0, 0.0, 0.2), 0.1, epsilon = 1e-12);
        assert_relative_eq!(d2(100.0, 100.0, 1.0, 0.0, 0.2), -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_hull_example() {
        // Hull: d1 = 0.7693, d2 = 0.6278
        assert_relative_eq!(d1(42.0, 40.0, 0.5, 0.10, 0.20), 0.7693, epsilon = 1e-4);
        assert_relative_eq!(d2(42.0, 40.0, 0.5, 0.10, 0.20), 0.6278, epsilon = 1e-4);
    }

    #[test]
    fn test_d1_d2_zero_at_expiry() {
        assert_eq!(d1(120.0, 100.0, 0.0, 0.05, 0.2), 0.0);
        assert_eq!(d2(120.0, 100.0, 0.0, 0.05, 0.2), 0.0);
        assert_eq!(d1(120.0, 100.0, -1.0, 0.05, 0.2), 0.0);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_price_hull_reference() {
        let call = price(42.0, 40.0, 0.5, 0.10, 0.20, OptionType::Call);
        let put = price(42.0, 40.0, 0.5, 0.10, 0.20, OptionType::Put);
        assert_relative_eq!(call, 4.7594, epsilon = 1e-3);
        assert_relative_eq!(put, 0.8086, epsilon = 1e-3);
    }

    #[test]
    fn test_price_atm_textbook() {
        let call = price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
        let put = price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put);
        assert_relative_eq!(call, 10.4506, epsilon = 1e-4);
        assert_relative_eq!(put, 5.5735, epsilon = 1e-4);
    }

    #[test]
    fn test_deep_itm_call_above_forward_intrinsic() {
        let call = price(150.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
        assert!(call >= 150.0 - 100.0 * (-0.05_f64).exp());
    }

    #[test]
    fn test_deep_otm_call_small() {
        let call = price(50.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
        assert!(call >= 0.0);
        assert!(call < 1.0);
    }

    #[test]
    fn test_price_at_expiry_is_intrinsic() {
        assert_eq!(price(110.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call), 10.0);
        assert_eq!(price(110.0, 100.0, 0.0, 0.05, 0.2, OptionType::Put), 0.0);
        assert_eq!(price(90.0, 100.0, -0.1, 0.05, 0.2, OptionType::Put), 10.0);
    }

    #[test]
    fn test_put_call_parity_free_functions() {
        let (s, k, t, r, v) = (100.0, 110.0, 0.75, 0.03, 0.35);
        let call = price(s, k, t, r, v, OptionType::Call);
        let put = price(s, k, t, r, v, OptionType::Put);
        assert_relative_eq!(put + s, call + k * (-r * t).exp(), epsilon = 1e-10);
    }

    #[test]
    fn test_negative_rate_prices_finite() {
        let call = price(100.0, 100.0, 1.0, -0.02, 0.2, OptionType::Call);
        assert!(call.is_finite() && call > 0.0);
    }

    // ==========================================================
    // Parity Check Tests
    // ==========================================================

    #[test]
    fn test_parity_check_with_model_prices() {
        let call = price(42.0, 40.0, 0.5, 0.10, 0.20, OptionType::Call);
        let put = price(42.0, 40.0, 0.5, 0.10, 0.20, OptionType::Put);
        let check = put_call_parity_check(42.0, 40.0, 0.5, 0.10, call, put);

        assert!(check.is_valid);
        assert!(check.difference < 1e-10);
        assert_relative_eq!(check.left_side, check.right_side, epsilon = 1e-10);
        assert_eq!(check.message, "Put-call parity holds");
    }

    #[test]
    fn test_parity_check_violation() {
        let check = put_call_parity_check(100.0, 100.0, 1.0, 0.05, 10.45, 10.45);
        // Gap equals K(1 - e^{-rT}) ≈ 4.88 > 1.0
        assert!(!check.is_valid);
        assert_relative_eq!(check.difference, 100.0 * (1.0 - (-0.05_f64).exp()), epsilon = 1e-10);
        assert_eq!(check.message, "Put-call parity violated");
    }

    // ==========================================================
    // Model Object Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.volatility(), 0.2);
    }

    #[test]
    fn test_new_invalid_spot() {
        match BlackScholes::new(0.0, 0.05, 0.2) {
            Err(AnalyticalError::InvalidSpot { spot }) => assert_eq!(spot, 0.0),
            other => panic!("Expected InvalidSpot error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_invalid_volatility() {
        match BlackScholes::new(100.0, 0.05, -0.2) {
            Err(AnalyticalError::InvalidVolatility { volatility }) => assert_eq!(volatility, -0.2),
            other => panic!("Expected InvalidVolatility error, got {:?}", other),
        }
    }

    #[test]
    fn test_model_matches_free_functions() {
        let bs = BlackScholes::new(42.0, 0.10, 0.20).unwrap();
        assert_eq!(bs.price_call(40.0, 0.5), price(42.0, 40.0, 0.5, 0.10, 0.20, OptionType::Call));
        assert_eq!(bs.price_put(40.0, 0.5), price(42.0, 40.0, 0.5, 0.10, 0.20, OptionType::Put));
        assert_eq!(bs.d1(40.0, 0.5), d1(42.0, 40.0, 0.5, 0.10, 0.20));
        assert_eq!(bs.d2(40.0, 0.5), d2(42.0, 40.0, 0.5, 0.10, 0.20));
    }

    #[test]
    fn test_from_params() {
        let params = MarketParameters::new(42.0, 40.0, 0.5, 0.10, 0.20).unwrap();
        let bs = BlackScholes::from_params(&params);
        assert_eq!(bs, BlackScholes::new(42.0, 0.10, 0.20).unwrap());
        assert_relative_eq!(
            bs.greeks(40.0, 0.5, OptionType::Call).delta,
            0.7791,
            epsilon = 1e-4
        );
    }
}

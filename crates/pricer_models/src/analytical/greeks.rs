//! Analytical Black-Scholes Greeks.
//!
//! Scaling conventions:
//! - delta, gamma: per unit of spot
//! - vega: per 1 percentage point of volatility (raw vega / 100)
//! - theta: per calendar day (raw theta / 365)
//! - rho: per 1 percentage point of rate (raw rho / 100)
//!
//! At the expiry boundary (`T <= 0`) delta is the moneyness indicator
//! from [`OptionType::expiry_delta`] and the other four Greeks are 0.

use super::black_scholes::{d1, d2};
use super::distributions::{norm_cdf, norm_pdf};
use crate::instruments::OptionType;

/// Calendar days per year used to express theta per day.
const DAYS_PER_YEAR: f64 = 365.0;

/// Percentage-point scaling for vega and rho.
const PERCENT: f64 = 100.0;

/// The five Black-Scholes sensitivities.
///
/// # Examples
/// ```
/// use pricer_models::analytical::greeks::all_greeks;
/// use pricer_models::instruments::OptionType;
///
/// let g = all_greeks(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
/// assert!(g.delta > 0.5 && g.delta < 1.0);
/// assert!(g.gamma > 0.0 && g.vega > 0.0);
/// assert!(g.theta < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ per 1% volatility move
    pub vega: f64,
    /// ∂V/∂t per calendar day
    pub theta: f64,
    /// ∂V/∂r per 1% rate move
    pub rho: f64,
}

/// Delta: N(d₁) for calls, N(d₁) - 1 for puts.
#[inline]
pub fn delta(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> f64 {
    if expiry <= 0.0 {
        return option_type.expiry_delta(spot, strike);
    }

    let n_d1 = norm_cdf(d1(spot, strike, expiry, rate, volatility));
    match option_type {
        OptionType::Call => n_d1,
        OptionType::Put => n_d1 - 1.0,
    }
}

/// Gamma: φ(d₁) / (S·σ·√T), identical for calls and puts.
#[inline]
pub fn gamma(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64) -> f64 {
    if expiry <= 0.0 {
        return 0.0;
    }

    let d1 = d1(spot, strike, expiry, rate, volatility);
    norm_pdf(d1) / (spot * volatility * expiry.sqrt())
}

/// Vega: S·√T·φ(d₁) / 100, identical for calls and puts.
#[inline]
pub fn vega(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64) -> f64 {
    if expiry <= 0.0 {
        return 0.0;
    }

    let d1 = d1(spot, strike, expiry, rate, volatility);
    spot * expiry.sqrt() * norm_pdf(d1) / PERCENT
}

/// Theta per calendar day.
///
/// - Call: [-(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂)] / 365
/// - Put: [-(S·φ(d₁)·σ)/(2√T) + r·K·e^(-rT)·N(-d₂)] / 365
#[inline]
pub fn theta(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> f64 {
    if expiry <= 0.0 {
        return 0.0;
    }

    let d1 = d1(spot, strike, expiry, rate, volatility);
    let d2 = d1 - volatility * expiry.sqrt();
    theta_from_terms(spot, strike, expiry, rate, volatility, d1, d2, option_type)
}

/// Rho per 1% rate move.
///
/// - Call: K·T·e^(-rT)·N(d₂) / 100
/// - Put: -K·T·e^(-rT)·N(-d₂) / 100
#[inline]
pub fn rho(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> f64 {
    if expiry <= 0.0 {
        return 0.0;
    }

    let d2 = d2(spot, strike, expiry, rate, volatility);
    rho_from_d2(strike, expiry, rate, d2, option_type)
}

/// All five Greeks from a single d₁/d₂ evaluation.
///
/// Prefer this over five separate calls.
pub fn all_greeks(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> Greeks {
    if expiry <= 0.0 {
        return Greeks {
            delta: option_type.expiry_delta(spot, strike),
            ..Greeks::default()
        };
    }

    let sqrt_t = expiry.sqrt();
    let d1 = d1(spot, strike, expiry, rate, volatility);
    let d2 = d1 - volatility * sqrt_t;
    let pdf_d1 = norm_pdf(d1);
    let n_d1 = norm_cdf(d1);

    let delta = match option_type {
        OptionType::Call => n_d1,
        OptionType::Put => n_d1 - 1.0,
    };

    Greeks {
        delta,
        gamma: pdf_d1 / (spot * volatility * sqrt_t),
        vega: spot * sqrt_t * pdf_d1 / PERCENT,
        theta: theta_from_terms(spot, strike, expiry, rate, volatility, d1, d2, option_type),
        rho: rho_from_d2(strike, expiry, rate, d2, option_type),
    }
}

#[allow(clippy::too_many_arguments)]
#[inline]
fn theta_from_terms(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    d1: f64,
    d2: f64,
    option_type: OptionType,
) -> f64 {
    let discount = (-rate * expiry).exp();
    // Common term: -(S·φ(d₁)·σ)/(2√T)
    let decay = -(spot * norm_pdf(d1) * volatility) / (2.0 * expiry.sqrt());

    let annual = match option_type {
        OptionType::Call => decay - rate * strike * discount * norm_cdf(d2),
        OptionType::Put => decay + rate * strike * discount * norm_cdf(-d2),
    };
    annual / DAYS_PER_YEAR
}

#[inline]
fn rho_from_d2(strike: f64, expiry: f64, rate: f64, d2: f64, option_type: OptionType) -> f64 {
    let discounted = strike * expiry * (-rate * expiry).exp();
    match option_type {
        OptionType::Call => discounted * norm_cdf(d2) / PERCENT,
        OptionType::Put => -discounted * norm_cdf(-d2) / PERCENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::black_scholes::price;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ==========================================================
    // Reference values (S=100, K=100, T=1, r=0.05, σ=0.2)
    // ==========================================================

    #[test]
    fn test_atm_call_reference_values() {
        let g = all_greeks(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
        assert_relative_eq!(g.delta, 0.636_830_651, epsilon = 1e-6);
        assert_relative_eq!(g.gamma, 0.018_762_017, epsilon = 1e-6);
        assert_relative_eq!(g.vega, 0.375_240_347, epsilon = 1e-6);
        assert_relative_eq!(g.theta, -6.414_027_546 / 365.0, epsilon = 1e-6);
        assert_relative_eq!(g.rho, 0.532_324_815, epsilon = 1e-6);
    }

    #[test]
    fn test_atm_put_reference_values() {
        let g = all_greeks(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put);
        assert_relative_eq!(g.delta, -0.363_169_349, epsilon = 1e-6);
        assert_relative_eq!(g.theta, -1.657_880_423 / 365.0, epsilon = 1e-6);
        assert_relative_eq!(g.rho, -0.418_904_609, epsilon = 1e-6);
    }

    #[test]
    fn test_individual_functions_match_bundle() {
        for option_type in [OptionType::Call, OptionType::Put] {
            let (s, k, t, r, v) = (95.0, 105.0, 0.4, 0.02, 0.3);
            let g = all_greeks(s, k, t, r, v, option_type);
            assert_relative_eq!(g.delta, delta(s, k, t, r, v, option_type), epsilon = 1e-15);
            assert_relative_eq!(g.gamma, gamma(s, k, t, r, v), epsilon = 1e-15);
            assert_relative_eq!(g.vega, vega(s, k, t, r, v), epsilon = 1e-15);
            assert_relative_eq!(g.theta, theta(s, k, t, r, v, option_type), epsilon = 1e-15);
            assert_relative_eq!(g.rho, rho(s, k, t, r, v, option_type), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let call = all_greeks(110.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call);
        assert_eq!(call.delta, 1.0);
        assert_eq!(call.gamma, 0.0);
        assert_eq!(call.vega, 0.0);
        assert_eq!(call.theta, 0.0);
        assert_eq!(call.rho, 0.0);

        let put = all_greeks(90.0, 100.0, -0.5, 0.05, 0.2, OptionType::Put);
        assert_eq!(put.delta, -1.0);
        assert_eq!(delta(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Put), 0.0);
        assert_eq!(gamma(100.0, 100.0, 0.0, 0.05, 0.2), 0.0);
        assert_eq!(theta(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call), 0.0);
        assert_eq!(rho(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call), 0.0);
    }

    #[test]
    fn test_atm_call_theta_negative() {
        assert!(theta(100.0, 100.0, 0.5, 0.05, 0.25, OptionType::Call) < 0.0);
    }

    #[test]
    fn test_delta_matches_finite_difference() {
        let (k, t, r, v) = (100.0, 1.0, 0.05, 0.2);
        let h = 1e-4;
        let fd = (price(100.0 + h, k, t, r, v, OptionType::Call)
            - price(100.0 - h, k, t, r, v, OptionType::Call))
            / (2.0 * h);
        assert_relative_eq!(delta(100.0, k, t, r, v, OptionType::Call), fd, epsilon = 1e-6);
    }

    #[test]
    fn test_vega_matches_finite_difference() {
        let (s, k, t, r) = (100.0, 110.0, 0.5, 0.03);
        let h = 1e-5;
        let fd = (price(s, k, t, r, 0.25 + h, OptionType::Put)
            - price(s, k, t, r, 0.25 - h, OptionType::Put))
            / (2.0 * h);
        assert_relative_eq!(vega(s, k, t, r, 0.25) * 100.0, fd, epsilon = 1e-5);
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_delta_bounds_and_parity(
            s in 10.0_f64..500.0,
            k in 10.0_f64..500.0,
            t in 0.01_f64..5.0,
            r in -0.05_f64..0.15,
            v in 0.05_f64..1.0,
        ) {
            let call = delta(s, k, t, r, v, OptionType::Call);
            let put = delta(s, k, t, r, v, OptionType::Put);
            prop_assert!((0.0..=1.0).contains(&call));
            prop_assert!((-1.0..=0.0).contains(&put));
            prop_assert!((call - put - 1.0).abs() < 1e-3);
        }

        #[test]
        fn test_gamma_vega_positive(
            s in 80.0_f64..120.0,
            k in 80.0_f64..120.0,
            t in 0.25_f64..3.0,
            r in 0.0_f64..0.1,
            v in 0.15_f64..0.6,
        ) {
            prop_assert!(gamma(s, k, t, r, v) > 0.0);
            prop_assert!(vega(s, k, t, r, v) > 0.0);
        }
    }
}

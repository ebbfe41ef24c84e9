//! Volatility smile analytics.
//!
//! Turns a strip of observed option quotes for one expiry into implied
//! volatilities by strike, summarises the shape of the resulting smile, and
//! generates synthetic quotes from a quadratic smile for validation.
//!
//! Moneyness is K/S throughout: below 1 is an in-the-money call (out-of-the-money
//! put), above 1 an out-of-the-money call.

use crate::analytical::black_scholes;
use crate::instruments::OptionType;

use super::implied::{implied_volatility, ImpliedVolConfig};

/// Moneyness below which a point belongs to the low-strike (OTM put) wing.
const PUT_WING_MONEYNESS: f64 = 0.90;

/// Moneyness above which a point belongs to the high-strike (OTM call) wing.
const CALL_WING_MONEYNESS: f64 = 1.10;

/// One observed option quote.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmileQuote {
    /// Strike K
    pub strike: f64,
    /// Observed premium
    pub price: f64,
    /// Call or put
    pub option_type: OptionType,
}

/// A quote with its implied volatility.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmilePoint {
    /// Strike K
    pub strike: f64,
    /// K/S
    pub moneyness: f64,
    /// Observed premium
    pub price: f64,
    /// Call or put
    pub option_type: OptionType,
    /// Implied volatility, NaN when the inversion failed
    pub implied_vol: f64,
}

/// Shape summary of a smile.
///
/// Wing statistics are `None` when no quote falls in the wing, or when every
/// quote there failed to invert.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmileMetrics {
    /// Implied vol of the point closest to K/S = 1 (NaN if it failed to invert)
    pub atm_vol: f64,
    /// Mean implied vol over K/S < 0.90
    pub otm_put_vol: Option<f64>,
    /// Mean implied vol over K/S > 1.10
    pub otm_call_vol: Option<f64>,
    /// otm_put_vol - atm_vol
    pub skew: Option<f64>,
    /// (otm_put_vol + otm_call_vol) / 2 - atm_vol
    pub smile_curvature: Option<f64>,
    /// max - min over the solved implied vols
    pub vol_range: f64,
}

/// Parameters of a quadratic smile in moneyness.
///
/// σ(K) = max(base_vol + skew·(K/S - 1) + convexity·(K/S - 1)², vol_floor)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticSmile {
    /// At-the-money volatility
    pub base_vol: f64,
    /// Linear slope in moneyness (negative for an equity smirk)
    pub skew: f64,
    /// Quadratic coefficient in moneyness
    pub convexity: f64,
    /// Lower clamp on the generated volatility
    pub vol_floor: f64,
}

impl Default for QuadraticSmile {
    fn default() -> Self {
        Self {
            base_vol: 0.20,
            skew: -0.10,
            convexity: 0.05,
            vol_floor: 0.05,
        }
    }
}

impl QuadraticSmile {
    /// Volatility at the given moneyness K/S.
    pub fn vol_at(&self, moneyness: f64) -> f64 {
        let x = moneyness - 1.0;
        (self.base_vol + self.skew * x + self.convexity * x * x).max(self.vol_floor)
    }
}

/// A synthetic quote together with the volatility used to price it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyntheticQuote {
    /// Generated quote
    pub quote: SmileQuote,
    /// Volatility the quote was priced with
    pub true_vol: f64,
}

/// Moneyness K/S.
#[inline]
pub fn moneyness(spot: f64, strike: f64) -> f64 {
    strike / spot
}

/// Inverts every quote and returns the points sorted by strike.
///
/// Quotes that cannot be inverted are kept with a NaN implied volatility so
/// the caller can flag them.
///
/// # Examples
/// ```
/// use pricer_models::volatility::smile::{analyze_smile, synthetic_quotes, QuadraticSmile};
/// use pricer_models::volatility::ImpliedVolConfig;
///
/// let quotes: Vec<_> = synthetic_quotes(100.0, 0.5, 0.05, &QuadraticSmile::default(), None)
///     .into_iter()
///     .map(|q| q.quote)
///     .collect();
/// let points = analyze_smile(&quotes, 100.0, 0.5, 0.05, &ImpliedVolConfig::default());
///
/// assert_eq!(points.len(), 9);
/// assert!(points.iter().all(|p| p.implied_vol.is_finite()));
/// ```
pub fn analyze_smile(
    quotes: &[SmileQuote],
    spot: f64,
    expiry: f64,
    rate: f64,
    config: &ImpliedVolConfig,
) -> Vec<SmilePoint> {
    let mut points: Vec<SmilePoint> = quotes
        .iter()
        .map(|quote| {
            let implied_vol = implied_volatility(
                quote.price,
                spot,
                quote.strike,
                expiry,
                rate,
                quote.option_type,
                config,
            )
            .value_or_nan();

            SmilePoint {
                strike: quote.strike,
                moneyness: moneyness(spot, quote.strike),
                price: quote.price,
                option_type: quote.option_type,
                implied_vol,
            }
        })
        .collect();

    points.sort_by(|a, b| a.strike.total_cmp(&b.strike));
    points
}

/// Summarises a smile. Returns `None` for an empty slice.
pub fn smile_metrics(points: &[SmilePoint]) -> Option<SmileMetrics> {
    let atm = points.iter().min_by(|a, b| {
        (a.moneyness - 1.0)
            .abs()
            .total_cmp(&(b.moneyness - 1.0).abs())
    })?;

    let otm_put_vol = mean_vol(points.iter().filter(|p| p.moneyness < PUT_WING_MONEYNESS));
    let otm_call_vol = mean_vol(points.iter().filter(|p| p.moneyness > CALL_WING_MONEYNESS));

    let atm_vol = atm.implied_vol;
    let skew = otm_put_vol.map(|put| put - atm_vol);
    let smile_curvature = match (otm_put_vol, otm_call_vol) {
        (Some(put), Some(call)) => Some((put + call) / 2.0 - atm_vol),
        _ => None,
    };

    let (lo, hi) = points
        .iter()
        .map(|p| p.implied_vol)
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let vol_range = if lo <= hi { hi - lo } else { 0.0 };

    Some(SmileMetrics {
        atm_vol,
        otm_put_vol,
        otm_call_vol,
        skew,
        smile_curvature,
        vol_range,
    })
}

fn mean_vol<'a>(points: impl Iterator<Item = &'a SmilePoint>) -> Option<f64> {
    let (sum, count) = points
        .map(|p| p.implied_vol)
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Prices a strip of quotes off a quadratic smile.
///
/// Strikes default to 80% to 120% of spot in 5% steps. Strikes at or above
/// spot are quoted as calls, the rest as puts, so every quote is
/// out-of-the-money or at-the-money.
pub fn synthetic_quotes(
    spot: f64,
    expiry: f64,
    rate: f64,
    smile: &QuadraticSmile,
    strikes: Option<&[f64]>,
) -> Vec<SyntheticQuote> {
    let default_strikes: Vec<f64>;
    let strikes = match strikes {
        Some(strikes) => strikes,
        None => {
            default_strikes = (0..9).map(|i| spot * (0.80 + i as f64 * 0.05)).collect();
            &default_strikes
        }
    };

    strikes
        .iter()
        .map(|&strike| {
            let true_vol = smile.vol_at(moneyness(spot, strike));
            let option_type = if strike >= spot {
                OptionType::Call
            } else {
                OptionType::Put
            };
            let price = black_scholes::price(spot, strike, expiry, rate, true_vol, option_type);

            SyntheticQuote {
                quote: SmileQuote {
                    strike,
                    price,
                    option_type,
                },
                true_vol,
            }
        })
        .collect()
}

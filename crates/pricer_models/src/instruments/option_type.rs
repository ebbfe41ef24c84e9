//! Option type discriminant and its expiry behaviour.

use std::fmt;
use std::str::FromStr;

use crate::analytical::AnalyticalError;

/// Type of European option.
///
/// The discriminant is a closed enum, so the only way to obtain an invalid
/// kind is by parsing a string, which fails with
/// [`AnalyticalError::InvalidOptionType`].
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let call: OptionType = "Call".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.intrinsic(110.0, 100.0), 10.0);
///
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OptionType {
    /// Call option: max(S - K, 0) at expiry
    Call,
    /// Put option: max(K - S, 0) at expiry
    Put,
}

impl OptionType {
    /// Returns `true` for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Payoff at expiry for the given terminal spot.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Limiting delta at expiry: the moneyness indicator.
    ///
    /// Call: 1 if S > K else 0. Put: -1 if S < K else 0.
    /// At-the-money both legs report 0.
    #[inline]
    pub fn expiry_delta(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call if spot > strike => 1.0,
            OptionType::Put if spot < strike => -1.0,
            _ => 0.0,
        }
    }

    /// Lower-case name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = AnalyticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(AnalyticalError::InvalidOptionType {
                value: s.to_string(),
            }),
        }
    }
}

//! Geometric Brownian Motion (GBM) dynamics.
//!
//! GBM is the asset price dynamics underlying Black-Scholes:
//! ```text
//! dS = r * S * dt + sigma * S * dW
//! ```
//!
//! ## Log-space formulation
//!
//! Paths use the exact solution rather than an Euler step, so there is no
//! discretisation bias in the marginal distribution:
//! ```text
//! S(t+dt) = S(t) * exp((r - 0.5*sigma^2)*dt + sigma*sqrt(dt)*Z)
//! ```

use crate::analytical::AnalyticalError;

/// GBM model parameters.
///
/// # Examples
/// ```
/// use pricer_models::models::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2).unwrap();
/// let step = params.step(1.0 / 252.0);
///
/// // A zero shock applies the drift only
/// let next = step.apply(100.0, 0.0);
/// assert!((next - 100.0 * ((0.05 - 0.02) / 252.0_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Initial spot price
    pub spot: f64,
    /// Risk-free rate (annualised)
    pub rate: f64,
    /// Volatility (annualised)
    pub volatility: f64,
}

impl GbmParams {
    /// Create new GBM parameters with validation.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or non-finite
    /// - `AnalyticalError::InvalidVolatility` if volatility < 0 or non-finite
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if !(volatility >= 0.0 && volatility.is_finite()) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Precomputes the log-space coefficients for a fixed step size.
    pub fn step(&self, dt: f64) -> GbmStep {
        GbmStep {
            drift: (self.rate - 0.5 * self.volatility * self.volatility) * dt,
            diffusion: self.volatility * dt.sqrt(),
        }
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
        }
    }
}

/// Exact GBM transition over one fixed time step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmStep {
    /// (r - σ²/2)·dt
    pub drift: f64,
    /// σ·√dt
    pub diffusion: f64,
}

impl GbmStep {
    /// Advances `spot` by one step given a standard normal draw `z`.
    #[inline]
    pub fn apply(&self, spot: f64, z: f64) -> f64 {
        spot * (self.drift + self.diffusion * z).exp()
    }
}

//! Geometric Brownian Motion price paths.
//!
//! Paths use the exact log-normal recurrence
//!
//! ```text
//! S_i = S_{i-1} · exp((r − σ²/2)·dt + σ·√dt·Z_i),   dt = T / n
//! ```
//!
//! so there is no discretisation bias in the marginal distributions.

use crate::error::HedgingError;
use crate::hedging::MAX_STEPS;
use crate::rng::{NormalSource, PricerRng};
use pricer_models::models::GbmParams;

/// A simulated price path on an equally spaced time grid.
///
/// `prices[0]` is the initial spot; the path has `n_steps + 1` points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePath {
    prices: Vec<f64>,
    expiry: f64,
}

impl PricePath {
    /// Prices at each grid point.
    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Number of time steps (one less than the number of prices).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.prices.len() - 1
    }

    /// Simulation horizon in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Time step `T / n`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.expiry / self.n_steps() as f64
    }

    /// Time of grid point `i`. The last point is exactly the horizon.
    #[inline]
    pub fn time(&self, i: usize) -> f64 {
        self.expiry * i as f64 / self.n_steps() as f64
    }

    /// Initial price.
    #[inline]
    pub fn initial(&self) -> f64 {
        self.prices[0]
    }

    /// Terminal price.
    #[inline]
    pub fn terminal(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }

    /// Consumes the path and returns the prices.
    pub fn into_prices(self) -> Vec<f64> {
        self.prices
    }
}

/// Simulates a GBM path drawing shocks from `source`.
///
/// # Errors
/// - `HedgingError::InvalidSteps` if `n_steps` is 0 or above `MAX_STEPS`
/// - `HedgingError::InvalidParameters` if `expiry` is negative or non-finite
///
/// # Examples
/// ```
/// use pricer_hedging::paths::simulate_price_path;
/// use pricer_hedging::rng::PricerRng;
/// use pricer_models::models::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2).unwrap();
/// let mut rng = PricerRng::from_seed(42);
/// let path = simulate_price_path(&params, 1.0, 252, &mut rng).unwrap();
///
/// assert_eq!(path.prices().len(), 253);
/// assert_eq!(path.initial(), 100.0);
/// ```
pub fn simulate_price_path<N: NormalSource>(
    params: &GbmParams,
    expiry: f64,
    n_steps: usize,
    source: &mut N,
) -> Result<PricePath, HedgingError> {
    validate_grid(expiry, n_steps)?;

    let step = params.step(expiry / n_steps as f64);
    let mut prices = Vec::with_capacity(n_steps + 1);
    prices.push(params.spot);

    let mut spot = params.spot;
    for _ in 0..n_steps {
        spot = step.apply(spot, source.next_normal());
        prices.push(spot);
    }

    Ok(PricePath { prices, expiry })
}

/// Simulates a GBM path from raw parameters and an optional seed.
///
/// Without a seed the path is drawn from an entropy-seeded generator and is
/// not reproducible.
///
/// # Errors
/// As [`simulate_price_path`], plus `HedgingError::InvalidParameters` for an
/// invalid spot or volatility.
pub fn simulate_stock_path(
    spot: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
    n_steps: usize,
    seed: Option<u64>,
) -> Result<PricePath, HedgingError> {
    let params = GbmParams::new(spot, rate, volatility)?;
    let mut rng = PricerRng::from_optional_seed(seed);
    simulate_price_path(&params, expiry, n_steps, &mut rng)
}

pub(crate) fn validate_grid(expiry: f64, n_steps: usize) -> Result<(), HedgingError> {
    if n_steps == 0 || n_steps > MAX_STEPS {
        return Err(HedgingError::InvalidSteps(n_steps));
    }
    if !(expiry >= 0.0 && expiry.is_finite()) {
        return Err(pricer_models::analytical::AnalyticalError::InvalidExpiry { expiry }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedNormals;
    use approx::assert_relative_eq;

    fn params() -> GbmParams {
        GbmParams::new(100.0, 0.05, 0.2).unwrap()
    }

    #[test]
    fn test_path_shape() {
        let mut rng = PricerRng::from_seed(1);
        let path = simulate_price_path(&params(), 0.5, 10, &mut rng).unwrap();

        assert_eq!(path.prices().len(), 11);
        assert_eq!(path.n_steps(), 10);
        assert_eq!(path.initial(), 100.0);
        assert_relative_eq!(path.dt(), 0.05, epsilon = 1e-15);
        assert_eq!(path.time(10), 0.5);
        assert!(path.prices().iter().all(|&s| s > 0.0 && s.is_finite()));
    }

    #[test]
    fn test_zero_shocks_follow_drift() {
        let mut zeros = ScriptedNormals::zeros();
        let path = simulate_price_path(&params(), 1.0, 4, &mut zeros).unwrap();

        let expected = 100.0 * ((0.05 - 0.5 * 0.04) * 1.0_f64).exp();
        assert_relative_eq!(path.terminal(), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_single_step_matches_recurrence() {
        let mut shocks = ScriptedNormals::new(vec![1.5]);
        let path = simulate_price_path(&params(), 0.25, 1, &mut shocks).unwrap();

        let dt = 0.25_f64;
        let expected = 100.0 * ((0.05 - 0.02) * dt + 0.2 * dt.sqrt() * 1.5).exp();
        assert_relative_eq!(path.terminal(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_seeded_paths_are_reproducible() {
        let a = simulate_stock_path(100.0, 0.05, 0.2, 1.0, 50, Some(42)).unwrap();
        let b = simulate_stock_path(100.0, 0.05, 0.2, 1.0, 50, Some(42)).unwrap();
        let c = simulate_stock_path(100.0, 0.05, 0.2, 1.0, 50, Some(43)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_zero_expiry_is_flat() {
        let path = simulate_stock_path(100.0, 0.05, 0.2, 0.0, 5, Some(1)).unwrap();
        assert!(path.prices().iter().all(|&s| s == 100.0));
    }

    #[test]
    fn test_invalid_grid() {
        match simulate_stock_path(100.0, 0.05, 0.2, 1.0, 0, Some(1)) {
            Err(HedgingError::InvalidSteps(0)) => {}
            other => panic!("Expected InvalidSteps error, got {:?}", other),
        }
        assert!(simulate_stock_path(100.0, 0.05, 0.2, -1.0, 10, Some(1)).is_err());
        assert!(simulate_stock_path(-100.0, 0.05, 0.2, 1.0, 10, Some(1)).is_err());
    }
}

//! Discrete delta hedging of a short option position.
//!
//! The simulator sells one option at its Black-Scholes-Merton price, buys
//! delta shares and rebalances to the option's current delta at every step
//! of a simulated GBM path. Cash accrues at the risk-free rate and moves
//! only through share trades.
//!
//! # State transitions
//!
//! At step 0 the premium is received, `Δ₀` shares are bought and
//! `cash₀ = premium − Δ₀·S₀`. At step `i` with remaining maturity
//! `τ = T − tᵢ`:
//!
//! - `τ > ε`: option value and delta come from the closed-form engine
//! - `τ ≤ ε`: option value is the intrinsic payoff and delta the expiry
//!   indicator
//!
//! then `cashᵢ = cashᵢ₋₁·e^{r·dt} − (Δᵢ − Δᵢ₋₁)·Sᵢ` and
//! `portfolioᵢ = cashᵢ + Δᵢ·Sᵢ − optionᵢ`.

use crate::error::HedgingError;
use crate::paths::{simulate_price_path, validate_grid, PricePath};
use crate::rng::{NormalSource, PricerRng};
use pricer_models::analytical::{black_scholes, greeks};
use pricer_models::instruments::{MarketParameters, OptionSpec, OptionType};
use pricer_models::models::GbmParams;

/// Maximum number of rebalancing steps per simulation.
///
/// Bounds the memory of one run: a simulation stores `n_steps + 1` path
/// points and hedge states.
pub const MAX_STEPS: usize = 100_000;

/// Default number of rebalancing steps (daily over one year).
pub const DEFAULT_STEPS: usize = 252;

/// Remaining maturity below which the option is treated as expired.
pub const DEFAULT_EXPIRY_EPSILON: f64 = 1e-4;

/// Hedging run configuration.
///
/// # Examples
/// ```
/// use pricer_hedging::HedgeConfig;
///
/// let config = HedgeConfig::default().with_steps(52);
/// assert_eq!(config.n_steps, 52);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HedgeConfig {
    /// Number of rebalancing steps.
    pub n_steps: usize,
    /// Remaining maturity (years) treated as expiry.
    pub expiry_epsilon: f64,
}

impl Default for HedgeConfig {
    fn default() -> Self {
        Self {
            n_steps: DEFAULT_STEPS,
            expiry_epsilon: DEFAULT_EXPIRY_EPSILON,
        }
    }
}

impl HedgeConfig {
    /// Returns a copy with the given step count.
    pub fn with_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = n_steps;
        self
    }

    /// Returns a copy with the given expiry epsilon.
    pub fn with_expiry_epsilon(mut self, expiry_epsilon: f64) -> Self {
        self.expiry_epsilon = expiry_epsilon;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - `HedgingError::InvalidSteps` if `n_steps` is outside `[1, MAX_STEPS]`
    /// - `HedgingError::InvalidExpiryEpsilon` if the epsilon is negative or
    ///   non-finite
    pub fn validate(&self) -> Result<(), HedgingError> {
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(HedgingError::InvalidSteps(self.n_steps));
        }
        if !(self.expiry_epsilon >= 0.0 && self.expiry_epsilon.is_finite()) {
            return Err(HedgingError::InvalidExpiryEpsilon(self.expiry_epsilon));
        }
        Ok(())
    }
}

/// Portfolio snapshot after rebalancing at one grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HedgeState {
    /// Time since inception in years.
    pub time: f64,
    /// Underlying price.
    pub stock_price: f64,
    /// Option delta at this point.
    pub delta: f64,
    /// Shares held after rebalancing.
    pub shares_held: f64,
    /// Value of the short option.
    pub option_value: f64,
    /// Cash account.
    pub cash: f64,
    /// `cash + shares_held·stock_price − option_value`.
    pub portfolio_value: f64,
}

impl HedgeState {
    fn new(time: f64, stock_price: f64, delta: f64, option_value: f64, cash: f64) -> Self {
        Self {
            time,
            stock_price,
            delta,
            shares_held: delta,
            option_value,
            cash,
            portfolio_value: cash + delta * stock_price - option_value,
        }
    }
}

/// Outcome of one hedging run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HedgeSummary {
    /// Premium received at inception.
    pub option_premium: f64,
    /// Terminal underlying price.
    pub final_stock_price: f64,
    /// Payoff owed at expiry.
    pub option_payoff: f64,
    /// Unhedged P&L, `premium − payoff`.
    pub theoretical_pnl: f64,
    /// Terminal portfolio value.
    pub hedge_portfolio_value: f64,
    /// Terminal portfolio value; zero under continuous rebalancing.
    pub hedging_error: f64,
    /// `|hedging_error| / premium × 100`, or 0 when the premium is 0.
    pub error_percent: f64,
}

/// A complete hedging run: path, per-step states and summary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HedgeSimulation {
    /// Simulated underlying path.
    pub path: PricePath,
    /// One state per grid point, `n_steps + 1` in total.
    pub states: Vec<HedgeState>,
    /// Run summary.
    pub summary: HedgeSummary,
}

/// Simulates delta hedging of a short option with an injected shock source.
///
/// # Errors
/// - `HedgingError::InvalidSteps` / `HedgingError::InvalidExpiryEpsilon` for
///   an invalid configuration
///
/// # Examples
/// ```
/// use pricer_hedging::rng::PricerRng;
/// use pricer_hedging::{simulate_hedge_with, HedgeConfig};
/// use pricer_models::instruments::{MarketParameters, OptionSpec, OptionType};
///
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let spec = OptionSpec::new(params, OptionType::Call);
/// let mut rng = PricerRng::from_seed(42);
///
/// let run = simulate_hedge_with(&spec, &HedgeConfig::default(), &mut rng).unwrap();
/// assert_eq!(run.states.len(), 253);
/// assert!(run.states[0].portfolio_value.abs() < 1e-10);
/// ```
pub fn simulate_hedge_with<N: NormalSource>(
    spec: &OptionSpec,
    config: &HedgeConfig,
    source: &mut N,
) -> Result<HedgeSimulation, HedgingError> {
    config.validate()?;

    let p = spec.params();
    let (strike, expiry, rate, volatility) = (p.strike(), p.expiry(), p.rate(), p.volatility());
    let option_type = spec.option_type();

    let gbm = GbmParams::new(p.spot(), rate, volatility)?;
    let path = simulate_price_path(&gbm, expiry, config.n_steps, source)?;
    let dt = path.dt();
    let accrual = (rate * dt).exp();

    let premium = spec.price();
    let mut states = Vec::with_capacity(config.n_steps + 1);
    let delta_0 = greeks::delta(p.spot(), strike, expiry, rate, volatility, option_type);
    let mut previous = HedgeState::new(0.0, p.spot(), delta_0, premium, premium - delta_0 * p.spot());
    states.push(previous);

    for (i, &spot) in path.prices().iter().enumerate().skip(1) {
        let time = path.time(i);
        let remaining = expiry - time;

        let (option_value, delta) = if remaining > config.expiry_epsilon {
            (
                black_scholes::price(spot, strike, remaining, rate, volatility, option_type),
                greeks::delta(spot, strike, remaining, rate, volatility, option_type),
            )
        } else {
            (
                option_type.intrinsic(spot, strike),
                option_type.expiry_delta(spot, strike),
            )
        };

        let traded = delta - previous.shares_held;
        let cash = previous.cash * accrual - traded * spot;

        previous = HedgeState::new(time, spot, delta, option_value, cash);
        states.push(previous);
    }

    let final_stock_price = path.terminal();
    let option_payoff = option_type.intrinsic(final_stock_price, strike);
    let hedging_error = previous.portfolio_value;
    let error_percent = if premium > 0.0 {
        hedging_error.abs() / premium * 100.0
    } else {
        0.0
    };

    let summary = HedgeSummary {
        option_premium: premium,
        final_stock_price,
        option_payoff,
        theoretical_pnl: premium - option_payoff,
        hedge_portfolio_value: hedging_error,
        hedging_error,
        error_percent,
    };

    tracing::debug!(
        option_type = %option_type,
        n_steps = config.n_steps,
        premium,
        hedging_error,
        "hedge simulation finished"
    );

    Ok(HedgeSimulation {
        path,
        states,
        summary,
    })
}

/// Simulates delta hedging of a short option from raw parameters.
///
/// Uses the default expiry epsilon. Without a seed the path is drawn from an
/// entropy-seeded generator and is not reproducible.
///
/// # Errors
/// - `HedgingError::InvalidParameters` for invalid market parameters
/// - `HedgingError::InvalidSteps` if `n_steps` is outside `[1, MAX_STEPS]`
///
/// # Examples
/// ```
/// use pricer_hedging::simulate_hedge;
/// use pricer_models::instruments::OptionType;
///
/// let a = simulate_hedge(100.0, 100.0, 1.0, 0.05, 0.2, 252, OptionType::Call, Some(42)).unwrap();
/// let b = simulate_hedge(100.0, 100.0, 1.0, 0.05, 0.2, 252, OptionType::Call, Some(42)).unwrap();
/// assert_eq!(a.summary, b.summary);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn simulate_hedge(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    n_steps: usize,
    option_type: OptionType,
    seed: Option<u64>,
) -> Result<HedgeSimulation, HedgingError> {
    validate_grid(expiry, n_steps)?;
    let params = MarketParameters::new(spot, strike, expiry, rate, volatility)?;
    let spec = OptionSpec::new(params, option_type);
    let config = HedgeConfig::default().with_steps(n_steps);
    let mut rng = PricerRng::from_optional_seed(seed);
    simulate_hedge_with(&spec, &config, &mut rng)
}

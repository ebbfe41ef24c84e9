//! Implied volatility inversion.
//!
//! Inverts a market price into the Black-Scholes volatility through an
//! explicit two-stage strategy chain:
//!
//! 1. [`implied_volatility_newton`]: Newton-Raphson on σ using vega as the
//!    derivative. Aborts on a near-zero vega; clamps non-positive iterates.
//! 2. [`implied_volatility_bisection`]: bisection over `[vol_low, vol_high]`,
//!    relying on the price being increasing in σ.
//!
//! [`implied_volatility`] composes the two and returns a tagged
//! [`ImpliedVolOutcome`]. [`calculate_implied_vol`] collapses that outcome to
//! a plain `f64`, using NaN as the "no solution" sentinel.
//!
//! Non-convergence is never an error here: some (price, S, K, T, r)
//! combinations admit no volatility inside the search bounds, for instance
//! prices that violate static no-arbitrage bounds.

use pricer_core::math::solvers::{
    BisectionSolver, NewtonRaphsonSolver, RootSearch, SolverConfig,
};
use tracing::{debug, warn};

use crate::analytical::{black_scholes, greeks};
use crate::instruments::OptionType;

/// Configuration of the implied-volatility strategy chain.
///
/// # Examples
/// ```
/// use pricer_models::volatility::ImpliedVolConfig;
///
/// let config = ImpliedVolConfig::default();
/// assert_eq!(config.initial_vol, 0.20);
/// assert_eq!(config.tolerance, 1e-6);
/// assert_eq!(config.max_iterations, 100);
/// assert_eq!((config.vol_low, config.vol_high), (0.001, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolConfig {
    /// Newton starting point σ₀.
    pub initial_vol: f64,
    /// Absolute price tolerance for both stages.
    pub tolerance: f64,
    /// Iteration cap for each stage.
    pub max_iterations: usize,
    /// Newton aborts when |vega| (absolute units) falls below this.
    pub vega_floor: f64,
    /// Replacement for a non-positive Newton iterate.
    pub vol_floor: f64,
    /// Lower end of the bisection interval.
    pub vol_low: f64,
    /// Upper end of the bisection interval.
    pub vol_high: f64,
}

impl Default for ImpliedVolConfig {
    fn default() -> Self {
        Self {
            initial_vol: 0.20,
            tolerance: 1e-6,
            max_iterations: 100,
            vega_floor: 1e-10,
            vol_floor: 0.01,
            vol_low: 0.001,
            vol_high: 3.0,
        }
    }
}

impl ImpliedVolConfig {
    fn solver_config(&self) -> SolverConfig<f64> {
        SolverConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

/// Which stage of the chain produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveMethod {
    /// Newton-Raphson stage
    NewtonRaphson,
    /// Bisection stage
    Bisection,
}

/// Result of one inversion attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverResult {
    /// Final σ (the solution when `converged`).
    pub implied_vol: f64,
    /// Whether |price(σ) - market| fell below the tolerance.
    pub converged: bool,
    /// Price evaluations performed, or the cap when it was hit.
    pub iterations: usize,
    /// |price(σ) - market| at the final σ.
    pub final_error: f64,
    /// Stage that produced this result.
    pub method: SolveMethod,
}

impl SolverResult {
    fn from_search(search: RootSearch<f64>, method: SolveMethod) -> Self {
        Self {
            implied_vol: search.root,
            converged: search.converged,
            iterations: search.iterations,
            final_error: search.residual,
            method,
        }
    }
}

/// Tagged outcome of the Newton-Raphson then bisection chain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpliedVolOutcome {
    /// One of the stages converged.
    Solved(SolverResult),
    /// Neither stage converged; both attempts are kept for diagnostics.
    Unsolved {
        /// Newton-Raphson attempt
        newton: SolverResult,
        /// Bisection attempt
        bisection: SolverResult,
    },
}

impl ImpliedVolOutcome {
    /// The solved volatility, if any.
    pub fn volatility(&self) -> Option<f64> {
        match self {
            ImpliedVolOutcome::Solved(result) => Some(result.implied_vol),
            ImpliedVolOutcome::Unsolved { .. } => None,
        }
    }

    /// The solved volatility, or NaN.
    pub fn value_or_nan(&self) -> f64 {
        self.volatility().unwrap_or(f64::NAN)
    }

    /// Stage that solved the inversion.
    pub fn method(&self) -> Option<SolveMethod> {
        match self {
            ImpliedVolOutcome::Solved(result) => Some(result.method),
            ImpliedVolOutcome::Unsolved { .. } => None,
        }
    }

    /// The result to report: the converged one, or the bisection attempt.
    pub fn last_result(&self) -> &SolverResult {
        match self {
            ImpliedVolOutcome::Solved(result) => result,
            ImpliedVolOutcome::Unsolved { bisection, .. } => bisection,
        }
    }
}

/// Newton-Raphson stage.
///
/// Iterates `σ ← σ - (price(σ) - market) / vega(σ)` from
/// `config.initial_vol`, with vega in absolute units. Stops early when
/// |vega| < `config.vega_floor`; any iterate σ <= 0 is replaced by
/// `config.vol_floor`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
/// use pricer_models::instruments::OptionType;
/// use pricer_models::volatility::{implied_volatility_newton, ImpliedVolConfig, SolveMethod};
///
/// let market = price(100.0, 100.0, 1.0, 0.05, 0.3, OptionType::Call);
/// let result = implied_volatility_newton(
///     market, 100.0, 100.0, 1.0, 0.05, OptionType::Call, &ImpliedVolConfig::default(),
/// );
/// assert!(result.converged);
/// assert_eq!(result.method, SolveMethod::NewtonRaphson);
/// assert!((result.implied_vol - 0.3).abs() < 1e-4);
/// ```
pub fn implied_volatility_newton(
    market_price: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    option_type: OptionType,
    config: &ImpliedVolConfig,
) -> SolverResult {
    let solver = NewtonRaphsonSolver::new(config.solver_config())
        .with_derivative_floor(config.vega_floor)
        .with_lower_barrier(0.0, config.vol_floor);

    let search = solver.search(
        |sigma| black_scholes::price(spot, strike, expiry, rate, sigma, option_type) - market_price,
        |sigma| greeks::vega(spot, strike, expiry, rate, sigma) * 100.0,
        config.initial_vol,
    );

    SolverResult::from_search(search, SolveMethod::NewtonRaphson)
}

/// Bisection stage.
///
/// Halves `[config.vol_low, config.vol_high]`: a midpoint price above the
/// market price moves the upper bound down, otherwise the lower bound moves
/// up. On non-convergence the last midpoint is returned.
pub fn implied_volatility_bisection(
    market_price: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    option_type: OptionType,
    config: &ImpliedVolConfig,
) -> SolverResult {
    let solver = BisectionSolver::new(config.solver_config());

    let search = solver.search(
        |sigma| black_scholes::price(spot, strike, expiry, rate, sigma, option_type) - market_price,
        config.vol_low,
        config.vol_high,
    );

    SolverResult::from_search(search, SolveMethod::Bisection)
}

/// Newton-Raphson, falling back to bisection.
///
/// Bisection runs only when Newton-Raphson did not converge. A non-converged
/// bisection midpoint is not accepted as an answer.
pub fn implied_volatility(
    market_price: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    option_type: OptionType,
    config: &ImpliedVolConfig,
) -> ImpliedVolOutcome {
    let newton =
        implied_volatility_newton(market_price, spot, strike, expiry, rate, option_type, config);
    if newton.converged {
        return ImpliedVolOutcome::Solved(newton);
    }

    debug!(
        market_price,
        strike,
        iterations = newton.iterations,
        final_error = newton.final_error,
        "newton-raphson did not converge, falling back to bisection"
    );

    let bisection =
        implied_volatility_bisection(market_price, spot, strike, expiry, rate, option_type, config);
    if bisection.converged {
        return ImpliedVolOutcome::Solved(bisection);
    }

    warn!(
        market_price,
        spot,
        strike,
        expiry,
        rate,
        %option_type,
        "no implied volatility found within [{}, {}]",
        config.vol_low,
        config.vol_high
    );

    ImpliedVolOutcome::Unsolved { newton, bisection }
}

/// Implied volatility with the default configuration, NaN when unsolvable.
///
/// Callers must check `is_nan()` before using the result.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
/// use pricer_models::instruments::OptionType;
/// use pricer_models::volatility::calculate_implied_vol;
///
/// let market = price(42.0, 40.0, 0.5, 0.10, 0.25, OptionType::Put);
/// let vol = calculate_implied_vol(market, 42.0, 40.0, 0.5, 0.10, OptionType::Put);
/// assert!((vol - 0.25).abs() < 1e-3);
///
/// // A call cannot be worth more than the spot
/// let vol = calculate_implied_vol(50.0, 42.0, 40.0, 0.5, 0.10, OptionType::Call);
/// assert!(vol.is_nan());
/// ```
pub fn calculate_implied_vol(
    market_price: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    option_type: OptionType,
) -> f64 {
    implied_volatility(
        market_price,
        spot,
        strike,
        expiry,
        rate,
        option_type,
        &ImpliedVolConfig::default(),
    )
    .value_or_nan()
}

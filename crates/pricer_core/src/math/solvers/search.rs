//! Structured outcome of a root search.

use num_traits::Float;

/// Why a root search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// `|f(x)|` fell below the configured tolerance.
    Converged,
    /// The derivative dropped below the solver's floor (Newton-Raphson only).
    DerivativeNearZero,
    /// The iteration cap was reached.
    MaxIterations,
    /// An update produced a non-finite iterate.
    NonFinite,
}

/// Report produced by a `search` call.
///
/// Unlike `find_root`, a search never fails: non-convergence is data the
/// caller inspects through `converged` and `stop`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootSearch<T: Float> {
    /// Last iterate (the root when `converged` is true).
    pub root: T,
    /// Whether the tolerance was met.
    pub converged: bool,
    /// Function evaluations spent in the main loop, or the cap when it was hit.
    pub iterations: usize,
    /// `|f(root)|`.
    pub residual: T,
    /// Termination cause.
    pub stop: StopReason,
}

impl<T: Float> RootSearch<T> {
    pub(crate) fn converged(root: T, iterations: usize, residual: T) -> Self {
        Self {
            root,
            converged: true,
            iterations,
            residual,
            stop: StopReason::Converged,
        }
    }

    pub(crate) fn stopped(root: T, iterations: usize, residual: T, stop: StopReason) -> Self {
        Self {
            root,
            converged: false,
            iterations,
            residual,
            stop,
        }
    }
}

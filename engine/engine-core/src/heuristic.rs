//! State heuristic trait.
//!
//! A heuristic assigns a desirability score to a state for one player without
//! any lookahead. The search calls it thousands of times per decision, so
//! implementations should be cheap, pure and deterministic.

use std::sync::Arc;

use crate::state::PlayerId;

/// Evaluates a state from one player's perspective.
///
/// `min_value`/`max_value` describe the theoretical range used by callers for
/// normalisation. `evaluate` itself must return a finite value for every
/// reachable state.
pub trait StateHeuristic<S>: Send + Sync {
    /// Score `state` for `player`. Higher is better.
    fn evaluate(&self, state: &S, player: PlayerId) -> f64;

    /// Lower bound of the score range
    fn min_value(&self) -> f64 {
        f64::NEG_INFINITY
    }

    /// Upper bound of the score range
    fn max_value(&self) -> f64 {
        f64::INFINITY
    }
}

impl<S, H: StateHeuristic<S> + ?Sized> StateHeuristic<S> for &H {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        (**self).evaluate(state, player)
    }

    fn min_value(&self) -> f64 {
        (**self).min_value()
    }

    fn max_value(&self) -> f64 {
        (**self).max_value()
    }
}

impl<S, H: StateHeuristic<S> + ?Sized> StateHeuristic<S> for Arc<H> {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        (**self).evaluate(state, player)
    }

    fn min_value(&self) -> f64 {
        (**self).min_value()
    }

    fn max_value(&self) -> f64 {
        (**self).max_value()
    }
}

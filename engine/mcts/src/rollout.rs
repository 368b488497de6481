//! Rollout (simulation) policy.
//!
//! From a leaf state, play up to `rollout_length` actions. Each step is either
//! greedy (the action whose successor scores best under the heuristic) or
//! uniformly random, mixed by `heuristic_rollout_probability`. The final
//! state is scored by the heuristic for the searching player.

use engine_core::{GameState, PlayerId, StateHeuristic};
use rand::Rng;
use rand_chacha::ChaCha20Rng;

use crate::config::MctsConfig;

/// Index of the action whose one-step successor scores highest for `player`.
///
/// Ties go to the earliest action. Returns None for an empty action list.
pub fn greedy_action<S, H>(
    state: &S,
    actions: &[S::Action],
    heuristic: &H,
    player: PlayerId,
) -> Option<usize>
where
    S: GameState,
    H: StateHeuristic<S> + ?Sized,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, action) in actions.iter().enumerate() {
        let mut next = state.clone();
        next.apply(action);
        let value = heuristic.evaluate(&next, player);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}

/// Pick the index of the next rollout action.
fn rollout_action<S, H>(
    state: &S,
    actions: &[S::Action],
    heuristic: &H,
    player: PlayerId,
    config: &MctsConfig,
    rng: &mut ChaCha20Rng,
) -> usize
where
    S: GameState,
    H: StateHeuristic<S> + ?Sized,
{
    if config.use_heuristic_rollouts && rng.gen::<f64>() < config.heuristic_rollout_probability {
        if let Some(i) = greedy_action(state, actions, heuristic, player) {
            return i;
        }
    }
    rng.gen_range(0..actions.len())
}

/// Result of one rollout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RolloutOutcome {
    /// Heuristic value of the final state for the searching player
    pub reward: f64,
    /// Actions actually played
    pub steps: u32,
}

/// Play out `state` and return the heuristic reward.
pub fn rollout<S, H>(
    mut state: S,
    heuristic: &H,
    player: PlayerId,
    config: &MctsConfig,
    rng: &mut ChaCha20Rng,
) -> RolloutOutcome
where
    S: GameState,
    H: StateHeuristic<S> + ?Sized,
{
    let mut steps = 0;
    while steps < config.rollout_length && !state.is_terminal() {
        let actions = state.legal_actions();
        if actions.is_empty() {
            break;
        }
        let i = rollout_action(&state, &actions, heuristic, player, config, rng);
        state.apply(&actions[i]);
        steps += 1;
    }

    RolloutOutcome {
        reward: heuristic.evaluate(&state, player),
        steps,
    }
}

//! Agent that picks actions with determinized MCTS.

use engine_config::CentralConfig;
use engine_core::{GameState, StateHeuristic};
use mcts::{Decision, MctsConfig, ValidatedConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sushigo_heuristic::SushiGoHeuristic;
use tracing::debug;

use crate::{PlayerError, PlayerSettings};

/// Determinized MCTS agent.
///
/// The agent owns its decision RNG, so a player built with a fixed seed
/// makes the same sequence of choices for the same sequence of states.
pub struct MctsPlayer<H = SushiGoHeuristic> {
    /// Search configuration, checked once at construction
    config: ValidatedConfig,
    /// Position evaluator used by rollouts
    heuristic: H,
    /// Decision RNG; each determinization draws its seed from here
    rng: ChaCha20Rng,
    /// Decisions made so far
    decisions: u64,
}

impl<H> std::fmt::Debug for MctsPlayer<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MctsPlayer")
            .field("config", &self.config)
            .field("decisions", &self.decisions)
            .finish()
    }
}

impl<H> MctsPlayer<H> {
    /// Create a player with a validated config and a fixed seed.
    pub fn new(config: MctsConfig, heuristic: H, seed: u64) -> Result<Self, PlayerError> {
        Ok(Self {
            config: ValidatedConfig::new(config)?,
            heuristic,
            rng: ChaCha20Rng::seed_from_u64(seed),
            decisions: 0,
        })
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Number of decisions made so far
    pub fn decisions(&self) -> u64 {
        self.decisions
    }

    /// Choose an action for the player to move in `state`.
    pub fn choose_action<S>(
        &mut self,
        state: &S,
        legal_actions: &[S::Action],
    ) -> Result<S::Action, PlayerError>
    where
        S: GameState,
        H: StateHeuristic<S>,
    {
        self.decide(state, legal_actions).map(|d| d.action)
    }

    /// Like [`choose_action`](Self::choose_action) but returns the full tally.
    pub fn decide<S>(
        &mut self,
        state: &S,
        legal_actions: &[S::Action],
    ) -> Result<Decision<S::Action>, PlayerError>
    where
        S: GameState,
        H: StateHeuristic<S>,
    {
        let player = state.current_player();
        let decision = mcts::decide_validated(
            state,
            legal_actions,
            player,
            &self.heuristic,
            &self.config,
            &mut self.rng,
        )?;
        self.decisions += 1;

        debug!(
            decision = self.decisions,
            player,
            action = ?decision.action,
            trials = decision.trials_completed,
            skipped = decision.trials_skipped,
            "Action chosen"
        );
        Ok(decision)
    }
}

impl MctsPlayer<SushiGoHeuristic> {
    /// Build a Sushi Go player from resolved settings.
    pub fn from_settings(settings: &PlayerSettings) -> Result<Self, PlayerError> {
        let heuristic = SushiGoHeuristic::new(settings.weights)?;
        Self::new(settings.mcts.clone(), heuristic, settings.seed)
    }

    /// Build a Sushi Go player straight from a loaded config.
    pub fn from_config(config: &CentralConfig) -> Result<Self, PlayerError> {
        Self::from_settings(&PlayerSettings::from_central(config)?)
    }
}

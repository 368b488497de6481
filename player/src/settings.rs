//! Conversion from the central config sections into validated engine settings.

use std::time::Duration;

use engine_config::{CentralConfig, HeuristicSection, MctsSection};
use mcts::{ConfigError, MctsConfig, SamplingFailurePolicy, SearchBudget};
use sushigo_heuristic::{HeuristicWeights, WeightsError};
use tracing::debug;

use crate::PlayerError;

/// Everything a player needs, checked once at construction.
#[derive(Debug, Clone)]
pub struct PlayerSettings {
    pub mcts: MctsConfig,
    pub weights: HeuristicWeights,
    pub seed: u64,
    pub log_level: String,
}

impl PlayerSettings {
    /// Build and validate settings from a loaded config.
    pub fn from_central(config: &CentralConfig) -> Result<Self, PlayerError> {
        let settings = Self {
            mcts: mcts_config(&config.mcts)?,
            weights: heuristic_weights(&config.heuristic)?,
            seed: config.common.seed,
            log_level: config.common.log_level.clone(),
        };
        debug!(?settings, "Player settings resolved");
        Ok(settings)
    }

    /// Load config.toml (plus env overrides) and build settings from it.
    pub fn load() -> Result<Self, PlayerError> {
        Self::from_central(&engine_config::load_config())
    }
}

/// Map the `[mcts]` section onto an engine config.
///
/// A nonzero `time_budget_ms` selects a wall-clock budget and `iterations`
/// is then ignored.
pub fn mcts_config(section: &MctsSection) -> Result<MctsConfig, ConfigError> {
    let budget = if section.time_budget_ms > 0 {
        SearchBudget::Time(Duration::from_millis(section.time_budget_ms))
    } else {
        SearchBudget::Iterations(section.iterations)
    };
    let sampling_failure = if section.skip_failed_determinizations {
        SamplingFailurePolicy::Skip
    } else {
        SamplingFailurePolicy::Abort
    };

    let config = MctsConfig {
        exploration_constant: section.exploration_constant,
        rollout_length: section.rollout_length,
        max_tree_depth: section.max_tree_depth,
        epsilon: section.epsilon,
        use_heuristic_rollouts: section.use_heuristic_rollouts,
        heuristic_rollout_probability: section.heuristic_rollout_probability,
        n_determinizations: section.n_determinizations,
        budget,
        parallel: section.parallel,
        sampling_failure,
    };
    config.validate()?;
    Ok(config)
}

/// Map the `[heuristic]` section onto validated weights.
pub fn heuristic_weights(section: &HeuristicSection) -> Result<HeuristicWeights, WeightsError> {
    let weights = HeuristicWeights {
        combo_focus: section.combo_focus,
        safety_focus: section.safety_focus,
        denial_focus: section.denial_focus,
        maki_priority: section.maki_priority,
        pudding_priority: section.pudding_priority,
    };
    weights.validate()?;
    Ok(weights)
}

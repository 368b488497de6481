//! Configuration struct definitions.
//!
//! Every section deserializes with `#[serde(default)]`, so a config.toml only
//! needs the keys it changes.

use crate::defaults;
use serde::Deserialize;

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub mcts: MctsSection,
    #[serde(default)]
    pub heuristic: HeuristicSection,
}

/// Settings shared by every component
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
    /// Seed for the player's decision RNG
    pub seed: u64,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
            seed: defaults::seed(),
        }
    }
}

/// Search parameters
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MctsSection {
    pub exploration_constant: f64,
    pub rollout_length: u32,
    pub max_tree_depth: u32,
    pub epsilon: f64,
    pub use_heuristic_rollouts: bool,
    pub heuristic_rollout_probability: f64,
    pub n_determinizations: u32,
    /// Iterations per determinization, used when `time_budget_ms` is 0
    pub iterations: u32,
    /// Wall-clock budget per determinization in milliseconds (0 = off)
    pub time_budget_ms: u64,
    pub parallel: bool,
    /// Skip worlds that fail to sample instead of aborting the decision
    pub skip_failed_determinizations: bool,
}

impl Default for MctsSection {
    fn default() -> Self {
        Self {
            exploration_constant: defaults::exploration_constant(),
            rollout_length: defaults::rollout_length(),
            max_tree_depth: defaults::max_tree_depth(),
            epsilon: defaults::epsilon(),
            use_heuristic_rollouts: defaults::use_heuristic_rollouts(),
            heuristic_rollout_probability: defaults::heuristic_rollout_probability(),
            n_determinizations: defaults::n_determinizations(),
            iterations: defaults::iterations(),
            time_budget_ms: defaults::time_budget_ms(),
            parallel: defaults::parallel(),
            skip_failed_determinizations: defaults::skip_failed_determinizations(),
        }
    }
}

/// Sushi Go heuristic weights
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HeuristicSection {
    pub combo_focus: f64,
    pub safety_focus: f64,
    pub denial_focus: f64,
    pub maki_priority: f64,
    pub pudding_priority: f64,
}

impl Default for HeuristicSection {
    fn default() -> Self {
        Self {
            combo_focus: defaults::combo_focus(),
            safety_focus: defaults::safety_focus(),
            denial_focus: defaults::denial_focus(),
            maki_priority: defaults::maki_priority(),
            pudding_priority: defaults::pudding_priority(),
        }
    }
}

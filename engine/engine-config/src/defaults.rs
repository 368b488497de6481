//! Default configuration values loaded from config.defaults.toml.
//!
//! The TOML file at the workspace root is embedded at compile time so the
//! shipped defaults and the documented file can never drift apart.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    mcts: MctsDefaults,
    heuristic: HeuristicDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
    seed: u64,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    exploration_constant: f64,
    rollout_length: u32,
    max_tree_depth: u32,
    epsilon: f64,
    use_heuristic_rollouts: bool,
    heuristic_rollout_probability: f64,
    n_determinizations: u32,
    iterations: u32,
    time_budget_ms: u64,
    parallel: bool,
    skip_failed_determinizations: bool,
}

#[derive(Debug, Deserialize)]
struct HeuristicDefaults {
    combo_focus: f64,
    safety_focus: f64,
    denial_focus: f64,
    maki_priority: f64,
    pudding_priority: f64,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}
pub fn seed() -> u64 {
    DEFAULTS.common.seed
}

// MCTS
pub fn exploration_constant() -> f64 {
    DEFAULTS.mcts.exploration_constant
}
pub fn rollout_length() -> u32 {
    DEFAULTS.mcts.rollout_length
}
pub fn max_tree_depth() -> u32 {
    DEFAULTS.mcts.max_tree_depth
}
pub fn epsilon() -> f64 {
    DEFAULTS.mcts.epsilon
}
pub fn use_heuristic_rollouts() -> bool {
    DEFAULTS.mcts.use_heuristic_rollouts
}
pub fn heuristic_rollout_probability() -> f64 {
    DEFAULTS.mcts.heuristic_rollout_probability
}
pub fn n_determinizations() -> u32 {
    DEFAULTS.mcts.n_determinizations
}
pub fn iterations() -> u32 {
    DEFAULTS.mcts.iterations
}
pub fn time_budget_ms() -> u64 {
    DEFAULTS.mcts.time_budget_ms
}
pub fn parallel() -> bool {
    DEFAULTS.mcts.parallel
}
pub fn skip_failed_determinizations() -> bool {
    DEFAULTS.mcts.skip_failed_determinizations
}

// Heuristic
pub fn combo_focus() -> f64 {
    DEFAULTS.heuristic.combo_focus
}
pub fn safety_focus() -> f64 {
    DEFAULTS.heuristic.safety_focus
}
pub fn denial_focus() -> f64 {
    DEFAULTS.heuristic.denial_focus
}
pub fn maki_priority() -> f64 {
    DEFAULTS.heuristic.maki_priority
}
pub fn pudding_priority() -> f64 {
    DEFAULTS.heuristic.pudding_priority
}

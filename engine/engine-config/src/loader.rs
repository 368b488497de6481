//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Env var naming an explicit config file
pub const CONFIG_PATH_VAR: &str = "ISMCTS_CONFIG";

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from a crate directory)
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by the ISMCTS_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// Missing or unreadable files fall back to built-in defaults. After
/// loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    // Check for explicit config path
    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from {}: {}", CONFIG_PATH_VAR, path.display());
            return load_from_path(&path);
        }
        warn!(
            "{}={} not found, searching defaults",
            CONFIG_PATH_VAR,
            path.display()
        );
    }

    // Search default locations
    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    // Fall back to defaults
    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, f64, bool, etc.); unparseable values are ignored
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(raw) = std::env::var($key) {
            match raw.parse() {
                Ok(v) => $config.$section.$field = v,
                Err(_) => warn!("Ignoring {}={}: not a valid value", $key, raw),
            }
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: ISMCTS_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "ISMCTS_COMMON_LOG_LEVEL");
    env_override!(config, common.seed, "ISMCTS_COMMON_SEED", parse);

    // MCTS
    env_override!(
        config,
        mcts.exploration_constant,
        "ISMCTS_MCTS_EXPLORATION_CONSTANT",
        parse
    );
    env_override!(
        config,
        mcts.rollout_length,
        "ISMCTS_MCTS_ROLLOUT_LENGTH",
        parse
    );
    env_override!(
        config,
        mcts.max_tree_depth,
        "ISMCTS_MCTS_MAX_TREE_DEPTH",
        parse
    );
    env_override!(config, mcts.epsilon, "ISMCTS_MCTS_EPSILON", parse);
    env_override!(
        config,
        mcts.use_heuristic_rollouts,
        "ISMCTS_MCTS_USE_HEURISTIC_ROLLOUTS",
        parse
    );
    env_override!(
        config,
        mcts.heuristic_rollout_probability,
        "ISMCTS_MCTS_HEURISTIC_ROLLOUT_PROBABILITY",
        parse
    );
    env_override!(
        config,
        mcts.n_determinizations,
        "ISMCTS_MCTS_N_DETERMINIZATIONS",
        parse
    );
    env_override!(config, mcts.iterations, "ISMCTS_MCTS_ITERATIONS", parse);
    env_override!(
        config,
        mcts.time_budget_ms,
        "ISMCTS_MCTS_TIME_BUDGET_MS",
        parse
    );
    env_override!(config, mcts.parallel, "ISMCTS_MCTS_PARALLEL", parse);
    env_override!(
        config,
        mcts.skip_failed_determinizations,
        "ISMCTS_MCTS_SKIP_FAILED_DETERMINIZATIONS",
        parse
    );

    // Heuristic
    env_override!(
        config,
        heuristic.combo_focus,
        "ISMCTS_HEURISTIC_COMBO_FOCUS",
        parse
    );
    env_override!(
        config,
        heuristic.safety_focus,
        "ISMCTS_HEURISTIC_SAFETY_FOCUS",
        parse
    );
    env_override!(
        config,
        heuristic.denial_focus,
        "ISMCTS_HEURISTIC_DENIAL_FOCUS",
        parse
    );
    env_override!(
        config,
        heuristic.maki_priority,
        "ISMCTS_HEURISTIC_MAKI_PRIORITY",
        parse
    );
    env_override!(
        config,
        heuristic.pudding_priority,
        "ISMCTS_HEURISTIC_PUDDING_PRIORITY",
        parse
    );

    config
}

//! Centralized configuration loading from config.toml.
//!
//! This crate provides the configuration structs and loading logic used by
//! the `player` crate to build search and heuristic settings.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`ISMCTS_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml, embedded at compile time)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! ISMCTS_<SECTION>_<KEY>=value
//!
//! Examples:
//!     ISMCTS_COMMON_LOG_LEVEL=debug
//!     ISMCTS_COMMON_SEED=42
//!     ISMCTS_MCTS_N_DETERMINIZATIONS=20
//!     ISMCTS_MCTS_TIME_BUDGET_MS=250
//!     ISMCTS_HEURISTIC_DENIAL_FOCUS=0.8
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{
    apply_env_overrides, load_config, load_from_path, CONFIG_PATH_VAR, CONFIG_SEARCH_PATHS,
};
pub use structs::*;

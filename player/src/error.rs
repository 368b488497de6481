use mcts::{ConfigError, SearchError};
use sushigo_heuristic::WeightsError;
use thiserror::Error;

/// Errors raised while building a player or choosing an action.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Invalid search configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid heuristic weights: {0}")]
    Weights(#[from] WeightsError),

    #[error("Search failed: {0}")]
    Search(#[from] SearchError),
}

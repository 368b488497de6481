//! Determinized Monte Carlo Tree Search for imperfect-information games.
//!
//! This crate is game-agnostic: it searches any state implementing the
//! `engine-core` [`GameState`](engine_core::GameState) trait and scores
//! positions with any [`StateHeuristic`](engine_core::StateHeuristic).
//!
//! # Overview
//!
//! A decision samples several concrete worlds consistent with the deciding
//! player's view and runs one search per world. Each search iteration has
//! four phases:
//!
//! 1. **Selection**: Descend fully expanded nodes by UCB1
//! 2. **Expansion**: Add one child for a random untried action, up to
//!    `max_tree_depth`
//! 3. **Simulation**: Play up to `rollout_length` greedy/random actions and
//!    score the result with the heuristic
//! 4. **Backpropagation**: Add the reward and a visit to every node on the
//!    path to the root
//!
//! Root visit counts are then summed per action over all worlds and the most
//! visited action is chosen.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mcts::{choose_action, MctsConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let config = MctsConfig::default().with_determinizations(8);
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let legal = state.legal_actions();
//! let action = choose_action(&state, &legal, me, &heuristic, &config, &mut rng)?;
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `exploration_constant`: UCB exploration weight (default: sqrt 2)
//! - `rollout_length`: Max simulated actions after a leaf (default: 10)
//! - `n_determinizations`: Worlds sampled per decision (default: 5)
//! - `budget`: Iterations or wall-clock time per world (default: 1000 iterations)
//! - `parallel`: Search worlds on the rayon pool (default: false)

pub mod config;
pub mod driver;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tally;
pub mod tree;

// Re-export main types
pub use config::{ConfigError, MctsConfig, SamplingFailurePolicy, SearchBudget, ValidatedConfig};
pub use driver::{choose_action, decide, decide_validated, Decision};
pub use node::{MctsNode, NodeId};
pub use rollout::{greedy_action, rollout, RolloutOutcome};
pub use search::{run_mcts, MctsSearch, SearchError, SearchStats};
pub use tally::ActionTally;
pub use tree::{MctsTree, TreeStats};

//! Core traits shared by the search engine and the host game framework
//!
//! The search never sees concrete cards, decks or rules. It only needs the
//! capabilities described here:
//! - `GameState`: determinize, enumerate legal actions, apply, query terminal/score
//! - `StateHeuristic`: turn a state into a desirability score for one player

pub mod heuristic;
pub mod state;

pub use heuristic::StateHeuristic;
pub use state::{DeterminizeError, GameState, PlayerId};

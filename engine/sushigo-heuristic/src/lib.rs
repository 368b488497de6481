//! Sushi Go state heuristic.
//!
//! Scores a position as the player's raw game score plus a weighted sum of
//! five positional sub-scores:
//!
//! 1. **Set completion**: Tempura pairs, Sashimi triples, Dumpling runs
//! 2. **Maki race**: position among opponents in the Maki roll majority
//! 3. **Wasabi combo**: Wasabi paired with (or waiting for) a Nigiri
//! 4. **Pudding**: end-of-game Pudding majority/minority
//! 5. **Chopsticks**: flexibility, worth less as the hand shrinks
//!
//! The host supplies board data through [`SushiGoView`]; the heuristic never
//! needs the game rules.
//!
//! ```rust
//! use engine_core::StateHeuristic;
//! use sushigo_heuristic::{CardType, HeuristicWeights, SushiGoHeuristic, SushiGoView};
//!
//! struct Table {
//!     boards: Vec<Vec<CardType>>,
//! }
//!
//! impl SushiGoView for Table {
//!     fn n_players(&self) -> usize { self.boards.len() }
//!     fn game_score(&self, _player: usize) -> f64 { 0.0 }
//!     fn played_cards(&self, player: usize) -> &[CardType] { &self.boards[player] }
//!     fn hand_size(&self, _player: usize) -> usize { 4 }
//! }
//!
//! let table = Table {
//!     boards: vec![vec![CardType::Dumpling, CardType::Dumpling], vec![]],
//! };
//! let heuristic = SushiGoHeuristic::new(HeuristicWeights::default()).unwrap();
//! // Two dumplings are worth 3.0 and nobody has Pudding (-6.0 for a zero tie)
//! assert_eq!(heuristic.evaluate(&table, 0), 3.0 - 6.0 * 1.0);
//! ```

pub mod card;
pub mod heuristic;
pub mod scoring;
pub mod weights;

pub use card::{BoardTally, CardType, SushiGoView};
pub use heuristic::{ScoreBreakdown, SushiGoHeuristic};
pub use weights::{HeuristicWeights, WeightsError};

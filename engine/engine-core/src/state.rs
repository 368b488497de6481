//! Game state capability trait
//!
//! A host game implements [`GameState`] for its own state type. The search
//! engine owns every clone it makes and never shares one clone between two
//! search trees.

use std::fmt::Debug;
use std::hash::Hash;

use rand_chacha::ChaCha20Rng;

/// Seat index of a player, `0..n_players`.
pub type PlayerId = usize;

/// Error type for determinization failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeterminizeError {
    #[error("No consistent world exists for observer {observer}: {reason}")]
    Inconsistent { observer: PlayerId, reason: String },
    #[error("Observer {observer} is not seated (game has {n_players} players)")]
    UnknownObserver { observer: PlayerId, n_players: usize },
    #[error("Sampling failed: {0}")]
    SamplingFailed(String),
}

/// State of a hidden-information game as seen by the search.
///
/// # Type Parameters
///
/// * `Action` - Must be hashable and comparable so that statistics gathered in
///   different determinized worlds can be merged for structurally equal actions.
///
/// # Example
///
/// ```rust
/// # use engine_core::{DeterminizeError, GameState, PlayerId};
/// # use rand_chacha::ChaCha20Rng;
/// #[derive(Debug, Clone)]
/// struct Countdown {
///     remaining: u32,
///     total: [f64; 2],
///     to_move: PlayerId,
/// }
///
/// impl GameState for Countdown {
///     type Action = u32;
///
///     fn clone_determinized(
///         &self,
///         _observer: PlayerId,
///         _rng: &mut ChaCha20Rng,
///     ) -> Result<Self, DeterminizeError> {
///         // Nothing is hidden in this game
///         Ok(self.clone())
///     }
///
///     fn legal_actions(&self) -> Vec<u32> {
///         (1..=self.remaining.min(2)).collect()
///     }
///
///     fn apply(&mut self, action: &u32) {
///         self.remaining -= action;
///         self.total[self.to_move] += *action as f64;
///         self.to_move = 1 - self.to_move;
///     }
///
///     fn is_terminal(&self) -> bool { self.remaining == 0 }
///     fn score(&self, player: PlayerId) -> f64 { self.total[player] }
///     fn current_player(&self) -> PlayerId { self.to_move }
///     fn n_players(&self) -> usize { 2 }
/// }
///
/// let mut game = Countdown { remaining: 3, total: [0.0; 2], to_move: 0 };
/// assert_eq!(game.legal_actions(), vec![1, 2]);
/// game.apply(&2);
/// assert_eq!(game.score(0), 2.0);
/// ```
pub trait GameState: Clone + Send {
    /// Action type used as a key in visit-count maps
    type Action: Clone + Eq + Hash + Debug + Send + Sync;

    /// Produce a copy in which everything hidden from `observer` has been
    /// resolved to one concrete, internally consistent sample.
    ///
    /// The copy must be indistinguishable from `self` to `observer`. All
    /// randomness must come from `rng` so that trials are reproducible.
    fn clone_determinized(
        &self,
        observer: PlayerId,
        rng: &mut ChaCha20Rng,
    ) -> Result<Self, DeterminizeError>;

    /// Ordered list of legal actions. Empty means the state is terminal.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Apply an action in place.
    fn apply(&mut self, action: &Self::Action);

    /// Whether the game is over
    fn is_terminal(&self) -> bool;

    /// Raw game score for a player
    fn score(&self, player: PlayerId) -> f64;

    /// Player whose decision it is
    fn current_player(&self) -> PlayerId;

    /// Number of seated players
    fn n_players(&self) -> usize;
}

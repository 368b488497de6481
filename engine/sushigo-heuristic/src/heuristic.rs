//! The Sushi Go heuristic itself.

use engine_core::{PlayerId, StateHeuristic};

use crate::card::{BoardTally, SushiGoView};
use crate::scoring;
use crate::weights::{HeuristicWeights, WeightsError};

/// Unweighted sub-scores for one player, useful for inspection and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub game_score: f64,
    pub set_completion: f64,
    pub maki_race: f64,
    pub wasabi_combo: f64,
    pub pudding: f64,
    pub chopsticks: f64,
}

/// Raw score plus weighted positional sub-scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SushiGoHeuristic {
    weights: HeuristicWeights,
}

impl Default for SushiGoHeuristic {
    fn default() -> Self {
        Self {
            weights: HeuristicWeights::default(),
        }
    }
}

impl SushiGoHeuristic {
    /// Create a heuristic with validated weights.
    pub fn new(weights: HeuristicWeights) -> Result<Self, WeightsError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    /// Compute the unweighted sub-scores for `player`.
    pub fn breakdown<V: SushiGoView + ?Sized>(&self, view: &V, player: PlayerId) -> ScoreBreakdown {
        let mut maki = scoring::MakiField::default();
        let mut pudding = scoring::PuddingField::default();
        let mut own = BoardTally::default();

        for p in 0..view.n_players() {
            let tally = BoardTally::from_cards(view.played_cards(p));
            if p == player {
                own = tally;
            } else {
                maki.observe(tally.maki);
                pudding.observe(tally.pudding);
            }
        }

        let paired = (view.paired_wasabi(player) as u32).min(own.nigiri);

        ScoreBreakdown {
            game_score: view.game_score(player),
            set_completion: scoring::set_completion_score(own.tempura, own.sashimi, own.dumpling),
            maki_race: maki.score(own.maki),
            wasabi_combo: scoring::wasabi_combo_score(own.wasabi, paired),
            pudding: pudding.score(own.pudding),
            chopsticks: scoring::chopsticks_score(own.chopsticks, view.hand_size(player)),
        }
    }

    /// Combine a breakdown with the configured weights.
    pub fn combine(&self, b: &ScoreBreakdown) -> f64 {
        let w = &self.weights;
        b.game_score
            + b.set_completion * w.combo_focus
            + b.maki_race * w.safety_focus
            + b.wasabi_combo * w.denial_focus
            + b.pudding * w.maki_priority
            + b.chopsticks * w.pudding_priority
    }
}

impl<S: SushiGoView> StateHeuristic<S> for SushiGoHeuristic {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        self.combine(&self.breakdown(state, player))
    }
}

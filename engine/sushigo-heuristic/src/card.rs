//! Card categories and the board view the heuristic reads.

use engine_core::PlayerId;

/// Sushi Go card types relevant to evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    Tempura,
    Sashimi,
    Dumpling,
    MakiRoll1,
    MakiRoll2,
    MakiRoll3,
    EggNigiri,
    SalmonNigiri,
    SquidNigiri,
    Wasabi,
    Pudding,
    Chopsticks,
}

impl CardType {
    /// Number of Maki rolls printed on the card (0 for non-Maki cards).
    #[inline]
    pub fn maki_rolls(self) -> u32 {
        match self {
            CardType::MakiRoll1 => 1,
            CardType::MakiRoll2 => 2,
            CardType::MakiRoll3 => 3,
            _ => 0,
        }
    }

    /// Whether a Wasabi can multiply this card.
    #[inline]
    pub fn is_nigiri(self) -> bool {
        matches!(
            self,
            CardType::EggNigiri | CardType::SalmonNigiri | CardType::SquidNigiri
        )
    }
}

/// Read-only view of the board data the heuristic needs.
///
/// Implemented by the host for its (determinized) game state.
pub trait SushiGoView {
    /// Number of seated players
    fn n_players(&self) -> usize;

    /// Points already banked by `player`
    fn game_score(&self, player: PlayerId) -> f64;

    /// Cards `player` has played this round
    fn played_cards(&self, player: PlayerId) -> &[CardType];

    /// Cards still in `player`'s hand
    fn hand_size(&self, player: PlayerId) -> usize;

    /// Wasabi cards on `player`'s board that already carry a Nigiri.
    ///
    /// The default of 0 treats every Wasabi as unpaired. Hosts that track
    /// per-card association should override this.
    fn paired_wasabi(&self, _player: PlayerId) -> usize {
        0
    }
}

/// Per-category card counts for one board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardTally {
    pub tempura: u32,
    pub sashimi: u32,
    pub dumpling: u32,
    /// Roll-weighted Maki count
    pub maki: u32,
    pub wasabi: u32,
    pub nigiri: u32,
    pub pudding: u32,
    pub chopsticks: u32,
}

impl BoardTally {
    /// Count the categories on a board in a single pass.
    pub fn from_cards(cards: &[CardType]) -> Self {
        let mut tally = Self::default();
        for &card in cards {
            match card {
                CardType::Tempura => tally.tempura += 1,
                CardType::Sashimi => tally.sashimi += 1,
                CardType::Dumpling => tally.dumpling += 1,
                CardType::MakiRoll1 | CardType::MakiRoll2 | CardType::MakiRoll3 => {
                    tally.maki += card.maki_rolls()
                }
                CardType::EggNigiri | CardType::SalmonNigiri | CardType::SquidNigiri => {
                    tally.nigiri += 1
                }
                CardType::Wasabi => tally.wasabi += 1,
                CardType::Pudding => tally.pudding += 1,
                CardType::Chopsticks => tally.chopsticks += 1,
            }
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maki_rolls() {
        assert_eq!(CardType::MakiRoll1.maki_rolls(), 1);
        assert_eq!(CardType::MakiRoll3.maki_rolls(), 3);
        assert_eq!(CardType::Tempura.maki_rolls(), 0);
    }

    #[test]
    fn test_nigiri_family() {
        assert!(CardType::EggNigiri.is_nigiri());
        assert!(CardType::SquidNigiri.is_nigiri());
        assert!(!CardType::Wasabi.is_nigiri());
    }

    #[test]
    fn test_board_tally() {
        let board = [
            CardType::Tempura,
            CardType::MakiRoll2,
            CardType::MakiRoll3,
            CardType::Wasabi,
            CardType::SalmonNigiri,
            CardType::EggNigiri,
            CardType::Pudding,
            CardType::Chopsticks,
            CardType::Dumpling,
            CardType::Dumpling,
        ];
        let tally = BoardTally::from_cards(&board);

        assert_eq!(tally.tempura, 1);
        assert_eq!(tally.sashimi, 0);
        assert_eq!(tally.dumpling, 2);
        assert_eq!(tally.maki, 5);
        assert_eq!(tally.wasabi, 1);
        assert_eq!(tally.nigiri, 2);
        assert_eq!(tally.pudding, 1);
        assert_eq!(tally.chopsticks, 1);
    }

    #[test]
    fn test_empty_board() {
        assert_eq!(BoardTally::from_cards(&[]), BoardTally::default());
    }
}

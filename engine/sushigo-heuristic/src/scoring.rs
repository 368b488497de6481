//! Sub-score functions.
//!
//! Each function works on plain counts so it can be checked in isolation
//! against the scoring tables.

use engine_core::PlayerId;

/// Tempura: half value for a lone card, flat 5.0 once a pair exists.
#[inline]
pub fn tempura_score(count: u32) -> f64 {
    match count {
        0 => 0.0,
        1 => 2.5,
        _ => 5.0,
    }
}

/// Sashimi: 1.0, then 5.0 one card short of a triple, then 10.0 per triple.
#[inline]
pub fn sashimi_score(count: u32) -> f64 {
    match count {
        0 => 0.0,
        1 => 1.0,
        2 => 5.0,
        n => 10.0 * (n / 3) as f64,
    }
}

/// Dumplings follow the triangular schedule, capped at five cards.
#[inline]
pub fn dumpling_score(count: u32) -> f64 {
    const SCHEDULE: [f64; 6] = [0.0, 1.0, 3.0, 6.0, 10.0, 15.0];
    SCHEDULE[count.min(5) as usize]
}

/// Combined set-completion score.
pub fn set_completion_score(tempura: u32, sashimi: u32, dumpling: u32) -> f64 {
    tempura_score(tempura) + sashimi_score(sashimi) + dumpling_score(dumpling)
}

/// Leader and runner-up of the opponents' Maki counts, built one board at a
/// time so the heuristic needs no per-call buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MakiField {
    max: u32,
    second: u32,
}

impl MakiField {
    /// Add one opponent's roll count.
    #[inline]
    pub fn observe(&mut self, count: u32) {
        if count > self.max {
            self.second = self.max;
            self.max = count;
        } else if count > self.second {
            self.second = count;
        }
    }

    /// Race position for a player holding `mine` rolls.
    ///
    /// A count level with the opponents' runner-up (but below the leader)
    /// is out of contention.
    pub fn score(&self, mine: u32) -> f64 {
        if mine > self.max {
            6.0
        } else if mine == self.max && mine > 0 {
            4.5
        } else if mine > self.second && mine > 0 {
            3.0
        } else if mine < self.second && mine > 0 {
            1.5
        } else {
            0.0
        }
    }
}

/// Maki race position for `player` given every player's roll count.
///
/// Only opponents form the comparison pool.
pub fn maki_race_score(counts: &[u32], player: PlayerId) -> f64 {
    let mut field = MakiField::default();
    for (p, &count) in counts.iter().enumerate() {
        if p != player {
            field.observe(count);
        }
    }
    field.score(counts[player])
}

/// Wasabi combos: 4.0 per Wasabi carrying a Nigiri, 1.0 per waiting Wasabi.
///
/// `paired` is clamped to the Wasabi count.
#[inline]
pub fn wasabi_combo_score(wasabi: u32, paired: u32) -> f64 {
    let paired = paired.min(wasabi);
    paired as f64 * 4.0 + (wasabi - paired) as f64 * 1.0
}

/// Most and fewest Puddings among the opponents.
///
/// With no opponents the minimum stays at its `u32::MAX` sentinel, so an
/// empty count is treated as last place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuddingField {
    max: u32,
    min: u32,
}

impl Default for PuddingField {
    fn default() -> Self {
        Self { max: 0, min: u32::MAX }
    }
}

impl PuddingField {
    /// Add one opponent's Pudding count.
    #[inline]
    pub fn observe(&mut self, count: u32) {
        self.max = self.max.max(count);
        self.min = self.min.min(count);
    }

    /// Standing for a player holding `mine` Puddings.
    pub fn score(&self, mine: u32) -> f64 {
        if mine > self.max {
            6.0
        } else if mine < self.min || (mine == self.min && self.min == 0) {
            -6.0
        } else {
            0.0
        }
    }
}

/// Pudding standing for `player` against the opponents' extremes.
pub fn pudding_score(counts: &[u32], player: PlayerId) -> f64 {
    let mut field = PuddingField::default();
    for (p, &count) in counts.iter().enumerate() {
        if p != player {
            field.observe(count);
        }
    }
    field.score(counts[player])
}

/// Chopsticks are worth more early in a round and cost points late.
#[inline]
pub fn chopsticks_score(chopsticks: u32, hand_size: usize) -> f64 {
    let per_card = if hand_size > 5 {
        2.0
    } else if hand_size > 2 {
        1.0
    } else {
        -0.5
    };
    chopsticks as f64 * per_card
}

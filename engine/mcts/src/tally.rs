//! Visit-count tally aggregated across determinizations.

use std::collections::HashMap;
use std::hash::Hash;

/// Root visit counts per legal action, summed over every determinization.
///
/// Iteration and tie-breaking follow the order of the legal-action list the
/// tally was created with, never the hash order.
#[derive(Debug, Clone)]
pub struct ActionTally<A> {
    order: Vec<A>,
    counts: HashMap<A, u64>,
}

impl<A: Clone + Eq + Hash> ActionTally<A> {
    /// Create an empty tally over `legal_actions`, each starting at zero.
    pub fn new(legal_actions: &[A]) -> Self {
        let mut order = Vec::with_capacity(legal_actions.len());
        let mut counts = HashMap::with_capacity(legal_actions.len());
        for action in legal_actions {
            if counts.insert(action.clone(), 0).is_none() {
                order.push(action.clone());
            }
        }
        Self { order, counts }
    }

    /// Add `visits` to `action`. Actions outside the legal list are ignored.
    pub fn add(&mut self, action: &A, visits: u64) {
        if let Some(count) = self.counts.get_mut(action) {
            *count += visits;
        }
    }

    /// Add every count of `other` into this tally.
    pub fn merge(&mut self, other: &ActionTally<A>) {
        for (action, visits) in other.iter() {
            self.add(action, visits);
        }
    }

    /// Visits recorded for `action` (zero if unknown).
    pub fn get(&self, action: &A) -> u64 {
        self.counts.get(action).copied().unwrap_or(0)
    }

    /// Sum of all visits.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Action with the most visits; the earliest legal action wins ties.
    pub fn best(&self) -> Option<&A> {
        let mut best: Option<(&A, u64)> = None;
        for (action, visits) in self.iter() {
            match best {
                Some((_, most)) if visits <= most => {}
                _ => best = Some((action, visits)),
            }
        }
        best.map(|(action, _)| action)
    }

    /// (action, visits) pairs in legal-action order.
    pub fn iter(&self) -> impl Iterator<Item = (&A, u64)> + '_ {
        self.order.iter().map(move |a| (a, self.get(a)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

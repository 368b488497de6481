//! MCTS search over one determinized world.
//!
//! Implements the core MCTS loop:
//! 1. Selection: descend fully expanded nodes by UCB
//! 2. Expansion: add one child for a random untried action
//! 3. Simulation: heuristic/random rollout from the new node
//! 4. Backpropagation: add the reward to every node on the path

use std::time::{Duration, Instant};

use engine_core::{DeterminizeError, GameState, PlayerId, StateHeuristic};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::trace;

use crate::config::{ConfigError, MctsConfig, SearchBudget};
use crate::node::NodeId;
use crate::rollout::rollout;
use crate::tree::MctsTree;

/// Errors that can occur while choosing an action.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("No legal actions available")]
    NoLegalActions,

    #[error("Determinization failed: {0}")]
    Determinize(#[from] DeterminizeError),

    #[error("All {attempted} determinizations failed")]
    AllDeterminizationsFailed { attempted: u32 },
}

/// Statistics about one completed search budget.
#[derive(Debug, Clone)]
pub struct SearchStats {
    /// Iterations performed
    pub iterations: u32,
    /// Nodes allocated in the tree
    pub tree_nodes: usize,
    /// Deepest node depth reached
    pub max_depth: u32,
    /// Wall-clock time spent
    pub elapsed: Duration,
}

/// MCTS search state for one determinized root.
pub struct MctsSearch<'a, S: GameState, H: ?Sized> {
    tree: MctsTree<S>,
    heuristic: &'a H,
    config: &'a MctsConfig,
    player: PlayerId,
}

impl<'a, S, H> MctsSearch<'a, S, H>
where
    S: GameState,
    H: StateHeuristic<S> + ?Sized,
{
    /// Create a new search rooted at `state`, rewarding `player`.
    pub fn new(state: S, player: PlayerId, heuristic: &'a H, config: &'a MctsConfig) -> Self {
        Self {
            tree: MctsTree::new(state),
            heuristic,
            config,
            player,
        }
    }

    /// Run one full search budget.
    ///
    /// A time budget starts counting when `run` is called. `cap` is an
    /// absolute deadline applied on top of either budget; the driver uses it
    /// so parallel trials finish together. At least one iteration is always
    /// performed.
    pub fn run(&mut self, rng: &mut ChaCha20Rng, cap: Option<Instant>) -> SearchStats {
        let start = Instant::now();
        let (max_iterations, deadline) = match self.config.budget {
            SearchBudget::Iterations(n) => (n, cap),
            SearchBudget::Time(budget) => {
                let own = start + budget;
                (u32::MAX, Some(cap.map_or(own, |c| c.min(own))))
            }
        };

        let mut iterations = 0;
        while iterations < max_iterations {
            self.iterate(rng);
            iterations += 1;
            if deadline.is_some_and(|d| Instant::now() >= d) {
                break;
            }
        }

        let tree_stats = self.tree.stats();
        SearchStats {
            iterations,
            tree_nodes: tree_stats.total_nodes,
            max_depth: tree_stats.max_depth,
            elapsed: start.elapsed(),
        }
    }

    /// Run a single iteration (select/expand -> rollout -> backpropagate).
    pub fn iterate(&mut self, rng: &mut ChaCha20Rng) {
        let leaf_id = self.select_and_expand(rng);
        let leaf = self.tree.get(leaf_id);

        let outcome = rollout(
            leaf.state.clone(),
            self.heuristic,
            self.player,
            self.config,
            rng,
        );

        self.tree.backpropagate(leaf_id, outcome.reward);

        trace!(
            leaf = leaf_id.0,
            depth = self.tree.get(leaf_id).depth,
            rollout_steps = outcome.steps,
            reward = outcome.reward,
            "MCTS iteration complete"
        );
    }

    /// Descend from the root and return the node to simulate from.
    ///
    /// A node that still has untried actions is expanded and its new child
    /// returned. Terminal and depth-capped nodes are returned as leaves.
    fn select_and_expand(&mut self, rng: &mut ChaCha20Rng) -> NodeId {
        let mut current = self.tree.root();

        loop {
            let node = self.tree.get(current);

            if node.is_terminal || node.depth >= self.config.max_tree_depth {
                return current;
            }

            if !node.is_fully_expanded() {
                return self.expand(current, rng);
            }

            match self.tree.select_child(
                current,
                self.config.exploration_constant,
                self.config.epsilon,
            ) {
                Some(child_id) => current = child_id,
                None => return current,
            }
        }
    }

    /// Expand a random untried action of `node_id` into a new child.
    fn expand(&mut self, node_id: NodeId, rng: &mut ChaCha20Rng) -> NodeId {
        let node = self.tree.get_mut(node_id);
        let index = rng.gen_range(0..node.untried.len());
        let action = node.untried.swap_remove(index);

        let mut child_state = node.state.clone();
        child_state.apply(&action);

        self.tree.add_child(node_id, action, child_state)
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree<S> {
        &self.tree
    }

    /// Consume the search and keep only the tree.
    pub fn into_tree(self) -> MctsTree<S> {
        self.tree
    }
}

/// Convenience function to run a single search and return root child visits.
pub fn run_mcts<S, H>(
    state: S,
    player: PlayerId,
    heuristic: &H,
    config: &MctsConfig,
    rng: &mut ChaCha20Rng,
) -> (Vec<(S::Action, u32)>, SearchStats)
where
    S: GameState,
    H: StateHeuristic<S> + ?Sized,
{
    let mut search = MctsSearch::new(state, player, heuristic, config);
    let stats = search.run(rng, None);
    (search.tree().root_visits(), stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    /// Pick-up game: each turn take 1, 2 or 3 coins; the heap value differs
    /// per pile so the search has something to learn.
    #[derive(Debug, Clone)]
    struct Coins {
        piles: Vec<f64>,
        taken: f64,
        turns_left: u32,
    }

    impl Coins {
        fn new(piles: Vec<f64>, turns: u32) -> Self {
            Self {
                piles,
                taken: 0.0,
                turns_left: turns,
            }
        }
    }

    impl GameState for Coins {
        type Action = usize;

        fn clone_determinized(
            &self,
            _observer: PlayerId,
            _rng: &mut ChaCha20Rng,
        ) -> Result<Self, DeterminizeError> {
            Ok(self.clone())
        }
        fn legal_actions(&self) -> Vec<usize> {
            if self.turns_left == 0 {
                vec![]
            } else {
                (0..self.piles.len()).collect()
            }
        }
        fn apply(&mut self, action: &usize) {
            self.taken += self.piles[*action];
            self.turns_left -= 1;
        }
        fn is_terminal(&self) -> bool {
            self.turns_left == 0
        }
        fn score(&self, _player: PlayerId) -> f64 {
            self.taken
        }
        fn current_player(&self) -> PlayerId {
            0
        }
        fn n_players(&self) -> usize {
            1
        }
    }

    struct Taken;

    impl StateHeuristic<Coins> for Taken {
        fn evaluate(&self, state: &Coins, _player: PlayerId) -> f64 {
            state.taken
        }
    }

    #[test]
    fn test_iteration_budget_is_respected() {
        let config = MctsConfig::for_testing().with_iterations(25);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut search = MctsSearch::new(Coins::new(vec![1.0, 2.0, 3.0], 4), 0, &Taken, &config);

        let stats = search.run(&mut rng, None);
        let root = search.tree().get(search.tree().root());

        assert_eq!(stats.iterations, 25);
        assert_eq!(root.visit_count, 25);
        // Iterations that end on a terminal node add nothing
        assert!(stats.tree_nodes <= 26);
    }

    #[test]
    fn test_each_non_terminal_iteration_adds_one_node() {
        // 50 turns: 30 iterations can never reach a terminal node
        let config = MctsConfig::for_testing().with_iterations(30);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut search = MctsSearch::new(Coins::new(vec![1.0, 2.0, 3.0], 50), 0, &Taken, &config);

        for i in 1..=30 {
            search.iterate(&mut rng);
            assert_eq!(search.tree().len(), i + 1);
        }
    }

    #[test]
    fn test_unvisited_children_expanded_before_ucb() {
        let config = MctsConfig::for_testing().with_iterations(3);
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let mut search =
            MctsSearch::new(Coins::new(vec![5.0, 1.0, 0.0], 3), 0, &Taken, &config);
        search.run(&mut rng, None);

        // Three root actions and three iterations: each was expanded once
        let visits = search.tree().root_visits();
        assert_eq!(visits.len(), 3);
        assert!(visits.iter().all(|(_, v)| *v == 1));
        assert!(search.tree().get(search.tree().root()).is_fully_expanded());
    }

    #[test]
    fn test_search_prefers_best_action() {
        let config = MctsConfig::for_testing().with_iterations(300);
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let (visits, _) = run_mcts(Coins::new(vec![0.0, 1.0, 4.0], 3), 0, &Taken, &config, &mut rng);

        let best = visits.iter().max_by_key(|(_, v)| *v).map(|(a, _)| *a);
        assert_eq!(best, Some(2));
    }

    #[test]
    fn test_terminal_root_is_evaluated_directly() {
        let config = MctsConfig::for_testing().with_iterations(5);
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let mut root_state = Coins::new(vec![1.0], 0);
        root_state.taken = 3.0;
        let mut search = MctsSearch::new(root_state, 0, &Taken, &config);
        search.run(&mut rng, None);

        let root = search.tree().get(search.tree().root());
        assert_eq!(search.tree().len(), 1);
        assert_eq!(root.visit_count, 5);
        assert!((root.value_sum - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_max_tree_depth_limits_expansion() {
        let config = MctsConfig::for_testing()
            .with_iterations(100)
            .with_max_tree_depth(1);
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut search = MctsSearch::new(Coins::new(vec![1.0, 2.0], 6), 0, &Taken, &config);
        let stats = search.run(&mut rng, None);

        assert_eq!(stats.max_depth, 1);
        assert_eq!(stats.tree_nodes, 3);
    }

    #[test]
    fn test_time_budget_stops() {
        let config = MctsConfig::for_testing().with_time_budget(Duration::from_millis(5));
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut search = MctsSearch::new(Coins::new(vec![1.0, 2.0], 6), 0, &Taken, &config);
        let stats = search.run(&mut rng, None);

        assert!(stats.iterations >= 1);
        assert!(stats.elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_time_budget_starts_at_run() {
        let config = MctsConfig::for_testing().with_time_budget(Duration::from_millis(10));
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut search = MctsSearch::new(Coins::new(vec![1.0, 2.0], 6), 0, &Taken, &config);

        // A distant cap does not stretch the budget
        let cap = Instant::now() + Duration::from_secs(60);
        let stats = search.run(&mut rng, Some(cap));
        assert!(stats.elapsed >= Duration::from_millis(10));
        assert!(stats.elapsed < Duration::from_secs(60));
    }

    #[test]
    fn test_past_cap_runs_one_iteration() {
        let config = MctsConfig::for_testing().with_time_budget(Duration::from_secs(60));
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut search = MctsSearch::new(Coins::new(vec![1.0, 2.0], 6), 0, &Taken, &config);

        let stats = search.run(&mut rng, Some(Instant::now()));
        assert_eq!(stats.iterations, 1);
    }

    #[test]
    fn test_same_seed_same_tree() {
        let config = MctsConfig::default().with_iterations(200);
        let state = Coins::new(vec![1.0, 2.0, 2.0, 0.5], 5);

        let (a, _) = run_mcts(state.clone(), 0, &Taken, &config, &mut ChaCha20Rng::seed_from_u64(4));
        let (b, _) = run_mcts(state, 0, &Taken, &config, &mut ChaCha20Rng::seed_from_u64(4));
        assert_eq!(a, b);
    }
}

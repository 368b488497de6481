//! MCTS tree structure with arena allocation.
//!
//! The tree uses arena allocation for efficient node storage and
//! cache-friendly traversal. Nodes are stored in a contiguous Vec
//! and referenced by NodeId indices; each node keeps a non-owning parent
//! index, so no reference cycles exist.

use engine_core::GameState;

use crate::node::{MctsNode, NodeId};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree<S: GameState> {
    /// Arena storing all nodes
    nodes: Vec<MctsNode<S>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<S: GameState> MctsTree<S> {
    /// Create a new tree rooted at the given state.
    pub fn new(root_state: S) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(root_state)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (should never be true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Select the child of a node with the highest UCB score.
    ///
    /// Ties go to the child expanded first. Returns None if the node has no
    /// children.
    pub fn select_child(&self, node_id: NodeId, k: f64, epsilon: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        let parent_visits = node.visit_count;

        let mut best: Option<(NodeId, f64)> = None;
        for (_, child_id) in &node.children {
            let score = self.get(*child_id).ucb_score(parent_visits, k, epsilon);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((*child_id, score)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// Add a child to a parent node.
    /// Returns the new child's NodeId.
    pub fn add_child(&mut self, parent_id: NodeId, action: S::Action, state: S) -> NodeId {
        let depth = self.get(parent_id).depth + 1;
        let child_id = NodeId(self.nodes.len() as u32);
        self.nodes
            .push(MctsNode::new_child(parent_id, action.clone(), state, depth));
        self.get_mut(parent_id).children.push((action, child_id));
        child_id
    }

    /// Backpropagate a reward from a node to the root.
    ///
    /// Every node on the path receives the same reward.
    pub fn backpropagate(&mut self, leaf_id: NodeId, reward: f64) {
        let mut current_id = leaf_id;
        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.visit_count += 1;
            node.value_sum += reward;
            current_id = node.parent;
        }
    }

    /// Visit counts of the root's children, in expansion order.
    pub fn root_visits(&self) -> Vec<(S::Action, u32)> {
        self.get(self.root)
            .children
            .iter()
            .map(|(action, id)| (action.clone(), self.get(*id).visit_count))
            .collect()
    }

    /// Visit count of the root child reached by `action` (0 if never expanded).
    pub fn root_child_visits(&self, action: &S::Action) -> u32 {
        self.get(self.root)
            .child(action)
            .map_or(0, |id| self.get(id).visit_count)
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visit_count,
            root_value: root.mean_value(f64::EPSILON),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
        }
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_value: f64,
    pub max_depth: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::{DeterminizeError, PlayerId};
    use rand_chacha::ChaCha20Rng;

    #[derive(Debug, Clone)]
    struct Line(u32);

    impl GameState for Line {
        type Action = char;

        fn clone_determinized(
            &self,
            _observer: PlayerId,
            _rng: &mut ChaCha20Rng,
        ) -> Result<Self, DeterminizeError> {
            Ok(self.clone())
        }
        fn legal_actions(&self) -> Vec<char> {
            if self.0 >= 3 {
                vec![]
            } else {
                vec!['a', 'b', 'c']
            }
        }
        fn apply(&mut self, _action: &char) {
            self.0 += 1;
        }
        fn is_terminal(&self) -> bool {
            self.0 >= 3
        }
        fn score(&self, _player: PlayerId) -> f64 {
            0.0
        }
        fn current_player(&self) -> PlayerId {
            0
        }
        fn n_players(&self) -> usize {
            1
        }
    }

    fn set_stats(tree: &mut MctsTree<Line>, id: NodeId, visits: u32, value_sum: f64) {
        let node = tree.get_mut(id);
        node.visit_count = visits;
        node.value_sum = value_sum;
    }

    #[test]
    fn test_new_tree() {
        let tree = MctsTree::new(Line(0));

        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), NodeId(0));
        assert!(tree.get(tree.root()).parent.is_none());
    }

    #[test]
    fn test_add_child_sets_depth_and_parent() {
        let mut tree = MctsTree::new(Line(0));
        let child = tree.add_child(tree.root(), 'b', Line(1));
        let grandchild = tree.add_child(child, 'a', Line(2));

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(child).depth, 1);
        assert_eq!(tree.get(grandchild).depth, 2);
        assert_eq!(tree.get(grandchild).parent, child);
        assert_eq!(tree.get(tree.root()).children, vec![('b', child)]);
    }

    #[test]
    fn test_backpropagate_same_reward_every_level() {
        let mut tree = MctsTree::new(Line(0));
        let child = tree.add_child(tree.root(), 'a', Line(1));
        let grandchild = tree.add_child(child, 'a', Line(2));

        tree.backpropagate(grandchild, 2.5);
        tree.backpropagate(child, 1.0);

        assert_eq!(tree.get(grandchild).visit_count, 1);
        assert_eq!(tree.get(child).visit_count, 2);
        assert_eq!(tree.get(tree.root()).visit_count, 2);
        assert!((tree.get(grandchild).value_sum - 2.5).abs() < 1e-12);
        assert!((tree.get(child).value_sum - 3.5).abs() < 1e-12);
        assert!((tree.get(tree.root()).value_sum - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_exploration_picks_best_mean() {
        let mut tree = MctsTree::new(Line(0));
        let a = tree.add_child(tree.root(), 'a', Line(1));
        let b = tree.add_child(tree.root(), 'b', Line(1));

        // `a` is visited more but `b` has the better mean
        set_stats(&mut tree, a, 8, 8.0);
        set_stats(&mut tree, b, 2, 4.0);
        let root = tree.root();
        set_stats(&mut tree, root, 10, 12.0);

        assert_eq!(tree.select_child(tree.root(), 0.0, 1e-6), Some(b));
        // With heavy exploration the less visited child is chosen anyway
        assert_eq!(tree.select_child(tree.root(), 10.0, 1e-6), Some(b));
    }

    #[test]
    fn test_exploration_prefers_less_visited() {
        let mut tree = MctsTree::new(Line(0));
        let a = tree.add_child(tree.root(), 'a', Line(1));
        let b = tree.add_child(tree.root(), 'b', Line(1));

        set_stats(&mut tree, a, 20, 22.0);
        set_stats(&mut tree, b, 2, 2.0);
        let root = tree.root();
        set_stats(&mut tree, root, 22, 24.0);

        assert_eq!(tree.select_child(tree.root(), 0.0, 1e-6), Some(a));
        assert_eq!(tree.select_child(tree.root(), 2f64.sqrt(), 1e-6), Some(b));
    }

    #[test]
    fn test_select_tie_goes_to_first_child() {
        let mut tree = MctsTree::new(Line(0));
        let a = tree.add_child(tree.root(), 'a', Line(1));
        let b = tree.add_child(tree.root(), 'b', Line(1));
        set_stats(&mut tree, a, 3, 3.0);
        set_stats(&mut tree, b, 3, 3.0);
        let root = tree.root();
        set_stats(&mut tree, root, 6, 6.0);

        assert_eq!(tree.select_child(tree.root(), 1.0, 1e-6), Some(a));
    }

    #[test]
    fn test_select_child_none_without_children() {
        let tree = MctsTree::new(Line(0));
        assert_eq!(tree.select_child(tree.root(), 1.0, 1e-6), None);
    }

    #[test]
    fn test_root_visits() {
        let mut tree = MctsTree::new(Line(0));
        let a = tree.add_child(tree.root(), 'a', Line(1));
        let c = tree.add_child(tree.root(), 'c', Line(1));
        set_stats(&mut tree, a, 7, 0.0);
        set_stats(&mut tree, c, 2, 0.0);

        assert_eq!(tree.root_visits(), vec![('a', 7), ('c', 2)]);
        assert_eq!(tree.root_child_visits(&'a'), 7);
        assert_eq!(tree.root_child_visits(&'b'), 0);
    }

    #[test]
    fn test_tree_stats() {
        let mut tree = MctsTree::new(Line(0));
        let child = tree.add_child(tree.root(), 'a', Line(1));
        tree.add_child(child, 'b', Line(2));
        tree.backpropagate(child, 1.0);

        let stats = tree.stats();
        assert_eq!(stats.total_nodes, 3);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.root_visits, 1);
    }
}

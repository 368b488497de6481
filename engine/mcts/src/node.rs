//! MCTS tree node representation.
//!
//! Each node owns the determinized state reached by taking `action` from its
//! parent. Nodes store visit statistics used for UCB selection and for the
//! driver's visit tally.

use engine_core::GameState;

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode<S: GameState> {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Action that led to this node from parent (None for root)
    pub action: Option<S::Action>,

    /// Game state at this node
    pub state: S,

    /// Distance from the root (root = 0)
    pub depth: u32,

    /// Number of times this node has been visited
    pub visit_count: u32,

    /// Sum of rollout rewards backpropagated through this node
    pub value_sum: f64,

    /// Whether the state is terminal or has no legal actions
    pub is_terminal: bool,

    /// Legal actions not yet expanded into children
    pub untried: Vec<S::Action>,

    /// Children in expansion order: (action, NodeId) pairs
    pub children: Vec<(S::Action, NodeId)>,
}

impl<S: GameState> MctsNode<S> {
    /// Create a new root node.
    pub fn new_root(state: S) -> Self {
        Self::new(NodeId::NONE, None, state, 0)
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, action: S::Action, state: S, depth: u32) -> Self {
        Self::new(parent, Some(action), state, depth)
    }

    fn new(parent: NodeId, action: Option<S::Action>, state: S, depth: u32) -> Self {
        let untried = if state.is_terminal() {
            Vec::new()
        } else {
            state.legal_actions()
        };
        let is_terminal = untried.is_empty();
        Self {
            parent,
            action,
            state,
            depth,
            visit_count: 0,
            value_sum: 0.0,
            is_terminal,
            untried,
            children: Vec::new(),
        }
    }

    /// Mean reward, with the visit count floored at `epsilon`.
    #[inline]
    pub fn mean_value(&self, epsilon: f64) -> f64 {
        self.value_sum / (self.visit_count as f64).max(epsilon)
    }

    /// Upper-confidence score used when the parent selects among children.
    ///
    /// UCB(child) = mean + K * sqrt(ln(N_parent + 1) / (N_child + epsilon))
    #[inline]
    pub fn ucb_score(&self, parent_visits: u32, k: f64, epsilon: f64) -> f64 {
        let exploration =
            k * (((parent_visits as f64) + 1.0).ln() / (self.visit_count as f64 + epsilon)).sqrt();
        self.mean_value(epsilon) + exploration
    }

    /// Whether every legal action has a child.
    #[inline]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// Child reached by `action`, if it has been expanded.
    pub fn child(&self, action: &S::Action) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(a, _)| a == action)
            .map(|(_, id)| *id)
    }
}

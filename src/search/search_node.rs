use std::fmt::Display;

/// Index of a [`SearchNode`] inside the [`crate::search::SearchSpace`] that
/// owns it. Ids are only meaningful for the space that handed them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A [`SearchNode`] records one path from a root of the search space to its
/// state: the parent it was generated from, the action that generated it, and
/// the accumulated path cost and depth. Nodes are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode<S, A> {
    /// State reached by this path
    state: S,
    /// Node this one was generated from, `None` for roots
    parent_id: Option<NodeId>,
    /// Action applied to the parent's state, `None` for roots
    action: Option<A>,
    /// Sum of the step costs from the root, i.e. the g-value
    path_cost: f64,
    /// Number of actions from the root
    depth: usize,
}

impl<S, A> SearchNode<S, A> {
    /// Create a new root node. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(state: S) -> Self {
        Self {
            state,
            parent_id: None,
            action: None,
            path_cost: 0.,
            depth: 0,
        }
    }

    /// Create a node for the path `parent -> action -> state`. The caller is
    /// responsible for passing the parent's cost and depth, see
    /// [`crate::search::SearchSpace::make_child`].
    pub fn new_with_parent(
        state: S,
        parent_id: NodeId,
        action: A,
        path_cost: f64,
        depth: usize,
    ) -> Self {
        Self {
            state,
            parent_id: Some(parent_id),
            action: Some(action),
            path_cost,
            depth,
        }
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_path_cost(&self) -> f64 {
        self.path_cost
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

use crate::search::{NodeId, Plan, Problem, SearchNode};
use segvec::{Linear, SegVec};
use std::ops::Index;

/// A [`SearchSpace`] is the arena holding every node kept during one search.
/// Nodes refer to their parent by [`NodeId`], so a node may be shared by any
/// number of children without reference counting, and since nodes are never
/// mutated after insertion the arena can be read from another thread while
/// its owner keeps appending to it.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    nodes: SegVec<SearchNode<S, A>, Linear>,
    root_ids: Vec<NodeId>,
}

impl<S, A> SearchSpace<S, A> {
    /// Create a search space holding a single root node for the given state.
    pub fn new(initial_state: S) -> Self {
        let mut search_space = Self::empty();
        search_space.insert_root(initial_state);
        search_space
    }

    /// Create a search space without any roots. Used when the roots are only
    /// known later, e.g. the goal states of a backward search.
    pub fn empty() -> Self {
        Self {
            nodes: SegVec::new(),
            root_ids: vec![],
        }
    }

    pub fn insert_root(&mut self, state: S) -> NodeId {
        let node_id = self.insert(SearchNode::new_without_parent(state));
        self.root_ids.push(node_id);
        node_id
    }

    /// Append a node to the arena. The node's parent, if any, must already
    /// belong to this search space.
    pub fn insert(&mut self, node: SearchNode<S, A>) -> NodeId {
        debug_assert!(
            node.get_parent_id()
                .map_or(true, |parent_id| parent_id.id() < self.nodes.len()),
            "Parent must be inserted before its children"
        );
        let node_id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        node_id
    }

    /// Build (but do not insert) the child reached from `parent_id` by
    /// `action`. Whatever the problem's result or cost function raises is
    /// passed on untouched.
    pub fn make_child<P>(&self, problem: &P, parent_id: NodeId, action: A) -> SearchNode<S, A>
    where
        P: Problem<State = S, Action = A> + ?Sized,
    {
        let parent = self.get_node(parent_id);
        let state = problem.result(parent.get_state(), &action);
        let path_cost = parent.get_path_cost() + problem.step_cost(parent.get_state(), &action);
        SearchNode::new_with_parent(state, parent_id, action, path_cost, parent.get_depth() + 1)
    }

    #[inline(always)]
    pub fn get_root_id(&self) -> NodeId {
        self.root_ids[0]
    }

    pub fn get_root_ids(&self) -> &[NodeId] {
        &self.root_ids
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.get_node(node_id).get_state()
    }

    /// Iterate from the given node up to its root, starting with the node
    /// itself.
    pub fn ancestors(&self, node_id: NodeId) -> Ancestors<'_, S, A> {
        Ancestors {
            search_space: self,
            next: Some(node_id),
        }
    }

    /// Drop every node inserted after the arena held `len` nodes. The
    /// recursive searches use this to forget a subtree once they backtrack
    /// out of it. Roots must not be dropped.
    pub fn truncate(&mut self, len: usize) {
        debug_assert!(
            self.root_ids.iter().all(|root_id| root_id.id() < len),
            "Roots cannot be truncated"
        );
        self.nodes.truncate(len);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }
}

impl<S, A: Clone> SearchSpace<S, A> {
    /// Collect the actions on the path from the root to the given node.
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan<A> {
        let mut steps: Vec<A> = self
            .ancestors(goal_id)
            .filter_map(|node_id| self.get_node(node_id).get_action().cloned())
            .collect();
        steps.reverse();
        Plan::new(steps)
    }
}

impl<S, A> Index<NodeId> for SearchSpace<S, A> {
    type Output = SearchNode<S, A>;

    fn index(&self, node_id: NodeId) -> &Self::Output {
        self.get_node(node_id)
    }
}

#[derive(Debug)]
pub struct Ancestors<'a, S, A> {
    search_space: &'a SearchSpace<S, A>,
    next: Option<NodeId>,
}

impl<S, A> Iterator for Ancestors<'_, S, A> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.search_space.get_node(current).get_parent_id();
        Some(current)
    }
}

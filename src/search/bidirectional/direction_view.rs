use crate::search::{bidirectional::MeetingPolicy, NodeId, SearchNode, SearchSpace};
use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

/// The part of one direction's search that the other direction may read:
/// its arena, an index of the newest node generated for each state, and the
/// ids currently waiting in its frontier. Only the owning worker writes it.
#[derive(Debug)]
pub(crate) struct DirectionView<S, A> {
    pub search_space: SearchSpace<S, A>,
    policy: MeetingPolicy,
    generated: HashMap<S, NodeId>,
    open: HashSet<NodeId>,
    /// For `MeetingPolicy::Overrun(depth)`, how many open nodes have each
    /// state within `depth` ancestor levels, the node itself included.
    overrun: HashMap<S, usize>,
    /// Set once the owner's frontier ran dry. Its generated states are then
    /// everything reachable from its roots, so all of them are valid meeting
    /// points regardless of policy.
    exhausted: bool,
}

impl<S: Clone + Eq + Hash, A> DirectionView<S, A> {
    pub fn new(roots: Vec<S>, policy: MeetingPolicy) -> Self {
        let mut view = Self {
            search_space: SearchSpace::empty(),
            policy,
            generated: HashMap::new(),
            open: HashSet::new(),
            overrun: HashMap::new(),
            exhausted: false,
        };
        for state in roots {
            let node_id = view.search_space.insert_root(state.clone());
            view.generated.insert(state, node_id);
            view.open_node(node_id);
        }
        view
    }

    /// Insert a new frontier node, taking over from `replaced` if it is a
    /// cheaper path to a state already waiting in the frontier.
    pub fn publish(&mut self, node: SearchNode<S, A>, replaced: Option<NodeId>) -> NodeId {
        let state = node.get_state().clone();
        let node_id = self.search_space.insert(node);
        if let Some(replaced) = replaced {
            self.close_node(replaced);
        }
        self.generated.insert(state, node_id);
        self.open_node(node_id);
        node_id
    }

    /// Take an expanded node out of the frontier. `exhausted` is set in the
    /// same critical section so readers never see the last node vanish
    /// without the flag going up.
    pub fn close(&mut self, node_id: NodeId, exhausted: bool) {
        self.close_node(node_id);
        self.exhausted |= exhausted;
    }

    pub fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }

    pub fn generated(&self) -> impl Iterator<Item = (&S, NodeId)> {
        self.generated.iter().map(|(state, &node_id)| (state, node_id))
    }

    pub fn generated_node(&self, state: &S) -> Option<NodeId> {
        self.generated.get(state).copied()
    }

    /// Look for a node of this direction denoting `state` that the meeting
    /// policy accepts. Roots always qualify.
    pub fn find_meeting(&self, state: &S) -> Option<NodeId> {
        let candidate = self.generated_node(state)?;
        if let Some(&root_id) = self
            .search_space
            .get_root_ids()
            .iter()
            .find(|&&root_id| self.search_space.get_state(root_id) == state)
        {
            return Some(root_id);
        }
        if self.exhausted {
            return Some(candidate);
        }
        match self.policy {
            MeetingPolicy::AnyGenerated => Some(candidate),
            MeetingPolicy::Overrun(_) => self.overrun.contains_key(state).then_some(candidate),
        }
    }

    fn open_node(&mut self, node_id: NodeId) {
        if !self.open.insert(node_id) {
            return;
        }
        let MeetingPolicy::Overrun(depth) = self.policy else {
            return;
        };
        for ancestor_id in self.search_space.ancestors(node_id).take(depth + 1) {
            let state = self.search_space.get_state(ancestor_id).clone();
            *self.overrun.entry(state).or_default() += 1;
        }
    }

    fn close_node(&mut self, node_id: NodeId) {
        if !self.open.remove(&node_id) {
            return;
        }
        let MeetingPolicy::Overrun(depth) = self.policy else {
            return;
        };
        for ancestor_id in self.search_space.ancestors(node_id).take(depth + 1) {
            let state = self.search_space.get_state(ancestor_id);
            if let Some(count) = self.overrun.get_mut(state) {
                *count -= 1;
                if *count == 0 {
                    self.overrun.remove(state);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    /// A -> B -> C published in order, with A and B expanded.
    fn chain(policy: MeetingPolicy) -> DirectionView<&'static str, Move> {
        let problem = line_graph();
        let mut view = DirectionView::new(vec!["A"], policy);
        let a = view.search_space.get_root_id();
        let b_node = view.search_space.make_child(&problem, a, Move::to("B"));
        let b = view.publish(b_node, None);
        view.close(a, false);
        let c_node = view.search_space.make_child(&problem, b, Move::to("C"));
        view.publish(c_node, None);
        view.close(b, false);
        view
    }

    #[test]
    fn roots_always_meet() {
        let view = chain(MeetingPolicy::Overrun(0));
        let root_id = view.search_space.get_root_id();
        assert_eq!(view.find_meeting(&"A"), Some(root_id));
    }

    #[test]
    fn overrun_depth_controls_ancestor_checks() {
        let view = chain(MeetingPolicy::Overrun(0));
        assert!(view.find_meeting(&"C").is_some());
        assert_eq!(view.find_meeting(&"B"), None);
        assert!(chain(MeetingPolicy::Overrun(1)).find_meeting(&"B").is_some());
        let any = chain(MeetingPolicy::AnyGenerated);
        assert!(any.find_meeting(&"B").is_some());
        assert_eq!(any.find_meeting(&"D"), None);
    }

    #[test]
    fn overrun_window_follows_open_nodes() {
        let problem = line_graph();
        let mut view = chain(MeetingPolicy::Overrun(1));
        let c = view.generated_node(&"C").unwrap();
        let d_node = view.search_space.make_child(&problem, c, Move::to("D"));
        view.publish(d_node, None);
        view.close(c, false);
        // Only D is open now, so B has left the window while C is still in it
        assert_eq!(view.find_meeting(&"B"), None);
        assert!(view.find_meeting(&"C").is_some());
        assert!(view.find_meeting(&"D").is_some());
    }

    #[test]
    fn exhausted_view_accepts_any_generated_state() {
        let mut view = chain(MeetingPolicy::Overrun(0));
        assert_eq!(view.find_meeting(&"B"), None);
        view.mark_exhausted();
        assert!(view.find_meeting(&"B").is_some());
    }

    #[test]
    fn replacement_moves_index_to_new_node() {
        let problem = cheaper_path_found_later();
        let mut view = DirectionView::new(vec!["A"], MeetingPolicy::Overrun(0));
        let a = view.search_space.get_root_id();
        let costly = view.search_space.make_child(&problem, a, Move::to("C"));
        let costly_id = view.publish(costly, None);
        let b_node = view.search_space.make_child(&problem, a, Move::to("B"));
        let b = view.publish(b_node, None);
        let cheap = view.search_space.make_child(&problem, b, Move::to("C"));
        let cheap_id = view.publish(cheap, Some(costly_id));

        assert_eq!(view.generated_node(&"C"), Some(cheap_id));
        assert_eq!(view.find_meeting(&"C"), Some(cheap_id));
    }
}

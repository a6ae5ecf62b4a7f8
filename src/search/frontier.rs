//! Frontiers hold the ids of generated nodes that are waiting to be expanded.
//! The frontier decides the order of expansion; everything else about a
//! search strategy lives in [`crate::search::search_engines`].

use crate::search::{HeuristicValue, NodeId};
use priority_queue::PriorityQueue;
use std::{
    cmp::Reverse,
    collections::VecDeque,
    fmt::Debug,
};

pub trait Frontier: Debug + Send {
    /// Add a node. Orderings that do not look at priorities ignore it.
    fn push(&mut self, node_id: NodeId, priority: HeuristicValue);

    /// Remove and return the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    /// Remove a specific node, returns whether it was present.
    fn remove(&mut self, node_id: NodeId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out. Used by breadth-first search.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node_id: NodeId, _priority: HeuristicValue) {
        self.queue.push_back(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn remove(&mut self, node_id: NodeId) -> bool {
        match self.queue.iter().position(|&id| id == node_id) {
            Some(index) => self.queue.remove(index).is_some(),
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out. Used by depth-first search.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node_id: NodeId, _priority: HeuristicValue) {
        self.stack.push(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn remove(&mut self, node_id: NodeId) -> bool {
        match self.stack.iter().rposition(|&id| id == node_id) {
            Some(index) => {
                self.stack.remove(index);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Lowest priority first. Nodes with equal priority come out in the order
/// they were pushed.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, u64)>>,
    insertions: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node_id: NodeId, priority: HeuristicValue) {
        self.queue.push(node_id, Reverse((priority, self.insertions)));
        self.insertions += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    fn remove(&mut self, node_id: NodeId) -> bool {
        self.queue.remove(&node_id).is_some()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum FrontierKind {
    Fifo,
    Lifo,
    Priority,
}

impl FrontierKind {
    pub fn create(&self) -> Box<dyn Frontier> {
        match self {
            FrontierKind::Fifo => Box::new(FifoFrontier::new()),
            FrontierKind::Lifo => Box::new(LifoFrontier::new()),
            FrontierKind::Priority => Box::new(PriorityFrontier::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ids: &[usize]) -> Vec<NodeId> {
        ids.iter().map(|&id| NodeId::new(id)).collect()
    }

    fn drain(frontier: &mut dyn Frontier) -> Vec<NodeId> {
        let mut popped = vec![];
        while let Some(node_id) = frontier.pop() {
            popped.push(node_id);
        }
        popped
    }

    #[test]
    fn fifo_preserves_insertion_order() {
        let mut frontier = FifoFrontier::new();
        for node_id in ids(&[0, 1, 2]) {
            frontier.push(node_id, (0.).into());
        }
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&mut frontier), ids(&[0, 1, 2]));
    }

    #[test]
    fn lifo_pops_most_recent() {
        let mut frontier = LifoFrontier::new();
        for node_id in ids(&[0, 1, 2]) {
            frontier.push(node_id, (0.).into());
        }
        assert_eq!(drain(&mut frontier), ids(&[2, 1, 0]));
    }

    #[test]
    fn priority_pops_lowest_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(NodeId::new(0), (3.).into());
        frontier.push(NodeId::new(1), (1.).into());
        frontier.push(NodeId::new(2), (2.).into());
        assert_eq!(drain(&mut frontier), ids(&[1, 2, 0]));
    }

    #[test]
    fn priority_ties_break_by_insertion() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(NodeId::new(4), (1.).into());
        frontier.push(NodeId::new(2), (1.).into());
        frontier.push(NodeId::new(3), (0.5).into());
        frontier.push(NodeId::new(1), (1.).into());
        assert_eq!(drain(&mut frontier), ids(&[3, 4, 2, 1]));
    }

    #[test]
    fn remove_takes_node_out() {
        for kind in [FrontierKind::Fifo, FrontierKind::Lifo, FrontierKind::Priority] {
            let mut frontier = kind.create();
            frontier.push(NodeId::new(0), (1.).into());
            frontier.push(NodeId::new(1), (2.).into());
            assert!(frontier.remove(NodeId::new(0)));
            assert!(!frontier.remove(NodeId::new(0)));
            assert_eq!(frontier.len(), 1);
            assert_eq!(frontier.pop(), Some(NodeId::new(1)));
            assert!(frontier.is_empty());
        }
    }
}

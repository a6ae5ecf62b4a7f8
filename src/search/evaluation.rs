//! Evaluation functions give every generated node the priority it is ordered
//! by in a [`crate::search::PriorityFrontier`]. Lower is expanded first.

use crate::search::{Heuristic, HeuristicValue, SearchNode};
use std::fmt::Debug;

pub trait NodeEvaluation<S, A>: Debug {
    fn evaluate(&mut self, node: &SearchNode<S, A>) -> HeuristicValue;
}

/// `f(n) = g(n)`, the ordering of uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathCostEvaluation;

impl<S, A> NodeEvaluation<S, A> for PathCostEvaluation {
    fn evaluate(&mut self, node: &SearchNode<S, A>) -> HeuristicValue {
        node.get_path_cost().into()
    }
}

/// `f(n) = g(n) + h(n)`, the ordering of A*.
pub struct AStarEvaluation<'h, S> {
    heuristic: &'h mut dyn Heuristic<S>,
}

impl<S> Debug for AStarEvaluation<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AStarEvaluation")
            .field("heuristic", &self.heuristic)
            .finish()
    }
}

impl<'h, S> AStarEvaluation<'h, S> {
    pub fn new(heuristic: &'h mut dyn Heuristic<S>) -> Self {
        Self { heuristic }
    }
}

impl<S, A> NodeEvaluation<S, A> for AStarEvaluation<'_, S> {
    fn evaluate(&mut self, node: &SearchNode<S, A>) -> HeuristicValue {
        HeuristicValue::from(node.get_path_cost()) + self.heuristic.evaluate(node.get_state())
    }
}

/// `f(n) = h(n)`, the ordering of greedy best-first search.
pub struct GreedyEvaluation<'h, S> {
    heuristic: &'h mut dyn Heuristic<S>,
}

impl<S> Debug for GreedyEvaluation<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreedyEvaluation")
            .field("heuristic", &self.heuristic)
            .finish()
    }
}

impl<'h, S> GreedyEvaluation<'h, S> {
    pub fn new(heuristic: &'h mut dyn Heuristic<S>) -> Self {
        Self { heuristic }
    }
}

impl<S, A> NodeEvaluation<S, A> for GreedyEvaluation<'_, S> {
    fn evaluate(&mut self, node: &SearchNode<S, A>) -> HeuristicValue {
        self.heuristic.evaluate(node.get_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{FnHeuristic, NodeId};
    use ordered_float::OrderedFloat;

    #[test]
    fn evaluations_combine_g_and_h() {
        let node = SearchNode::new_with_parent("B", NodeId::new(0), "toB", 2., 1);
        let mut heuristic = FnHeuristic::new("five", |_: &&str| 5.);

        assert_eq!(PathCostEvaluation.evaluate(&node), OrderedFloat(2.));
        assert_eq!(
            AStarEvaluation::<&str>::new(&mut heuristic).evaluate(&node),
            OrderedFloat(7.)
        );
        assert_eq!(
            GreedyEvaluation::<&str>::new(&mut heuristic).evaluate(&node),
            OrderedFloat(5.)
        );
    }
}

//! Recursive best-first search

use crate::search::{
    search_engines::{
        queue_search::{failed, solved},
        SearchEngine,
    },
    Heuristic, HeuristicValue, NodeId, Problem, SearchController, SearchResult, SearchSpace,
    SearchStatistics,
};
use std::{collections::HashSet, fmt::Debug, hash::Hash};

enum RbfsOutcome {
    Solution(NodeId),
    /// No solution below the f-limit. Carries the smallest f-value that
    /// exceeded it, the new backed-up value of the subtree.
    Failure(HeuristicValue),
}

#[derive(Debug, Clone, Copy)]
struct Successor {
    node_id: NodeId,
    f: HeuristicValue,
}

fn infinity() -> HeuristicValue {
    HeuristicValue::from(f64::INFINITY)
}

/// Best-first search in linear space. Only the current path and the
/// successors of the nodes on it are remembered; a subtree that is abandoned
/// keeps its best f-value so it is not re-explored blindly when revisited.
pub struct RecursiveBestFirstSearch<S> {
    heuristic: Box<dyn Heuristic<S>>,
    avoid_loops: bool,
    controller: SearchController,
}

impl<S> Debug for RecursiveBestFirstSearch<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecursiveBestFirstSearch")
            .field("heuristic", &self.heuristic)
            .field("avoid_loops", &self.avoid_loops)
            .finish()
    }
}

impl<S: Clone + Eq + Hash> RecursiveBestFirstSearch<S> {
    pub fn new(heuristic: Box<dyn Heuristic<S>>) -> Self {
        Self {
            heuristic,
            avoid_loops: true,
            controller: SearchController::new(),
        }
    }

    pub fn set_heuristic(&mut self, heuristic: Box<dyn Heuristic<S>>) {
        self.heuristic = heuristic;
    }

    /// Skip children whose state is already on the current recursion path.
    /// On by default; without it an unsolvable cyclic space is searched
    /// forever.
    pub fn with_loop_avoidance(self, avoid_loops: bool) -> Self {
        Self {
            avoid_loops,
            ..self
        }
    }

    pub fn with_controller(self, controller: SearchController) -> Self {
        Self { controller, ..self }
    }

    #[allow(clippy::too_many_arguments)]
    fn recursive_search<P>(
        &mut self,
        problem: &P,
        search_space: &mut SearchSpace<S, P::Action>,
        node_id: NodeId,
        node_f: HeuristicValue,
        f_limit: HeuristicValue,
        path: &mut HashSet<S>,
        statistics: &mut SearchStatistics,
    ) -> RbfsOutcome
    where
        P: Problem<State = S> + ?Sized,
    {
        statistics.register_recursive_depth(search_space[node_id].get_depth());
        if self.controller.is_goal(problem, &search_space[node_id]) {
            return RbfsOutcome::Solution(node_id);
        }
        if !self.controller.is_executing() {
            return RbfsOutcome::Failure(infinity());
        }

        let state = search_space.get_state(node_id).clone();
        if self.avoid_loops {
            path.insert(state.clone());
        }

        let entry_len = search_space.len();
        statistics.increment_expanded_nodes();
        let actions = problem.actions(&state);
        statistics.increment_generated_nodes(actions.len());
        let mut successors = Vec::with_capacity(actions.len());
        for action in actions {
            let child = search_space.make_child(problem, node_id, action);
            if self.avoid_loops && path.contains(child.get_state()) {
                statistics.increment_pruned_nodes();
                continue;
            }
            let f = (HeuristicValue::from(child.get_path_cost())
                + self.heuristic.evaluate(child.get_state()))
            .max(node_f);
            successors.push(Successor {
                node_id: search_space.insert(child),
                f,
            });
        }
        statistics.register_stored_nodes(search_space.len());

        let outcome = loop {
            let Some(best) = successors
                .iter()
                .enumerate()
                .min_by_key(|(_, successor)| successor.f)
                .map(|(index, _)| index)
            else {
                break RbfsOutcome::Failure(infinity());
            };
            let best_f = successors[best].f;
            if best_f > f_limit || best_f == infinity() {
                break RbfsOutcome::Failure(best_f);
            }
            let alternative = successors
                .iter()
                .enumerate()
                .filter(|&(index, _)| index != best)
                .map(|(_, successor)| successor.f)
                .min()
                .unwrap_or_else(infinity);

            match self.recursive_search(
                problem,
                search_space,
                successors[best].node_id,
                best_f,
                f_limit.min(alternative),
                path,
                statistics,
            ) {
                RbfsOutcome::Solution(goal_id) => break RbfsOutcome::Solution(goal_id),
                RbfsOutcome::Failure(backed_up_f) => successors[best].f = backed_up_f,
            }
        };

        if self.avoid_loops {
            path.remove(&state);
        }
        if matches!(outcome, RbfsOutcome::Failure(_)) {
            search_space.truncate(entry_len);
        }
        outcome
    }
}

impl<P> SearchEngine<P> for RecursiveBestFirstSearch<P::State>
where
    P: Problem + ?Sized,
{
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.initial_state());
        let root_id = search_space.get_root_id();
        let root_f = self.heuristic.evaluate(search_space.get_state(root_id));

        let outcome = self.recursive_search(
            problem,
            &mut search_space,
            root_id,
            root_f,
            infinity(),
            &mut HashSet::new(),
            &mut statistics,
        );
        match outcome {
            RbfsOutcome::Solution(goal_id) => {
                solved(&self.controller, &search_space, goal_id, statistics)
            }
            RbfsOutcome::Failure(_) => failed(&self.controller, statistics),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{romania, romania_straight_line_distances, MoveTo, RouteProblem};
    use crate::search::ZeroHeuristic;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn romania_optimal_route() {
        let map = romania();
        let problem = RouteProblem::new(&map, "Arad", "Bucharest");
        for avoid_loops in [true, false] {
            let mut engine =
                RecursiveBestFirstSearch::new(Box::new(romania_straight_line_distances()))
                    .with_loop_avoidance(avoid_loops);
            let (result, statistics) = engine.search(&problem);
            assert_eq!(
                result.into_plan().unwrap().steps(),
                &[
                    MoveTo::new("Sibiu"),
                    MoveTo::new("Rimnicu Vilcea"),
                    MoveTo::new("Pitesti"),
                    MoveTo::new("Bucharest"),
                ]
            );
            assert_approx_eq!(statistics.get_path_cost().unwrap(), 418.);
            assert_eq!(statistics.get_max_recursive_depth(), 4);
        }
    }

    #[test]
    fn backs_up_to_cheaper_subtree() {
        let problem = cheaper_path_found_later();
        let (result, _) = RecursiveBestFirstSearch::new(Box::new(ZeroHeuristic)).search(&problem);
        assert_eq!(
            result.into_plan().unwrap().steps(),
            &[Move::to("B"), Move::to("C"), Move::to("D")]
        );
    }

    #[test]
    fn loop_avoidance_prunes_path_states() {
        let problem = disconnected_graph();
        let (result, statistics) =
            RecursiveBestFirstSearch::new(Box::new(ZeroHeuristic)).search(&problem);
        assert!(result.is_failure());
        assert_eq!(statistics.get_pruned_nodes(), 1);
    }

    #[test]
    fn only_current_path_and_its_siblings_are_stored() {
        let problem = complete_graph();
        let (result, statistics) =
            RecursiveBestFirstSearch::new(Box::new(ZeroHeuristic)).search(&problem);
        assert!(result.is_failure());
        assert!(statistics.get_expanded_nodes() > 4);
        // Root, then 3, 2 and 1 successors along a path through all four
        // states
        assert_eq!(statistics.get_max_stored_nodes(), 7);
    }
}

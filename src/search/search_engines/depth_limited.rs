//! Recursive depth-limited search

use crate::search::{
    search_engines::SearchEngine, DepthLimitedResult, NodeId, Problem, SearchController,
    SearchResult, SearchSpace, SearchStatistics,
};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LimitedOutcome {
    Solution(NodeId),
    Failure,
    Cutoff,
}

/// Depth-first search that treats nodes at the depth limit as if they had no
/// children, reporting [`DepthLimitedResult::Cutoff`] when that happened.
#[derive(Debug, Clone)]
pub struct DepthLimitedSearch {
    limit: usize,
    avoid_cycles: bool,
    controller: SearchController,
}

impl DepthLimitedSearch {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            avoid_cycles: true,
            controller: SearchController::new(),
        }
    }

    /// When enabled (the default), children whose state already appears on
    /// the path from the root are skipped. Without it a cycle always reaches
    /// the limit, so a finite cyclic space never ends in a plain failure.
    pub fn with_cycle_avoidance(self, avoid_cycles: bool) -> Self {
        Self {
            avoid_cycles,
            ..self
        }
    }

    pub fn with_controller(self, controller: SearchController) -> Self {
        Self { controller, ..self }
    }

    pub fn search_with_limit<P>(
        &self,
        problem: &P,
        limit: usize,
    ) -> (DepthLimitedResult<P::Action>, SearchStatistics)
    where
        P: Problem + ?Sized,
    {
        debug!(limit, "starting depth-limited search");
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.initial_state());
        let root_id = search_space.get_root_id();

        let outcome =
            self.recursive_search(problem, &mut search_space, root_id, limit, &mut statistics);
        let result = match outcome {
            LimitedOutcome::Solution(goal_id) => {
                statistics.set_path_cost(search_space[goal_id].get_path_cost());
                DepthLimitedResult::Solution(search_space.extract_plan(goal_id))
            }
            _ if !self.controller.is_executing() => {
                warn!("search cancelled");
                DepthLimitedResult::Failure
            }
            LimitedOutcome::Cutoff => DepthLimitedResult::Cutoff,
            LimitedOutcome::Failure => DepthLimitedResult::Failure,
        };
        statistics.finalise_search();
        (result, statistics)
    }

    fn recursive_search<P>(
        &self,
        problem: &P,
        search_space: &mut SearchSpace<P::State, P::Action>,
        node_id: NodeId,
        limit: usize,
        statistics: &mut SearchStatistics,
    ) -> LimitedOutcome
    where
        P: Problem + ?Sized,
    {
        statistics.register_recursive_depth(search_space[node_id].get_depth());
        if self.controller.is_goal(problem, &search_space[node_id]) {
            return LimitedOutcome::Solution(node_id);
        }
        if limit == 0 {
            return LimitedOutcome::Cutoff;
        }
        if !self.controller.is_executing() {
            return LimitedOutcome::Failure;
        }

        statistics.increment_expanded_nodes();
        let actions = problem.actions(search_space.get_state(node_id));
        statistics.increment_generated_nodes(actions.len());

        let mut cutoff_occurred = false;
        for action in actions {
            let child = search_space.make_child(problem, node_id, action);
            if self.avoid_cycles
                && search_space
                    .ancestors(node_id)
                    .any(|ancestor_id| search_space.get_state(ancestor_id) == child.get_state())
            {
                statistics.increment_pruned_nodes();
                continue;
            }
            let child_id = search_space.insert(child);
            statistics.register_stored_nodes(search_space.len());
            match self.recursive_search(problem, search_space, child_id, limit - 1, statistics) {
                LimitedOutcome::Solution(goal_id) => return LimitedOutcome::Solution(goal_id),
                LimitedOutcome::Cutoff => cutoff_occurred = true,
                LimitedOutcome::Failure => {}
            }
            search_space.truncate(child_id.id());
        }

        if cutoff_occurred {
            LimitedOutcome::Cutoff
        } else {
            LimitedOutcome::Failure
        }
    }
}

impl<P: Problem + ?Sized> SearchEngine<P> for DepthLimitedSearch {
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics) {
        let (result, statistics) = self.search_with_limit(problem, self.limit);
        (result.into(), statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn zero_limit_is_cutoff() {
        let (result, statistics) = DepthLimitedSearch::new(0).search_with_limit(&line_graph(), 0);
        assert_eq!(result, DepthLimitedResult::Cutoff);
        assert_eq!(statistics.get_expanded_nodes(), 0);
    }

    #[test]
    fn zero_limit_at_goal_is_solution() {
        let (result, _) = DepthLimitedSearch::new(0).search_with_limit(&already_at_goal(), 0);
        assert!(result.is_solution());
    }

    #[test]
    fn limit_below_solution_depth_is_cutoff() {
        let engine = DepthLimitedSearch::new(2);
        let (result, _) = engine.search_with_limit(&line_graph(), 2);
        assert!(result.is_cutoff());
        let (result, statistics) = engine.search_with_limit(&line_graph(), 3);
        assert_eq!(
            result,
            DepthLimitedResult::Solution(
                vec![Move::to("B"), Move::to("C"), Move::to("D")].into()
            )
        );
        assert_eq!(statistics.get_path_cost(), Some(6.));
        assert_eq!(statistics.get_max_recursive_depth(), 3);
    }

    #[test]
    fn exhausted_space_is_failure() {
        let (result, statistics) =
            DepthLimitedSearch::new(5).search_with_limit(&disconnected_graph(), 5);
        assert!(result.is_failure());
        // B's way back to A is skipped
        assert_eq!(statistics.get_pruned_nodes(), 1);
    }

    #[test]
    fn cycles_reach_limit_without_avoidance() {
        let engine = DepthLimitedSearch::new(5).with_cycle_avoidance(false);
        let (result, _) = engine.search_with_limit(&disconnected_graph(), 5);
        assert!(result.is_cutoff());
    }

    #[test]
    fn engine_reports_cutoff_as_failure() {
        let (result, _) = DepthLimitedSearch::new(1).search(&line_graph());
        assert!(result.is_failure());
    }

    #[test]
    fn only_current_path_is_stored() {
        let engine = DepthLimitedSearch::new(4).with_cycle_avoidance(false);
        let (result, statistics) = engine.search_with_limit(&complete_graph(), 4);
        assert!(result.is_cutoff());
        assert_eq!(statistics.get_generated_nodes(), 3 + 9 + 27 + 81);
        // The root plus one node per level
        assert_eq!(statistics.get_max_stored_nodes(), 5);
    }
}

//! Iterative deepening depth-first search

use crate::search::{
    search_engines::{DepthLimitedSearch, SearchEngine},
    DepthLimitedResult, Problem, SearchController, SearchResult, SearchStatistics,
};
use tracing::{debug, info, warn};

/// Runs depth-limited searches with limits 0, 1, 2, ... until one of them
/// does not report a cutoff. Without `max_depth` this never returns on an
/// infinite space without a solution unless it is cancelled.
#[derive(Debug, Clone)]
pub struct IterativeDeepeningSearch {
    max_depth: Option<usize>,
    avoid_cycles: bool,
    controller: SearchController,
}

impl IterativeDeepeningSearch {
    pub fn new() -> Self {
        Self {
            max_depth: None,
            avoid_cycles: true,
            controller: SearchController::new(),
        }
    }

    /// Give up with a failure once the depth limit would exceed `max_depth`.
    pub fn with_max_depth(self, max_depth: Option<usize>) -> Self {
        Self { max_depth, ..self }
    }

    pub fn with_cycle_avoidance(self, avoid_cycles: bool) -> Self {
        Self {
            avoid_cycles,
            ..self
        }
    }

    pub fn with_controller(self, controller: SearchController) -> Self {
        Self { controller, ..self }
    }
}

impl Default for IterativeDeepeningSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Problem + ?Sized> SearchEngine<P> for IterativeDeepeningSearch {
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let depth_limited = DepthLimitedSearch::new(0)
            .with_cycle_avoidance(self.avoid_cycles)
            .with_controller(self.controller.clone());

        for limit in 0.. {
            if self.max_depth.is_some_and(|max_depth| limit > max_depth) {
                info!(max_depth = self.max_depth, "depth bound reached");
                break;
            }
            if !self.controller.is_executing() {
                warn!("search cancelled");
                break;
            }

            debug!(limit, "deepening");
            let (result, iteration_statistics) = depth_limited.search_with_limit(problem, limit);
            statistics.merge(&iteration_statistics);
            match result {
                DepthLimitedResult::Cutoff => continue,
                DepthLimitedResult::Solution(plan) => {
                    if let Some(path_cost) = iteration_statistics.get_path_cost() {
                        statistics.set_path_cost(path_cost);
                    }
                    statistics.finalise_search();
                    return (SearchResult::Solution(plan), statistics);
                }
                DepthLimitedResult::Failure => break,
            }
        }

        statistics.finalise_search();
        (SearchResult::Failure, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{romania, MoveTo, RouteProblem};
    use crate::test_utils::*;

    #[test]
    fn finds_shallowest_plan() {
        let (result, statistics) =
            IterativeDeepeningSearch::new().search(&cheaper_path_found_later());
        assert_eq!(
            result.into_plan().unwrap().steps(),
            &[Move::to("C"), Move::to("D")]
        );
        assert_eq!(statistics.get_path_cost(), Some(11.));
    }

    #[test]
    fn romania_in_three_steps() {
        let map = romania();
        let problem = RouteProblem::new(&map, "Arad", "Bucharest");
        let (result, statistics) = IterativeDeepeningSearch::new().search(&problem);
        assert_eq!(
            result.into_plan().unwrap().steps(),
            &[
                MoveTo::new("Sibiu"),
                MoveTo::new("Fagaras"),
                MoveTo::new("Bucharest"),
            ]
        );
        assert_eq!(statistics.get_max_recursive_depth(), 3);
    }

    #[test]
    fn max_depth_bounds_infinite_space() {
        let mut engine = IterativeDeepeningSearch::new().with_max_depth(Some(10));
        let (result, statistics) = engine.search(&endless_line());
        assert!(result.is_failure());
        assert_eq!(statistics.get_max_recursive_depth(), 10);
    }

    #[test]
    fn unsolvable_finite_space_fails() {
        let (result, _) = IterativeDeepeningSearch::new().search(&disconnected_graph());
        assert!(result.is_failure());
    }
}

//! Depth first search

use crate::search::{
    search_engines::{queue_search, GoalTestTiming, SearchEngine, SearchStrategy},
    LifoFrontier, PathCostEvaluation, Problem, SearchController, SearchResult, SearchStatistics,
};

/// Graph search that always expands the most recently generated node. Plans
/// are neither shortest nor cheapest.
#[derive(Debug)]
pub struct DepthFirstSearch {
    controller: SearchController,
}

impl DepthFirstSearch {
    pub fn new() -> Self {
        Self {
            controller: SearchController::new(),
        }
    }

    pub fn with_controller(self, controller: SearchController) -> Self {
        Self { controller }
    }
}

impl Default for DepthFirstSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Problem + ?Sized> SearchEngine<P> for DepthFirstSearch {
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics) {
        queue_search(
            problem,
            &mut LifoFrontier::new(),
            &mut PathCostEvaluation,
            SearchStrategy::graph_search(GoalTestTiming::OnExpansion),
            &self.controller,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn expands_last_generated_first() {
        // B is expanded first, but its way to C is pruned since C is already
        // waiting in the frontier
        let (result, statistics) = DepthFirstSearch::new().search(&cheaper_path_found_later());
        assert_eq!(
            result.into_plan().unwrap().steps(),
            &[Move::to("C"), Move::to("D")]
        );
        assert_eq!(statistics.get_pruned_nodes(), 1);
        assert_eq!(statistics.get_expanded_nodes(), 3);
    }

    #[test]
    fn fails_on_disconnected_graph() {
        let (result, _) = DepthFirstSearch::new().search(&disconnected_graph());
        assert!(result.is_failure());
    }
}

//! Uniform cost search

use crate::search::{
    search_engines::{queue_search, GoalTestTiming, SearchEngine, SearchStrategy},
    PathCostEvaluation, PriorityFrontier, Problem, SearchController, SearchResult,
    SearchStatistics,
};

/// Expands the cheapest node first. The goal test is applied on expansion
/// and frontier entries are replaced when a cheaper path to their state turns
/// up, which makes the returned plan optimal for non-negative step costs.
#[derive(Debug)]
pub struct UniformCostSearch {
    controller: SearchController,
}

impl UniformCostSearch {
    pub fn new() -> Self {
        Self {
            controller: SearchController::new(),
        }
    }

    pub fn with_controller(self, controller: SearchController) -> Self {
        Self { controller }
    }
}

impl Default for UniformCostSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Problem + ?Sized> SearchEngine<P> for UniformCostSearch {
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics) {
        queue_search(
            problem,
            &mut PriorityFrontier::new(),
            &mut PathCostEvaluation,
            SearchStrategy::graph_search(GoalTestTiming::OnExpansion).replacing_costlier(),
            &self.controller,
        )
    }
}

//! Breadth first search

use crate::search::{
    search_engines::{queue_search, GoalTestTiming, SearchEngine, SearchStrategy},
    FifoFrontier, PathCostEvaluation, Problem, SearchController, SearchResult, SearchStatistics,
};

/// Expands shallowest nodes first and tests children for the goal as soon as
/// they are generated, so the returned plan has the fewest possible steps.
#[derive(Debug)]
pub struct BreadthFirstSearch {
    strategy: SearchStrategy,
    controller: SearchController,
}

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self {
            strategy: SearchStrategy::graph_search(GoalTestTiming::OnGeneration),
            controller: SearchController::new(),
        }
    }

    /// Breadth-first search without an explored set.
    pub fn tree_search() -> Self {
        Self {
            strategy: SearchStrategy::tree_search(GoalTestTiming::OnGeneration),
            controller: SearchController::new(),
        }
    }

    pub fn with_controller(self, controller: SearchController) -> Self {
        Self { controller, ..self }
    }
}

impl Default for BreadthFirstSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Problem + ?Sized> SearchEngine<P> for BreadthFirstSearch {
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics) {
        queue_search(
            problem,
            &mut FifoFrontier::new(),
            &mut PathCostEvaluation,
            self.strategy,
            &self.controller,
        )
    }
}

//! A* search

use crate::search::{
    search_engines::{queue_search, GoalTestTiming, SearchEngine, SearchStrategy},
    AStarEvaluation, Heuristic, PriorityFrontier, Problem, SearchController, SearchResult,
    SearchStatistics,
};
use std::fmt::Debug;

/// Best-first graph search on `f(n) = g(n) + h(n)`, with the goal tested on
/// expansion and cheaper paths replacing frontier entries. Closed states are
/// never reopened, so plans are optimal for consistent heuristics.
pub struct AStarSearch<S> {
    heuristic: Box<dyn Heuristic<S>>,
    controller: SearchController,
}

impl<S> Debug for AStarSearch<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AStarSearch")
            .field("heuristic", &self.heuristic)
            .finish()
    }
}

impl<S> AStarSearch<S> {
    pub fn new(heuristic: Box<dyn Heuristic<S>>) -> Self {
        Self {
            heuristic,
            controller: SearchController::new(),
        }
    }

    pub fn set_heuristic(&mut self, heuristic: Box<dyn Heuristic<S>>) {
        self.heuristic = heuristic;
    }

    pub fn with_controller(self, controller: SearchController) -> Self {
        Self { controller, ..self }
    }
}

impl<P: Problem + ?Sized> SearchEngine<P> for AStarSearch<P::State> {
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut evaluation = AStarEvaluation::new(self.heuristic.as_mut());
        queue_search(
            problem,
            &mut PriorityFrontier::new(),
            &mut evaluation,
            SearchStrategy::graph_search(GoalTestTiming::OnExpansion).replacing_costlier(),
            &self.controller,
        )
    }
}

//! Greedy best-first search

use crate::search::{
    search_engines::{queue_search, GoalTestTiming, SearchEngine, SearchStrategy},
    GreedyEvaluation, Heuristic, PriorityFrontier, Problem, SearchController, SearchResult,
    SearchStatistics,
};
use std::fmt::Debug;

/// Expands the node whose state looks closest to a goal, ignoring the cost
/// already paid to reach it. Fast, but neither optimal nor complete on
/// infinite spaces.
pub struct GreedyBestFirstSearch<S> {
    heuristic: Box<dyn Heuristic<S>>,
    controller: SearchController,
}

impl<S> Debug for GreedyBestFirstSearch<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreedyBestFirstSearch")
            .field("heuristic", &self.heuristic)
            .finish()
    }
}

impl<S> GreedyBestFirstSearch<S> {
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

impl<P: Problem + ?Sized> SearchEngine<P> for GreedyBestFirstSearch<P::State> {
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut evaluation = GreedyEvaluation::new(self.heuristic.as_mut());
        queue_search(
            problem,
            &mut PriorityFrontier::new(),
            &mut evaluation,
            SearchStrategy::graph_search(GoalTestTiming::OnExpansion),
            &self.controller,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{romania, romania_straight_line_distances, MoveTo, RouteProblem};
    use crate::search::{FnHeuristic, ZeroHeuristic};
    use crate::test_utils::*;

    #[test]
    fn romania_goes_through_fagaras() {
        let map = romania();
        let problem = RouteProblem::new(&map, "Arad", "Bucharest");
        let mut engine = GreedyBestFirstSearch::new(Box::new(romania_straight_line_distances()));
        let (result, statistics) = engine.search(&problem);
        assert_eq!(
            result.into_plan().unwrap().steps(),
            &[
                MoveTo::new("Sibiu"),
                MoveTo::new("Fagaras"),
                MoveTo::new("Bucharest"),
            ]
        );
        assert_eq!(statistics.get_path_cost(), Some(450.));
        assert_eq!(statistics.get_expanded_nodes(), 3);
    }

    #[test]
    fn heuristic_can_be_swapped() {
        let problem = cheaper_path_found_later();
        let mut engine = GreedyBestFirstSearch::new(Box::new(ZeroHeuristic));
        // Prefer C over B, so the expensive edge is taken
        engine.set_heuristic(Box::new(FnHeuristic::new("c-first", |state: &&str| {
            if *state == "C" {
                0.
            } else {
                1.
            }
        })));
        let (result, _) = engine.search(&problem);
        assert_eq!(
            result.into_plan().unwrap().steps(),
            &[Move::to("C"), Move::to("D")]
        );
    }
}

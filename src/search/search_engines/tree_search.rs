//! Tree and graph search with a caller-chosen frontier and evaluation. The
//! named strategies in this module's siblings are fixed configurations of the
//! same loop.

use crate::search::{
    search_engines::{queue_search, GoalTestTiming, SearchEngine, SearchStrategy},
    FrontierKind, NodeEvaluation, PathCostEvaluation, Problem, SearchController, SearchResult,
    SearchStatistics,
};

/// Search without an explored set. States may be expanded any number of
/// times, so this does not terminate on cyclic spaces without a reachable
/// goal.
#[derive(Debug)]
pub struct TreeSearch<E = PathCostEvaluation> {
    frontier_kind: FrontierKind,
    goal_test: GoalTestTiming,
    evaluation: E,
    controller: SearchController,
}

impl TreeSearch {
    pub fn new(frontier_kind: FrontierKind, goal_test: GoalTestTiming) -> Self {
        Self::with_evaluation(frontier_kind, goal_test, PathCostEvaluation)
    }
}

impl<E> TreeSearch<E> {
    pub fn with_evaluation(
        frontier_kind: FrontierKind,
        goal_test: GoalTestTiming,
        evaluation: E,
    ) -> Self {
        Self {
            frontier_kind,
            goal_test,
            evaluation,
            controller: SearchController::new(),
        }
    }

    pub fn with_controller(self, controller: SearchController) -> Self {
        Self { controller, ..self }
    }
}

impl<P, E> SearchEngine<P> for TreeSearch<E>
where
    P: Problem + ?Sized,
    E: NodeEvaluation<P::State, P::Action>,
{
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut frontier = self.frontier_kind.create();
        queue_search(
            problem,
            frontier.as_mut(),
            &mut self.evaluation,
            SearchStrategy::tree_search(self.goal_test),
            &self.controller,
        )
    }
}

/// Search with an explored set, so that every state is expanded at most
/// once.
#[derive(Debug)]
pub struct GraphSearch<E = PathCostEvaluation> {
    frontier_kind: FrontierKind,
    strategy: SearchStrategy,
    evaluation: E,
    controller: SearchController,
}

impl GraphSearch {
    pub fn new(frontier_kind: FrontierKind, goal_test: GoalTestTiming) -> Self {
        Self::with_evaluation(frontier_kind, goal_test, PathCostEvaluation)
    }
}

impl<E> GraphSearch<E> {
    pub fn with_evaluation(
        frontier_kind: FrontierKind,
        goal_test: GoalTestTiming,
        evaluation: E,
    ) -> Self {
        Self {
            frontier_kind,
            strategy: SearchStrategy::graph_search(goal_test),
            evaluation,
            controller: SearchController::new(),
        }
    }

    /// Replace a frontier entry when its state is reached again with a
    /// strictly lower priority.
    pub fn replacing_costlier(self) -> Self {
        Self {
            strategy: self.strategy.replacing_costlier(),
            ..self
        }
    }

    pub fn with_controller(self, controller: SearchController) -> Self {
        Self { controller, ..self }
    }
}

impl<P, E> SearchEngine<P> for GraphSearch<E>
where
    P: Problem + ?Sized,
    E: NodeEvaluation<P::State, P::Action>,
{
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut frontier = self.frontier_kind.create();
        queue_search(
            problem,
            frontier.as_mut(),
            &mut self.evaluation,
            self.strategy,
            &self.controller,
        )
    }
}

use crate::search::{
    AStarEvaluation, FrontierKind, Frontier, Heuristic, NodeEvaluation, PathCostEvaluation,
};

/// How one direction of a bidirectional search orders its frontier. The
/// heuristic of the backward direction estimates the distance to the
/// initial state, not to a goal.
#[derive(Debug)]
pub enum DirectionStrategy<S> {
    BreadthFirst,
    UniformCost,
    AStar(Box<dyn Heuristic<S> + Send>),
}

impl<S> DirectionStrategy<S> {
    pub(crate) fn frontier(&self) -> Box<dyn Frontier> {
        match self {
            DirectionStrategy::BreadthFirst => FrontierKind::Fifo.create(),
            DirectionStrategy::UniformCost | DirectionStrategy::AStar(_) => {
                FrontierKind::Priority.create()
            }
        }
    }

    /// Cost-ordered strategies replace frontier entries reached again more
    /// cheaply, breadth-first search keeps the first path.
    pub(crate) fn replaces_costlier(&self) -> bool {
        !matches!(self, DirectionStrategy::BreadthFirst)
    }

    pub(crate) fn evaluation<A>(&mut self) -> Box<dyn NodeEvaluation<S, A> + '_> {
        match self {
            DirectionStrategy::BreadthFirst | DirectionStrategy::UniformCost => {
                Box::new(PathCostEvaluation)
            }
            DirectionStrategy::AStar(heuristic) => Box::new(AStarEvaluation::new(heuristic.as_mut())),
        }
    }
}

impl<S> Default for DirectionStrategy<S> {
    fn default() -> Self {
        DirectionStrategy::BreadthFirst
    }
}

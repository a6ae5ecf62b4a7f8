pub mod bidirectional;
mod error;
mod evaluation;
mod explored_set;
mod frontier;
pub mod heuristics;
mod plan;
mod problem;
mod search_controller;
pub mod search_engines;
mod search_node;
mod search_result;
mod search_space;
mod search_statistics;
mod validate;
mod verbosity;

pub use error::{PlanError, SearchError};
pub use evaluation::{AStarEvaluation, GreedyEvaluation, NodeEvaluation, PathCostEvaluation};
pub use explored_set::ExploredSet;
pub use frontier::{FifoFrontier, Frontier, FrontierKind, LifoFrontier, PriorityFrontier};
pub use heuristics::{FnHeuristic, Heuristic, HeuristicValue, ZeroHeuristic};
pub use plan::Plan;
pub use problem::{BidirectionalProblem, Problem};
pub use search_controller::{CancellationToken, SearchController};
pub use search_engines::{SearchEngine, SearchEngineName};
pub use search_node::{NodeId, SearchNode};
pub use search_result::{DepthLimitedResult, SearchResult};
pub use search_space::{Ancestors, SearchSpace};
pub use search_statistics::SearchStatistics;
pub use validate::validate;
pub use verbosity::Verbosity;

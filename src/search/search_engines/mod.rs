mod astar;
mod bfs;
mod depth_limited;
mod dfs;
mod gbfs;
mod iterative_deepening;
mod queue_search;
mod rbfs;
mod search_engine;
mod tree_search;
mod ucs;

pub use astar::AStarSearch;
pub use bfs::BreadthFirstSearch;
pub use depth_limited::DepthLimitedSearch;
pub use dfs::DepthFirstSearch;
pub use gbfs::GreedyBestFirstSearch;
pub use iterative_deepening::IterativeDeepeningSearch;
pub use queue_search::{queue_search, GoalTestTiming, SearchStrategy};
pub use rbfs::RecursiveBestFirstSearch;
pub use search_engine::{SearchEngine, SearchEngineName};
pub use tree_search::{GraphSearch, TreeSearch};
pub use ucs::UniformCostSearch;

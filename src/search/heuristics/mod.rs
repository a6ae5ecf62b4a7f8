mod fn_heuristic;
mod heuristic;
mod zero_heuristic;

pub use fn_heuristic::FnHeuristic;
pub use heuristic::{Heuristic, HeuristicValue};
pub use zero_heuristic::ZeroHeuristic;

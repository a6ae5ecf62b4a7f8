//! A route-finding environment to run the search engines on: road maps,
//! the problem of driving between two locations and a straight-line
//! distance heuristic.

mod map;
mod map_config;
mod romania;
mod route_problem;
mod straight_line_distance;

pub use map::ExtendableMap;
pub use map_config::{LinkConfig, LocationConfig, MapConfig, MapError};
pub use romania::{romania, romania_straight_line_distances};
pub use route_problem::{MoveTo, RouteProblem};
pub use straight_line_distance::StraightLineDistance;

use crate::{
    environment::{ExtendableMap, MapError},
    search::{Heuristic, HeuristicValue},
};
use std::collections::HashMap;

/// Straight-line distance from a location to a fixed goal, looked up in a
/// table. Locations missing from the table are estimated at 0, which keeps
/// the heuristic admissible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StraightLineDistance {
    distances: HashMap<String, f64>,
}

impl StraightLineDistance {
    pub fn from_table<'a>(table: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            distances: table
                .into_iter()
                .map(|(location, distance)| (location.to_string(), distance))
                .collect(),
        }
    }

    /// Compute the table from the positions stored in the map. Locations
    /// without a position are left out.
    pub fn from_positions(map: &ExtendableMap, goal: &str) -> Result<Self, MapError> {
        if map.position(goal).is_none() {
            return Err(MapError::MissingPosition(goal.to_string()));
        }
        Ok(Self {
            distances: map
                .locations()
                .iter()
                .filter_map(|location| {
                    map.straight_line_distance(location, goal)
                        .map(|distance| (location.clone(), distance))
                })
                .collect(),
        })
    }

    pub fn distance(&self, location: &str) -> f64 {
        self.distances.get(location).copied().unwrap_or(0.)
    }
}

impl Heuristic<String> for StraightLineDistance {
    fn evaluate(&mut self, state: &String) -> HeuristicValue {
        self.distance(state).into()
    }
}

//! The simplified road map of Romania, the classic route-finding example.

use crate::environment::{ExtendableMap, StraightLineDistance};

const ROADS: [(&str, &str, f64); 23] = [
    ("Oradea", "Zerind", 71.),
    ("Oradea", "Sibiu", 151.),
    ("Zerind", "Arad", 75.),
    ("Arad", "Timisoara", 118.),
    ("Arad", "Sibiu", 140.),
    ("Timisoara", "Lugoj", 111.),
    ("Lugoj", "Mehadia", 70.),
    ("Mehadia", "Drobeta", 75.),
    ("Drobeta", "Craiova", 120.),
    ("Sibiu", "Fagaras", 99.),
    ("Sibiu", "Rimnicu Vilcea", 80.),
    ("Rimnicu Vilcea", "Pitesti", 97.),
    ("Rimnicu Vilcea", "Craiova", 146.),
    ("Craiova", "Pitesti", 138.),
    ("Fagaras", "Bucharest", 211.),
    ("Pitesti", "Bucharest", 101.),
    ("Giurgiu", "Bucharest", 90.),
    ("Bucharest", "Urziceni", 85.),
    ("Neamt", "Iasi", 87.),
    ("Urziceni", "Vaslui", 142.),
    ("Urziceni", "Hirsova", 98.),
    ("Iasi", "Vaslui", 92.),
    ("Hirsova", "Eforie", 86.),
];

const DISTANCES_TO_BUCHAREST: [(&str, f64); 20] = [
    ("Arad", 366.),
    ("Bucharest", 0.),
    ("Craiova", 160.),
    ("Drobeta", 242.),
    ("Eforie", 161.),
    ("Fagaras", 176.),
    ("Giurgiu", 77.),
    ("Hirsova", 151.),
    ("Iasi", 226.),
    ("Lugoj", 244.),
    ("Mehadia", 241.),
    ("Neamt", 234.),
    ("Oradea", 380.),
    ("Pitesti", 100.),
    ("Rimnicu Vilcea", 193.),
    ("Sibiu", 253.),
    ("Timisoara", 329.),
    ("Urziceni", 80.),
    ("Vaslui", 199.),
    ("Zerind", 374.),
];

/// All roads of the map are two-way.
pub fn romania() -> ExtendableMap {
    let mut map = ExtendableMap::new();
    for (a, b, distance) in ROADS {
        map.add_bidirectional_link(a, b, distance);
    }
    map
}

/// Straight-line distances to Bucharest. Only meaningful for routes ending
/// there.
pub fn romania_straight_line_distances() -> StraightLineDistance {
    StraightLineDistance::from_table(DISTANCES_TO_BUCHAREST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_location_is_connected_and_estimated() {
        let map = romania();
        let heuristic = romania_straight_line_distances();
        assert_eq!(map.locations().len(), 20);
        for location in map.locations() {
            assert!(!map.possible_next_locations(location).is_empty());
            assert!(DISTANCES_TO_BUCHAREST
                .iter()
                .any(|&(known, _)| *location == known));
            assert!(heuristic.distance(location) >= 0.);
        }
    }

    #[test]
    fn straight_line_never_exceeds_road() {
        let map = romania();
        let heuristic = romania_straight_line_distances();
        for (a, b, distance) in ROADS {
            assert!(heuristic.distance(a) <= distance + heuristic.distance(b));
            assert!(heuristic.distance(b) <= distance + heuristic.distance(a));
        }
        assert_eq!(map.distance("Arad", "Sibiu"), Some(140.));
    }
}

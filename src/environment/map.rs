use std::collections::HashMap;

/// A road map: named locations joined by directed links with a distance.
/// Locations may carry a position in the plane, which is what straight-line
/// distance heuristics are computed from.
///
/// Links out of a location are kept in insertion order, and that order is
/// the order in which route problems offer their actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtendableMap {
    locations: Vec<String>,
    links: HashMap<String, Vec<(String, f64)>>,
    positions: HashMap<String, (f64, f64)>,
}

impl ExtendableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location without any links. Does nothing if it already exists.
    pub fn add_location(&mut self, location: &str) {
        if !self.contains(location) {
            self.locations.push(location.to_string());
        }
    }

    pub fn contains(&self, location: &str) -> bool {
        self.locations.iter().any(|known| known == location)
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn add_bidirectional_link(&mut self, a: &str, b: &str, distance: f64) {
        self.add_unidirectional_link(a, b, distance);
        self.add_unidirectional_link(b, a, distance);
    }

    /// Add a link from `from` to `to`, or change its distance if it exists.
    pub fn add_unidirectional_link(&mut self, from: &str, to: &str, distance: f64) {
        self.add_location(from);
        self.add_location(to);
        let links = self.links.entry(from.to_string()).or_default();
        match links.iter_mut().find(|(target, _)| target == to) {
            Some(link) => link.1 = distance,
            None => links.push((to.to_string(), distance)),
        }
    }

    /// Remove the links between `a` and `b` in both directions.
    pub fn remove_link(&mut self, a: &str, b: &str) {
        if let Some(links) = self.links.get_mut(a) {
            links.retain(|(target, _)| target != b);
        }
        if let Some(links) = self.links.get_mut(b) {
            links.retain(|(target, _)| target != a);
        }
    }

    /// Locations reachable from `location` over a single link.
    pub fn possible_next_locations(&self, location: &str) -> Vec<&str> {
        self.links
            .get(location)
            .map(|links| links.iter().map(|(target, _)| target.as_str()).collect())
            .unwrap_or_default()
    }

    /// Locations with a link into `location`, in the order the locations
    /// were added to the map.
    pub fn possible_prev_locations(&self, location: &str) -> Vec<&str> {
        self.locations
            .iter()
            .filter(|source| self.distance(source, location).is_some())
            .map(String::as_str)
            .collect()
    }

    /// Length of the direct link from `from` to `to`.
    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        self.links.get(from).and_then(|links| {
            links
                .iter()
                .find(|(target, _)| target == to)
                .map(|&(_, distance)| distance)
        })
    }

    pub fn set_position(&mut self, location: &str, x: f64, y: f64) {
        self.add_location(location);
        self.positions.insert(location.to_string(), (x, y));
    }

    pub fn position(&self, location: &str) -> Option<(f64, f64)> {
        self.positions.get(location).copied()
    }

    /// Euclidean distance between the positions of two locations, if both
    /// have one.
    pub fn straight_line_distance(&self, a: &str, b: &str) -> Option<f64> {
        let (ax, ay) = self.position(a)?;
        let (bx, by) = self.position(b)?;
        Some((ax - bx).hypot(ay - by))
    }
}

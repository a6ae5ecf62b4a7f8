use std::time::{Duration, Instant};
use tracing::info;

const LOG_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of nodes generated, kept or not
    generated_nodes: usize,
    /// Number of frontier entries replaced by a cheaper path to their state
    replaced_nodes: usize,
    /// Number of generated nodes dropped because their state was explored or
    /// already in the frontier
    pruned_nodes: usize,
    /// Largest frontier size seen
    max_frontier_size: usize,
    /// Largest number of nodes held in the search space at once
    max_stored_nodes: usize,
    /// Deepest recursion reached, for the recursive searches
    max_recursive_depth: usize,
    /// Cost of the returned plan, if any
    path_cost: Option<f64>,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            replaced_nodes: 0,
            pruned_nodes: 0,
            max_frontier_size: 0,
            max_stored_nodes: 0,
            max_recursive_depth: 0,
            path_cost: None,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_replaced_nodes(&mut self) {
        self.replaced_nodes += 1;
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
    }

    pub fn register_frontier_size(&mut self, frontier_size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(frontier_size);
    }

    pub fn register_stored_nodes(&mut self, stored_nodes: usize) {
        self.max_stored_nodes = self.max_stored_nodes.max(stored_nodes);
    }

    pub fn register_recursive_depth(&mut self, depth: usize) {
        self.max_recursive_depth = self.max_recursive_depth.max(depth);
    }

    pub fn set_path_cost(&mut self, path_cost: f64) {
        self.path_cost = Some(path_cost);
    }

    pub fn get_expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn get_generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn get_replaced_nodes(&self) -> usize {
        self.replaced_nodes
    }

    pub fn get_pruned_nodes(&self) -> usize {
        self.pruned_nodes
    }

    pub fn get_max_frontier_size(&self) -> usize {
        self.max_frontier_size
    }

    pub fn get_max_stored_nodes(&self) -> usize {
        self.max_stored_nodes
    }

    pub fn get_max_recursive_depth(&self) -> usize {
        self.max_recursive_depth
    }

    pub fn get_path_cost(&self) -> Option<f64> {
        self.path_cost
    }

    /// Fold the counters of another search into this one, e.g. the two
    /// directions of a bidirectional search. The earlier start time is kept.
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.expanded_nodes += other.expanded_nodes;
        self.generated_nodes += other.generated_nodes;
        self.replaced_nodes += other.replaced_nodes;
        self.pruned_nodes += other.pruned_nodes;
        self.max_frontier_size = self.max_frontier_size.max(other.max_frontier_size);
        self.max_stored_nodes = self.max_stored_nodes.max(other.max_stored_nodes);
        self.max_recursive_depth = self.max_recursive_depth.max(other.max_recursive_depth);
        self.search_start_time = self.search_start_time.min(other.search_start_time);
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > LOG_INTERVAL {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            replaced_nodes = self.replaced_nodes,
            pruned_nodes = self.pruned_nodes,
            max_frontier_size = self.max_frontier_size,
            max_stored_nodes = self.max_stored_nodes,
            max_recursive_depth = self.max_recursive_depth,
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        info!(
            path_cost = self.path_cost,
            search_duration = self.search_start_time.elapsed().as_secs_f64()
        );
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

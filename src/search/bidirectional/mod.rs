//! Bidirectional search runs a forward and a backward search concurrently.
//! Each direction publishes what it has generated in a lock-guarded view
//! that the other direction reads to detect a shared state; the first
//! direction to find one claims it atomically and the other stops.

mod bidirectional_search;
mod direction_strategy;
mod direction_view;
mod meeting;
mod path_merge;
mod worker;

pub use bidirectional_search::BidirectionalSearch;
pub use direction_strategy::DirectionStrategy;
pub use meeting::MeetingPolicy;

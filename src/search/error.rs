use thiserror::Error;

/// Errors raised by the search engines themselves. Running out of states to
/// expand is not an error, it is [`crate::search::SearchResult::Failure`].
#[derive(Debug, Error)]
pub enum SearchError {
    /// While stitching a bidirectional solution together, no action of the
    /// original problem led from one state of the backward path to the next.
    /// The reverse problem is then not the inverse of the original one.
    #[error("no action of the original problem leads from {from} to {to}")]
    IrreversibleStep { from: String, to: String },
    #[error("failed to build the bidirectional search thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Reasons for a plan to be rejected by [`crate::search::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("action {action} at step {step} is not applicable in state {state}")]
    NotApplicable {
        step: usize,
        action: String,
        state: String,
    },
    #[error("plan does not reach a goal state, final state is {state}")]
    GoalNotReached { state: String },
}

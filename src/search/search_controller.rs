use crate::search::{NodeId, Problem, SearchNode, SearchResult, SearchSpace};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A flag shared between a caller and a running search. The engines never set
/// it themselves; a caller that wants a time limit or an abort button cancels
/// the token from another thread and the search returns
/// [`SearchResult::Failure`] at its next iteration.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Shared plumbing of all search engines: goal testing, building the
/// success/failure values and telling a search loop whether to keep going.
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    token: CancellationToken,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: CancellationToken) -> Self {
        Self { token }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_goal<P>(&self, problem: &P, node: &SearchNode<P::State, P::Action>) -> bool
    where
        P: Problem + ?Sized,
    {
        problem.is_goal(node.get_state())
    }

    /// The plan leading from the root of `search_space` to `node_id`.
    pub fn solution<S, A: Clone>(
        &self,
        search_space: &SearchSpace<S, A>,
        node_id: NodeId,
    ) -> SearchResult<A> {
        SearchResult::Solution(search_space.extract_plan(node_id))
    }

    pub fn failure<A>(&self) -> SearchResult<A> {
        SearchResult::Failure
    }

    pub fn is_executing(&self) -> bool {
        !self.token.is_cancelled()
    }
}

use crate::search::Plan;
use strum_macros::EnumIs;

#[derive(Debug, Clone, PartialEq, Eq, EnumIs)]
pub enum SearchResult<A> {
    /// Executing the plan from the initial state reaches a goal. The plan may
    /// be empty when the initial state already is a goal.
    Solution(Plan<A>),
    /// The search ran out of states to expand, or was cancelled
    Failure,
}

impl<A> SearchResult<A> {
    pub fn plan(&self) -> Option<&Plan<A>> {
        match self {
            SearchResult::Solution(plan) => Some(plan),
            SearchResult::Failure => None,
        }
    }

    pub fn into_plan(self) -> Option<Plan<A>> {
        match self {
            SearchResult::Solution(plan) => Some(plan),
            SearchResult::Failure => None,
        }
    }
}

/// Outcome of a depth-limited search, which distinguishes an exhausted search
/// space from one that was cut off by the depth limit.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs)]
pub enum DepthLimitedResult<A> {
    Solution(Plan<A>),
    /// No solution exists within reach of the initial state
    Failure,
    /// The depth limit was hit before the space was exhausted, a solution may
    /// still exist deeper down
    Cutoff,
}

impl<A> From<DepthLimitedResult<A>> for SearchResult<A> {
    fn from(result: DepthLimitedResult<A>) -> Self {
        match result {
            DepthLimitedResult::Solution(plan) => SearchResult::Solution(plan),
            DepthLimitedResult::Failure | DepthLimitedResult::Cutoff => SearchResult::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_solution_is_not_failure() {
        let result: SearchResult<u32> = SearchResult::Solution(Plan::empty());
        assert!(result.is_solution());
        assert!(!result.is_failure());
        assert_ne!(result, SearchResult::Failure);
        assert_eq!(result.plan(), Some(&Plan::empty()));
    }

    #[test]
    fn cutoff_converts_to_failure() {
        let result: SearchResult<u32> = DepthLimitedResult::Cutoff.into();
        assert!(result.is_failure());
        let result: SearchResult<u32> = DepthLimitedResult::Solution(Plan::new(vec![1])).into();
        assert_eq!(result.into_plan(), Some(Plan::new(vec![1])));
    }
}

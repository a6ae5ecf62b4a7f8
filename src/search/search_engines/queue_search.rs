//! The one search loop shared by every frontier-based strategy. A strategy is
//! just a choice of frontier ordering, evaluation function, goal-test timing
//! and whether an explored set is kept.

use crate::search::{
    ExploredSet, Frontier, HeuristicValue, NodeEvaluation, NodeId, Problem, SearchController,
    SearchResult, SearchSpace, SearchStatistics,
};
use std::collections::HashMap;
use tracing::{debug, warn};

/// When the goal test is applied to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalTestTiming {
    /// Test children as soon as they are generated. Finds shallow solutions
    /// earlier, but is only correct when the first path found is good enough,
    /// e.g. breadth-first search.
    OnGeneration,
    /// Test nodes when they are popped from the frontier. Required when a
    /// node generated later may be cheaper, e.g. uniform-cost search and A*.
    OnExpansion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStrategy {
    pub goal_test: GoalTestTiming,
    /// Keep an explored set and discard children whose state was explored or
    /// is already waiting in the frontier.
    pub graph_search: bool,
    /// In graph search, replace a frontier entry whose state is reached
    /// again with a strictly lower priority instead of discarding the new
    /// path.
    pub replace_costlier: bool,
}

impl SearchStrategy {
    pub fn tree_search(goal_test: GoalTestTiming) -> Self {
        Self {
            goal_test,
            graph_search: false,
            replace_costlier: false,
        }
    }

    pub fn graph_search(goal_test: GoalTestTiming) -> Self {
        Self {
            goal_test,
            graph_search: true,
            replace_costlier: false,
        }
    }

    pub fn replacing_costlier(self) -> Self {
        Self {
            replace_costlier: true,
            ..self
        }
    }
}

/// Run a search with the given frontier, evaluation and strategy. The
/// frontier is expected to be empty; the search space and explored set are
/// created here and dropped on return.
pub fn queue_search<P, E>(
    problem: &P,
    frontier: &mut dyn Frontier,
    evaluation: &mut E,
    strategy: SearchStrategy,
    controller: &SearchController,
) -> (SearchResult<P::Action>, SearchStatistics)
where
    P: Problem + ?Sized,
    E: NodeEvaluation<P::State, P::Action> + ?Sized,
{
    debug!(?strategy, "starting queue search");
    let mut statistics = SearchStatistics::new();
    let mut search_space = SearchSpace::new(problem.initial_state());
    let root_id = search_space.get_root_id();

    if controller.is_goal(problem, &search_space[root_id]) {
        return solved(controller, &search_space, root_id, statistics);
    }

    let mut explored = strategy.graph_search.then(ExploredSet::new);
    // State of every node currently in the frontier, with its priority.
    // Only maintained for graph search.
    let mut frontier_index: HashMap<P::State, (NodeId, HeuristicValue)> = HashMap::new();

    let root_priority = evaluation.evaluate(&search_space[root_id]);
    frontier.push(root_id, root_priority);
    if explored.is_some() {
        frontier_index.insert(
            search_space.get_state(root_id).clone(),
            (root_id, root_priority),
        );
    }
    statistics.register_frontier_size(frontier.len());

    while controller.is_executing() {
        let Some(node_id) = frontier.pop() else {
            debug!("frontier exhausted");
            return failed(controller, statistics);
        };

        let state = search_space.get_state(node_id).clone();
        if let Some(explored) = explored.as_mut() {
            frontier_index.remove(&state);
            explored.insert(state.clone());
        }

        if strategy.goal_test == GoalTestTiming::OnExpansion
            && controller.is_goal(problem, &search_space[node_id])
        {
            return solved(controller, &search_space, node_id, statistics);
        }

        statistics.increment_expanded_nodes();
        let actions = problem.actions(&state);
        statistics.increment_generated_nodes(actions.len());

        for action in actions {
            let child = search_space.make_child(problem, node_id, action);

            if let Some(explored) = explored.as_ref() {
                if explored.contains(child.get_state()) {
                    statistics.increment_pruned_nodes();
                    continue;
                }
                if let Some(&(existing_id, existing_priority)) =
                    frontier_index.get(child.get_state())
                {
                    let priority = evaluation.evaluate(&child);
                    if strategy.replace_costlier && priority < existing_priority {
                        frontier.remove(existing_id);
                        let child_state = child.get_state().clone();
                        let child_id = search_space.insert(child);
                        frontier.push(child_id, priority);
                        frontier_index.insert(child_state, (child_id, priority));
                        statistics.increment_replaced_nodes();
                    } else {
                        statistics.increment_pruned_nodes();
                    }
                    continue;
                }
            }

            if strategy.goal_test == GoalTestTiming::OnGeneration
                && controller.is_goal(problem, &child)
            {
                let child_id = search_space.insert(child);
                return solved(controller, &search_space, child_id, statistics);
            }

            let priority = evaluation.evaluate(&child);
            let child_state = explored.is_some().then(|| child.get_state().clone());
            let child_id = search_space.insert(child);
            frontier.push(child_id, priority);
            if let Some(child_state) = child_state {
                frontier_index.insert(child_state, (child_id, priority));
            }
        }
        statistics.register_frontier_size(frontier.len());
        statistics.register_stored_nodes(search_space.len());
    }

    warn!("search cancelled");
    failed(controller, statistics)
}

/// Wrap up a successful search ending at `goal_id`.
pub(crate) fn solved<S, A: Clone>(
    controller: &SearchController,
    search_space: &SearchSpace<S, A>,
    goal_id: NodeId,
    mut statistics: SearchStatistics,
) -> (SearchResult<A>, SearchStatistics) {
    statistics.set_path_cost(search_space[goal_id].get_path_cost());
    statistics.finalise_search();
    (controller.solution(search_space, goal_id), statistics)
}

pub(crate) fn failed<A>(
    controller: &SearchController,
    mut statistics: SearchStatistics,
) -> (SearchResult<A>, SearchStatistics) {
    statistics.finalise_search();
    (controller.failure(), statistics)
}

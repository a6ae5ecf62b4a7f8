use crate::search::{
    bidirectional::{
        direction_view::DirectionView,
        meeting::{Meeting, MeetingClaim},
        DirectionStrategy,
    },
    ExploredSet, HeuristicValue, NodeId, Problem, SearchController, SearchStatistics,
};
use parking_lot::RwLock;
use std::{collections::HashMap, hash::Hash};
use strum_macros::Display;
use tracing::{debug, info, info_span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// One direction of a bidirectional search. The worker owns its frontier and
/// explored set, writes only to its own view and reads the other one.
pub(crate) struct DirectionWorker<'a, S, A> {
    pub direction: Direction,
    pub view: &'a RwLock<DirectionView<S, A>>,
    pub other: &'a RwLock<DirectionView<S, A>>,
    pub claim: &'a MeetingClaim,
    pub controller: &'a SearchController,
}

impl<S, A> DirectionWorker<'_, S, A>
where
    S: Clone + Eq + Hash,
    A: Clone,
{
    pub fn run<P>(&self, problem: &P, strategy: &mut DirectionStrategy<S>) -> SearchStatistics
    where
        P: Problem<State = S, Action = A> + ?Sized,
    {
        let _span = info_span!("direction", direction = %self.direction).entered();
        let mut statistics = SearchStatistics::new();
        let mut frontier = strategy.frontier();
        let replace_costlier = strategy.replaces_costlier();
        let mut evaluation = strategy.evaluation::<A>();
        let mut explored = ExploredSet::new();
        let mut frontier_index: HashMap<S, (NodeId, HeuristicValue)> = HashMap::new();

        {
            let view = self.view.read();
            for &root_id in view.search_space.get_root_ids() {
                let priority = evaluation.evaluate(&view.search_space[root_id]);
                frontier.push(root_id, priority);
                frontier_index.insert(
                    view.search_space.get_state(root_id).clone(),
                    (root_id, priority),
                );
            }
        }
        statistics.register_frontier_size(frontier.len());

        'search: while !self.claim.is_claimed() && self.controller.is_executing() {
            let Some(node_id) = frontier.pop() else {
                debug!("frontier exhausted");
                self.view.write().mark_exhausted();
                self.sweep();
                // Every state reachable from the initial state has been
                // goal-tested, so there is nothing left for the backward
                // direction to find.
                if self.direction == Direction::Forward && self.claim.give_up() {
                    info!("no goal reachable from the initial state");
                }
                break;
            };

            let node = self.view.read().search_space[node_id].clone();
            frontier_index.remove(node.get_state());
            explored.insert(node.get_state().clone());

            statistics.increment_expanded_nodes();
            let actions = problem.actions(node.get_state());
            statistics.increment_generated_nodes(actions.len());

            for action in actions {
                let child = self
                    .view
                    .read()
                    .search_space
                    .make_child(problem, node_id, action);
                if explored.contains(child.get_state()) {
                    statistics.increment_pruned_nodes();
                    continue;
                }
                let priority = evaluation.evaluate(&child);
                let replaced = match frontier_index.get(child.get_state()) {
                    None => None,
                    Some(&(existing_id, existing_priority))
                        if replace_costlier && priority < existing_priority =>
                    {
                        Some(existing_id)
                    }
                    Some(_) => {
                        statistics.increment_pruned_nodes();
                        continue;
                    }
                };

                if self.claim.is_claimed() {
                    break 'search;
                }
                let child_state = child.get_state().clone();
                let child_id = self.view.write().publish(child, replaced);
                if let Some(existing_id) = replaced {
                    frontier.remove(existing_id);
                    statistics.increment_replaced_nodes();
                }
                frontier.push(child_id, priority);
                frontier_index.insert(child_state.clone(), (child_id, priority));

                if self.direction == Direction::Forward && problem.is_goal(&child_state) {
                    self.report(Meeting {
                        forward: child_id,
                        backward: None,
                    });
                    break 'search;
                }
                let other_id = self.other.read().find_meeting(&child_state);
                if let Some(other_id) = other_id {
                    self.meet(child_id, other_id);
                    break 'search;
                }
            }

            self.view.write().close(node_id, frontier.is_empty());
            statistics.register_frontier_size(frontier.len());
        }

        statistics.finalise_search();
        statistics
    }

    /// Once this direction has generated everything reachable from its
    /// roots, pair up any state the other direction has generated as well.
    /// Catches meetings the policy missed while both were still running.
    fn sweep(&self) {
        let found = {
            let other = self.other.read();
            let view = self.view.read();
            let found = other.generated().find_map(|(state, other_id)| {
                view.generated_node(state).map(|own_id| (own_id, other_id))
            });
            found
        };
        if let Some((own_id, other_id)) = found {
            self.meet(own_id, other_id);
        }
    }

    fn meet(&self, own_id: NodeId, other_id: NodeId) {
        let meeting = match self.direction {
            Direction::Forward => Meeting {
                forward: own_id,
                backward: Some(other_id),
            },
            Direction::Backward => Meeting {
                forward: other_id,
                backward: Some(own_id),
            },
        };
        self.report(meeting);
    }

    fn report(&self, meeting: Meeting) {
        if self.claim.claim(meeting) {
            info!(?meeting, "found meeting");
        } else {
            debug!("meeting already claimed by the other direction");
        }
    }
}

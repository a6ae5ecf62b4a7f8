use crate::search::{
    bidirectional::{
        direction_view::DirectionView,
        meeting::{Meeting, MeetingClaim},
        path_merge::merge_paths,
        worker::{Direction, DirectionWorker},
        DirectionStrategy, MeetingPolicy,
    },
    BidirectionalProblem, Plan, Problem, SearchController, SearchError, SearchResult,
    SearchStatistics,
};
use parking_lot::RwLock;
use std::{fmt::Debug, hash::Hash};
use tracing::{info, warn};

/// Searches forward from the initial state and backward from the goal
/// states at the same time, on a pool of two threads, and stops as soon as
/// either direction generates a state the other one has reached.
///
/// Which meeting is found first depends on thread timing, so the returned
/// plan is valid but neither optimal nor deterministic when several meeting
/// states exist.
#[derive(Debug)]
pub struct BidirectionalSearch<S> {
    forward: DirectionStrategy<S>,
    backward: DirectionStrategy<S>,
    meeting_policy: MeetingPolicy,
    controller: SearchController,
}

impl<S> BidirectionalSearch<S>
where
    S: Clone + Eq + Hash + Debug + Send + Sync,
{
    /// Breadth-first in both directions with the default meeting policy.
    pub fn new() -> Self {
        Self::with_strategies(DirectionStrategy::BreadthFirst, DirectionStrategy::BreadthFirst)
    }

    pub fn with_strategies(forward: DirectionStrategy<S>, backward: DirectionStrategy<S>) -> Self {
        Self {
            forward,
            backward,
            meeting_policy: MeetingPolicy::default(),
            controller: SearchController::new(),
        }
    }

    pub fn with_meeting_policy(self, meeting_policy: MeetingPolicy) -> Self {
        Self {
            meeting_policy,
            ..self
        }
    }

    pub fn with_controller(self, controller: SearchController) -> Self {
        Self { controller, ..self }
    }

    pub fn search<P, R>(
        &mut self,
        problem: &BidirectionalProblem<P, R>,
    ) -> Result<(SearchResult<P::Action>, SearchStatistics), SearchError>
    where
        P: Problem<State = S> + Sync,
        R: Problem<State = S, Action = P::Action> + Sync,
        P::Action: Send + Sync,
    {
        info!(
            forward = ?self.forward,
            backward = ?self.backward,
            meeting_policy = ?self.meeting_policy,
            "starting bidirectional search"
        );
        let original = problem.original();
        let initial_state = original.initial_state();
        if original.is_goal(&initial_state) {
            let mut statistics = SearchStatistics::new();
            statistics.set_path_cost(0.);
            statistics.finalise_search();
            return Ok((SearchResult::Solution(Plan::empty()), statistics));
        }

        let forward_view = RwLock::new(DirectionView::new(
            vec![initial_state.clone()],
            self.meeting_policy,
        ));
        let backward_view = RwLock::new(DirectionView::new(
            problem.backward_roots(),
            self.meeting_policy,
        ));
        let claim = MeetingClaim::new();

        // A backward root may be the initial state without passing the goal
        // test, the workers then have nothing left to do.
        let root_meeting = backward_view.read().generated_node(&initial_state);
        if let Some(backward_id) = root_meeting {
            let forward_id = forward_view.read().search_space.get_root_id();
            claim.claim(Meeting {
                forward: forward_id,
                backward: Some(backward_id),
            });
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(2)
            .thread_name(|index| format!("bidirectional-{}", index))
            .build()?;

        let forward_worker = DirectionWorker {
            direction: Direction::Forward,
            view: &forward_view,
            other: &backward_view,
            claim: &claim,
            controller: &self.controller,
        };
        let backward_worker = DirectionWorker {
            direction: Direction::Backward,
            view: &backward_view,
            other: &forward_view,
            claim: &claim,
            controller: &self.controller,
        };
        let forward_strategy = &mut self.forward;
        let backward_strategy = &mut self.backward;
        let reverse = problem.reverse();
        let (mut statistics, backward_statistics) = pool.join(
            move || forward_worker.run(original, forward_strategy),
            move || backward_worker.run(reverse, backward_strategy),
        );
        statistics.merge(&backward_statistics);

        let Some(meeting) = claim.into_meeting() else {
            if self.controller.is_executing() {
                info!("directions never met");
            } else {
                warn!("search cancelled");
            }
            statistics.finalise_search();
            return Ok((SearchResult::Failure, statistics));
        };

        let forward_view = forward_view.into_inner();
        let backward_view = backward_view.into_inner();
        let plan = merge_paths(
            original,
            &forward_view.search_space,
            &backward_view.search_space,
            meeting,
        )?;
        statistics.set_path_cost(plan.cost(original));
        statistics.finalise_search();
        Ok((SearchResult::Solution(plan), statistics))
    }
}

impl<S> Default for BidirectionalSearch<S>
where
    S: Clone + Eq + Hash + Debug + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{romania, romania_straight_line_distances, RouteProblem};
    use crate::search::{validate, FnHeuristic};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn bidirectional(problem: GraphProblem) -> BidirectionalProblem<GraphProblem, GraphProblem> {
        let reverse = problem.reversed();
        BidirectionalProblem::new(problem, reverse)
    }

    fn all_policies() -> [MeetingPolicy; 3] {
        [
            MeetingPolicy::Overrun(0),
            MeetingPolicy::Overrun(1),
            MeetingPolicy::AnyGenerated,
        ]
    }

    #[test]
    fn two_node_graph_takes_one_step() {
        let problem = bidirectional(two_node_graph());
        for policy in all_policies() {
            let (result, statistics) = BidirectionalSearch::new()
                .with_meeting_policy(policy)
                .search(&problem)
                .unwrap();
            assert_eq!(result.into_plan().unwrap().steps(), &[Move::to("B")]);
            assert_eq!(statistics.get_path_cost(), Some(1.));
        }
    }

    #[test]
    fn line_graph_plan_is_valid() {
        let problem = bidirectional(line_graph());
        for policy in all_policies() {
            let (result, _) = BidirectionalSearch::new()
                .with_meeting_policy(policy)
                .search(&problem)
                .unwrap();
            let plan = result.into_plan().unwrap();
            assert_eq!(validate(&plan, problem.original()), Ok(6.));
        }
    }

    #[test]
    fn disconnected_graph_fails() {
        let problem = bidirectional(disconnected_graph());
        for policy in all_policies() {
            let (result, _) = BidirectionalSearch::new()
                .with_meeting_policy(policy)
                .search(&problem)
                .unwrap();
            assert!(result.is_failure());
        }
    }

    #[test]
    fn initial_goal_is_empty_plan() {
        let problem = bidirectional(already_at_goal());
        let (result, statistics) = BidirectionalSearch::new().search(&problem).unwrap();
        assert_eq!(result, SearchResult::Solution(Plan::empty()));
        assert_eq!(statistics.get_expanded_nodes(), 0);
    }

    #[test]
    fn backward_roots_from_goal_states() {
        // Two goals, E only reachable through a one-way edge
        let problem = GraphProblem::new("A", &["D", "E"])
            .two_way("A", "B", 1.)
            .two_way("B", "C", 1.)
            .two_way("C", "D", 1.)
            .edge("B", "E", 5.);
        let reverse = problem.reversed();
        let problem = BidirectionalProblem::with_goal_states(problem, reverse, vec!["D", "E"]);
        let (result, _) = BidirectionalSearch::new().search(&problem).unwrap();
        let plan = result.into_plan().unwrap();
        assert!(validate(&plan, problem.original()).is_ok());
    }

    #[test]
    fn inconsistent_reverse_problem_is_an_error() {
        let original = GraphProblem::new("A", &["C"]).two_way("A", "B", 1.);
        let reverse = GraphProblem::new("C", &["A"]).edge("C", "B", 1.);
        let problem = BidirectionalProblem::new(original, reverse);
        let error = BidirectionalSearch::new().search(&problem).unwrap_err();
        assert!(matches!(error, SearchError::IrreversibleStep { .. }));
    }

    #[test]
    fn cancelled_search_fails() {
        let problem = bidirectional(line_graph());
        let controller = SearchController::new();
        controller.token().cancel();
        let (result, statistics) = BidirectionalSearch::new()
            .with_controller(controller)
            .search(&problem)
            .unwrap();
        assert!(result.is_failure());
        assert_eq!(statistics.get_expanded_nodes(), 0);
    }

    #[test]
    fn romania_with_every_strategy_pair() {
        let map = romania();
        let problem = BidirectionalProblem::new(
            RouteProblem::new(&map, "Arad", "Bucharest"),
            RouteProblem::new(&map, "Arad", "Bucharest").reversed(),
        );
        let strategies = || {
            vec![
                DirectionStrategy::BreadthFirst,
                DirectionStrategy::UniformCost,
                DirectionStrategy::AStar(Box::new(romania_straight_line_distances())),
            ]
        };
        for forward_index in 0..3 {
            for backward in strategies() {
                let forward = strategies().swap_remove(forward_index);
                let mut engine = BidirectionalSearch::with_strategies(forward, backward);
                let (result, statistics) = engine.search(&problem).unwrap();
                let plan = result.into_plan().unwrap();
                let cost = validate(&plan, problem.original()).unwrap();
                assert_approx_eq!(statistics.get_path_cost().unwrap(), cost);
                assert!(cost >= 418.);
            }
        }
    }

    #[test]
    fn backward_heuristic_is_evaluated() {
        let problem = bidirectional(line_graph());
        let mut engine = BidirectionalSearch::with_strategies(
            DirectionStrategy::UniformCost,
            DirectionStrategy::AStar(Box::new(FnHeuristic::new("to-a", |state: &&str| {
                match *state {
                    "D" => 6.,
                    "C" => 3.,
                    "B" => 1.,
                    _ => 0.,
                }
            }))),
        );
        let (result, _) = engine.search(&problem).unwrap();
        assert_eq!(validate(&result.into_plan().unwrap(), problem.original()), Ok(6.));
    }

    /// 0 -> 1 -> 2 -> 3 and no further, with a goal that is never reached.
    #[derive(Debug)]
    struct ShortLine;

    impl Problem for ShortLine {
        type State = u64;
        type Action = u64;

        fn initial_state(&self) -> u64 {
            0
        }

        fn actions(&self, state: &u64) -> Vec<u64> {
            if *state < 3 {
                vec![1]
            } else {
                vec![]
            }
        }

        fn result(&self, state: &u64, action: &u64) -> u64 {
            state + action
        }

        fn is_goal(&self, state: &u64) -> bool {
            *state == 100
        }

        fn step_cost(&self, _state: &u64, _action: &u64) -> f64 {
            1.
        }
    }

    #[test]
    fn exhausted_forward_direction_stops_endless_backward_direction() {
        let problem = BidirectionalProblem::with_goal_states(ShortLine, endless_line(), vec![100]);
        let (result, statistics) = BidirectionalSearch::new().search(&problem).unwrap();
        assert!(result.is_failure());
        assert!(statistics.get_expanded_nodes() >= 4);
    }
}

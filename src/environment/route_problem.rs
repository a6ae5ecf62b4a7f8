use crate::{
    environment::ExtendableMap,
    search::{BidirectionalProblem, Problem},
};

/// Drive to a neighbouring location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveTo(String);

impl MoveTo {
    pub fn new(destination: impl Into<String>) -> Self {
        Self(destination.into())
    }

    pub fn destination(&self) -> &str {
        &self.0
    }
}

/// Find a route between locations of an [`ExtendableMap`]. The step cost of
/// a move is the length of the link it follows.
///
/// A reversed problem walks links against their direction, starting at a
/// goal, which is what the backward half of a bidirectional search needs on
/// maps with one-way links.
#[derive(Debug, Clone)]
pub struct RouteProblem<'m> {
    map: &'m ExtendableMap,
    initial: String,
    goals: Vec<String>,
    reversed: bool,
}

impl<'m> RouteProblem<'m> {
    pub fn new(map: &'m ExtendableMap, initial: &str, goal: &str) -> Self {
        Self::with_goals(map, initial, &[goal])
    }

    /// A route to whichever of the goals is reached first. `goals` must not
    /// be empty.
    pub fn with_goals(map: &'m ExtendableMap, initial: &str, goals: &[&str]) -> Self {
        debug_assert!(!goals.is_empty(), "a route problem needs a goal");
        Self {
            map,
            initial: initial.to_string(),
            goals: goals.iter().map(|goal| goal.to_string()).collect(),
            reversed: false,
        }
    }

    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    /// The problem of getting from the first goal back to the initial
    /// location along reversed links.
    pub fn reversed(&self) -> Self {
        Self {
            map: self.map,
            initial: self.goals[0].clone(),
            goals: vec![self.initial.clone()],
            reversed: !self.reversed,
        }
    }

    /// Pair the problem with its reverse, rooting the backward search at
    /// every goal.
    pub fn bidirectional(self) -> BidirectionalProblem<Self, Self> {
        let reverse = self.reversed();
        let goals = self.goals.clone();
        BidirectionalProblem::with_goal_states(self, reverse, goals)
    }
}

impl Problem for RouteProblem<'_> {
    type State = String;
    type Action = MoveTo;

    fn initial_state(&self) -> Self::State {
        self.initial.clone()
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        let neighbours = if self.reversed {
            self.map.possible_prev_locations(state)
        } else {
            self.map.possible_next_locations(state)
        };
        neighbours.into_iter().map(MoveTo::new).collect()
    }

    fn result(&self, _state: &Self::State, action: &Self::Action) -> Self::State {
        action.destination().to_string()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.goals.contains(state)
    }

    fn step_cost(&self, state: &Self::State, action: &Self::Action) -> f64 {
        let distance = if self.reversed {
            self.map.distance(action.destination(), state)
        } else {
            self.map.distance(state, action.destination())
        };
        distance.unwrap_or_else(|| panic!("no link from {} to {}", state, action.destination()))
    }
}

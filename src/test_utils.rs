use crate::search::Problem;
use std::fmt;

/// Move to the named vertex of a [`GraphProblem`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(&'static str);

impl Move {
    pub fn to(target: &'static str) -> Self {
        Self(target)
    }

    pub fn target(self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "to{}", self.0)
    }
}

/// A small explicit directed graph. Actions out of a vertex are listed in the
/// order their edges were added.
#[derive(Debug, Clone)]
pub struct GraphProblem {
    initial: &'static str,
    goals: Vec<&'static str>,
    edges: Vec<(&'static str, &'static str, f64)>,
}

impl GraphProblem {
    pub fn new(initial: &'static str, goals: &[&'static str]) -> Self {
        Self {
            initial,
            goals: goals.to_vec(),
            edges: vec![],
        }
    }

    pub fn edge(mut self, from: &'static str, to: &'static str, cost: f64) -> Self {
        self.edges.push((from, to, cost));
        self
    }

    pub fn two_way(self, a: &'static str, b: &'static str, cost: f64) -> Self {
        self.edge(a, b, cost).edge(b, a, cost)
    }

    /// The same graph with every edge flipped, searching from the first goal
    /// back to the initial vertex.
    pub fn reversed(&self) -> Self {
        Self {
            initial: self.goals[0],
            goals: vec![self.initial],
            edges: self
                .edges
                .iter()
                .map(|&(from, to, cost)| (to, from, cost))
                .collect(),
        }
    }
}

impl Problem for GraphProblem {
    type State = &'static str;
    type Action = Move;

    fn initial_state(&self) -> Self::State {
        self.initial
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|&(_, to, _)| Move::to(to))
            .collect()
    }

    fn result(&self, _state: &Self::State, action: &Self::Action) -> Self::State {
        action.target()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.goals.contains(state)
    }

    fn step_cost(&self, state: &Self::State, action: &Self::Action) -> f64 {
        self.edges
            .iter()
            .find(|&&(from, to, _)| from == *state && to == action.target())
            .map(|&(_, _, cost)| cost)
            .unwrap_or_else(|| panic!("No edge from {} to {}", state, action.target()))
    }
}

/// A <-> B with cost 1, goal B.
pub fn two_node_graph() -> GraphProblem {
    GraphProblem::new("A", &["B"]).two_way("A", "B", 1.)
}

/// A - B - C - D with costs 1, 2 and 3, goal D.
pub fn line_graph() -> GraphProblem {
    GraphProblem::new("A", &["D"])
        .two_way("A", "B", 1.)
        .two_way("B", "C", 2.)
        .two_way("C", "D", 3.)
}

/// A - B and C - D with no way across, goal D.
pub fn disconnected_graph() -> GraphProblem {
    GraphProblem::new("A", &["D"])
        .two_way("A", "B", 1.)
        .two_way("C", "D", 1.)
}

pub fn already_at_goal() -> GraphProblem {
    GraphProblem::new("A", &["A"]).two_way("A", "B", 1.)
}

/// The direct edge A -> C is tried first but the detour through B is
/// cheaper, so the best plan is B, C, D with cost 3.
pub fn cheaper_path_found_later() -> GraphProblem {
    GraphProblem::new("A", &["D"])
        .edge("A", "C", 10.)
        .edge("A", "B", 1.)
        .edge("B", "C", 1.)
        .edge("C", "D", 1.)
}

/// Every pair of A, B, C and D joined with cost 1, goal E which is not part
/// of the graph.
pub fn complete_graph() -> GraphProblem {
    GraphProblem::new("A", &["E"])
        .two_way("A", "B", 1.)
        .two_way("A", "C", 1.)
        .two_way("A", "D", 1.)
        .two_way("B", "C", 1.)
        .two_way("B", "D", 1.)
        .two_way("C", "D", 1.)
}

/// Counts upwards forever without ever reaching a goal.
#[derive(Debug, Clone, Copy)]
pub struct EndlessLine;

impl Problem for EndlessLine {
    type State = u64;
    type Action = u64;

    fn initial_state(&self) -> Self::State {
        0
    }

    fn actions(&self, _state: &Self::State) -> Vec<Self::Action> {
        vec![1]
    }

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        state + action
    }

    fn is_goal(&self, _state: &Self::State) -> bool {
        false
    }

    fn step_cost(&self, _state: &Self::State, _action: &Self::Action) -> f64 {
        1.
    }
}

pub fn endless_line() -> EndlessLine {
    EndlessLine
}

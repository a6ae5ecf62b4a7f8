//! The [`Problem`] trait is the only thing the search engines know about the
//! domain they are searching in. Engines never mutate a problem, and the
//! bidirectional engine additionally requires it to be [`Sync`] so that both
//! directions can query it at the same time.

use std::{fmt::Debug, hash::Hash};

pub trait Problem {
    /// States are compared by value. Equality and hashing must be total and
    /// free of side effects, they are used for frontier membership, explored
    /// sets and meeting detection.
    type State: Clone + Eq + Hash + Debug;
    /// Actions are plain values, compared by equality.
    type Action: Clone + Eq + Debug;

    fn initial_state(&self) -> Self::State;

    /// The legal actions in the given state, in the order they should be
    /// tried. An empty list means the state is a dead end.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying a legal action.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Cost of applying `action` in `state`, expected to be non-negative.
    fn step_cost(&self, state: &Self::State, action: &Self::Action) -> f64;
}

impl<P: Problem + ?Sized> Problem for &P {
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> Self::State {
        (**self).initial_state()
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        (**self).actions(state)
    }

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        (**self).result(state, action)
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        (**self).is_goal(state)
    }

    fn step_cost(&self, state: &Self::State, action: &Self::Action) -> f64 {
        (**self).step_cost(state, action)
    }
}

/// A problem paired with its logical reverse, as consumed by
/// [`crate::search::bidirectional::BidirectionalSearch`].
///
/// The reverse problem's actions and results must be the inverse of the
/// original transition relation; the engine does not compute this. The
/// backward search is rooted at `goal_states`, or at the reverse problem's
/// initial state when no goal states are given.
#[derive(Debug, Clone)]
pub struct BidirectionalProblem<P, R>
where
    P: Problem,
    R: Problem<State = P::State, Action = P::Action>,
{
    original: P,
    reverse: R,
    goal_states: Vec<P::State>,
}

impl<P, R> BidirectionalProblem<P, R>
where
    P: Problem,
    R: Problem<State = P::State, Action = P::Action>,
{
    pub fn new(original: P, reverse: R) -> Self {
        Self {
            original,
            reverse,
            goal_states: vec![],
        }
    }

    pub fn with_goal_states(original: P, reverse: R, goal_states: Vec<P::State>) -> Self {
        Self {
            original,
            reverse,
            goal_states,
        }
    }

    pub fn original(&self) -> &P {
        &self.original
    }

    pub fn reverse(&self) -> &R {
        &self.reverse
    }

    /// The states the backward search starts from.
    pub fn backward_roots(&self) -> Vec<P::State> {
        if self.goal_states.is_empty() {
            vec![self.reverse.initial_state()]
        } else {
            self.goal_states.clone()
        }
    }
}

//! A plan is a sequence of actions that can be executed to achieve a goal. This
//! module provides the [`Plan`] struct, which represents a plan.

use crate::search::Problem;
use itertools::Itertools;
use std::fmt::{Debug, Display};
use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    steps: Vec<A>,
}

impl<A> Plan<A> {
    /// The zero-step plan, a valid solution when the initial state is already
    /// a goal.
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<A>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[A] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append another plan, used when joining the two halves of a
    /// bidirectional solution.
    pub fn extend(&mut self, other: Plan<A>) {
        self.steps.extend(other.steps);
    }

    /// Sum of the step costs of executing the plan from the problem's
    /// initial state. Does not check that the actions are applicable, see
    /// [`crate::search::validate`] for that.
    pub fn cost<P>(&self, problem: &P) -> f64
    where
        P: Problem<Action = A> + ?Sized,
    {
        let mut state = problem.initial_state();
        let mut cost = 0.;
        for action in &self.steps {
            cost += problem.step_cost(&state, action);
            state = problem.result(&state, action);
        }
        cost
    }
}

impl<A: Debug> Display for Plan<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.steps.iter().map(|step| format!("{:?}", step)).join(", "))
    }
}

impl<A> IntoIterator for Plan<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<A> Deref for Plan<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl<A> DerefMut for Plan<A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.steps
    }
}

impl<A> From<Vec<A>> for Plan<A> {
    fn from(steps: Vec<A>) -> Self {
        Self::new(steps)
    }
}

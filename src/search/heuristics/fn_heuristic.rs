use crate::search::{Heuristic, HeuristicValue};
use std::fmt::Debug;

/// Adapts a plain function or closure into a [`Heuristic`].
pub struct FnHeuristic<F> {
    name: &'static str,
    function: F,
}

impl<F> FnHeuristic<F> {
    pub fn new(name: &'static str, function: F) -> Self {
        Self { name, function }
    }
}

impl<F> Debug for FnHeuristic<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnHeuristic").field("name", &self.name).finish()
    }
}

impl<S, F> Heuristic<S> for FnHeuristic<F>
where
    F: FnMut(&S) -> f64,
{
    fn evaluate(&mut self, state: &S) -> HeuristicValue {
        (self.function)(state).into()
    }
}

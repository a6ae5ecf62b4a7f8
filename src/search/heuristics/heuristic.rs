use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

/// An estimate of the remaining cost from a state to the nearest goal.
///
/// Informed searches only need the estimate to be finite and non-negative;
/// A* additionally needs it to be admissible to return optimal plans. None of
/// this is checked by the engines.
pub trait Heuristic<S>: Debug {
    /// Evaluate the given state.
    fn evaluate(&mut self, state: &S) -> HeuristicValue;
}

impl<S, H: Heuristic<S> + ?Sized> Heuristic<S> for Box<H> {
    fn evaluate(&mut self, state: &S) -> HeuristicValue {
        (**self).evaluate(state)
    }
}

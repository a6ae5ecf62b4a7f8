use crate::search::{
    bidirectional::meeting::Meeting, HeuristicValue, Plan, Problem, SearchError, SearchSpace,
};
use tracing::trace;

/// Join the forward path to the meeting state with the backward path from it.
/// The backward half is replayed with the original problem's actions: at
/// each step the cheapest action leading to the next state of the backward
/// chain is taken.
pub(crate) fn merge_paths<P>(
    original: &P,
    forward_space: &SearchSpace<P::State, P::Action>,
    backward_space: &SearchSpace<P::State, P::Action>,
    meeting: Meeting,
) -> Result<Plan<P::Action>, SearchError>
where
    P: Problem + ?Sized,
{
    let mut plan = forward_space.extract_plan(meeting.forward);
    let Some(backward_id) = meeting.backward else {
        return Ok(plan);
    };

    let mut state = forward_space.get_state(meeting.forward).clone();
    let mut steps = vec![];
    for next_id in backward_space.ancestors(backward_id).skip(1) {
        let next_state = backward_space.get_state(next_id);
        let action = original
            .actions(&state)
            .into_iter()
            .filter(|action| original.result(&state, action) == *next_state)
            .min_by_key(|action| HeuristicValue::from(original.step_cost(&state, action)))
            .ok_or_else(|| SearchError::IrreversibleStep {
                from: format!("{:?}", state),
                to: format!("{:?}", next_state),
            })?;
        steps.push(action);
        state = next_state.clone();
    }
    plan.extend(Plan::new(steps));
    trace!(%plan, "merged forward and backward paths");
    Ok(plan)
}

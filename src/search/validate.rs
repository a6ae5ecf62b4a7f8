use crate::search::{Plan, PlanError, Problem};

/// Replay the plan from the problem's initial state, checking that every
/// action is legal where it is applied and that the final state is a goal.
/// Returns the total cost of the plan.
pub fn validate<P>(plan: &Plan<P::Action>, problem: &P) -> Result<f64, PlanError>
where
    P: Problem + ?Sized,
{
    let mut cur_state = problem.initial_state();
    let mut cost = 0.;
    for (step, action) in plan.steps().iter().enumerate() {
        if !problem.actions(&cur_state).contains(action) {
            return Err(PlanError::NotApplicable {
                step,
                action: format!("{:?}", action),
                state: format!("{:?}", cur_state),
            });
        }

        cost += problem.step_cost(&cur_state, action);
        cur_state = problem.result(&cur_state, action);
    }

    if !problem.is_goal(&cur_state) {
        return Err(PlanError::GoalNotReached {
            state: format!("{:?}", cur_state),
        });
    }

    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn validate_good_plan_ok() {
        let problem = line_graph();
        let plan = Plan::new(vec![Move::to("B"), Move::to("C"), Move::to("D")]);
        assert_eq!(validate(&plan, &problem), Ok(6.));
    }

    #[test]
    fn validate_empty_plan_at_goal() {
        let problem = already_at_goal();
        assert_eq!(validate(&Plan::empty(), &problem), Ok(0.));
    }

    #[test]
    fn validate_bad_plan_not_applicable() {
        let problem = line_graph();
        let plan = Plan::new(vec![Move::to("B"), Move::to("D")]);
        assert_eq!(
            validate(&plan, &problem),
            Err(PlanError::NotApplicable {
                step: 1,
                action: "toD".to_string(),
                state: "\"B\"".to_string(),
            })
        );
    }

    #[test]
    fn validate_bad_plan_incomplete() {
        let problem = line_graph();
        let plan = Plan::new(vec![Move::to("B"), Move::to("C")]);
        assert!(matches!(
            validate(&plan, &problem),
            Err(PlanError::GoalNotReached { .. })
        ));
    }
}

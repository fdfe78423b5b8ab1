//! Open-loop robot planning.
//!
//! A plan is what the robot would do if the human were not there: the goal
//! law is rolled forward without the safety filter.  Plans are predictions
//! fed to the model-input packager, never actions.

use hri_agent::{Agent, Robot, SafetyFilter};
use hri_core::{Control, State};

/// Predicted robot states (and optionally controls) over a horizon.
///
/// `states[k]` is the state after `k + 1` steps; `controls[k]` produced it.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RobotPlan {
    pub states:   Vec<State>,
    pub controls: Option<Vec<Control>>,
}

impl RobotPlan {
    #[inline]
    pub fn horizon(&self) -> usize {
        self.states.len()
    }
}

/// Roll the robot's goal-seeking dynamics forward `horizon` steps from its
/// current state.  The robot itself is not touched.
pub fn get_robot_plan<F: SafetyFilter>(
    robot:           &Robot<F>,
    horizon:         usize,
    return_controls: bool,
) -> RobotPlan {
    let dynamics = robot.dynamics();
    let goal = robot.goal();
    let mut x = *robot.state();
    let mut states = Vec::with_capacity(horizon);
    let mut controls = return_controls.then(|| Vec::with_capacity(horizon));

    for _ in 0..horizon {
        let u = dynamics.get_goal_control(&x, &goal);
        x = dynamics.step(&x, &u);
        states.push(x);
        if let Some(c) = controls.as_mut() {
            c.push(u);
        }
    }

    RobotPlan { states, controls }
}

/// Baseline plan: the robot's current state repeated `horizon` times.
pub fn get_empty_robot_plan<F: SafetyFilter>(robot: &Robot<F>, horizon: usize) -> RobotPlan {
    RobotPlan { states: vec![*robot.state(); horizon], controls: None }
}

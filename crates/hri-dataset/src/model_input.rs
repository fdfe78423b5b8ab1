//! Arrays handed to an external intent predictor.
//!
//! | Array     | Shape              | Row layout                                  |
//! |-----------|--------------------|---------------------------------------------|
//! | `history` | `[T, 8]`           | `[human px vx py vy, robot px vx py vy]`    |
//! | `plan`    | `[4, H]`           | one row per state component                 |
//! | `goals`   | `[4, G]`           | one row per state component                 |

use hri_core::{Goal, STATE_DIM, State};
use hri_sim::{RobotPlan, TrialRecord};
use ndarray::Array2;

use crate::{DatasetError, DatasetResult};

/// Feature width of one history row: human state then robot state.
pub const HISTORY_DIM: usize = 2 * STATE_DIM;

#[derive(Clone, Debug, PartialEq)]
pub struct ModelInput {
    pub history: Array2<f64>,
    pub plan:    Array2<f64>,
    pub goals:   Array2<f64>,
}

impl ModelInput {
    /// Concatenate the two histories along the state axis and lay out the
    /// plan and goal set column-wise.
    ///
    /// Fails if the histories differ in length or are empty.
    pub fn package(
        human_hist: &[State],
        robot_hist: &[State],
        plan:       &RobotPlan,
        goals:      &[Goal],
    ) -> DatasetResult<Self> {
        if human_hist.is_empty() {
            return Err(DatasetError::Config("history must contain at least one step".into()));
        }
        if robot_hist.len() != human_hist.len() {
            return Err(DatasetError::LengthMismatch {
                expected: human_hist.len(),
                got:      robot_hist.len(),
                what:     "robot history",
            });
        }

        let flat: Vec<f64> = human_hist
            .iter()
            .zip(robot_hist)
            .flat_map(|(h, r)| h.0.into_iter().chain(r.0))
            .collect();
        let history = Array2::from_shape_vec((human_hist.len(), HISTORY_DIM), flat)?;

        let goal_states: Vec<State> = goals.iter().map(|g| *g.as_state()).collect();
        Ok(Self {
            history,
            plan:  columns(&plan.states),
            goals: columns(&goal_states),
        })
    }

    /// Package the first `steps` recorded steps of a trial.
    pub fn from_record(record: &TrialRecord, steps: usize, plan: &RobotPlan) -> DatasetResult<Self> {
        if steps > record.horizon() {
            return Err(DatasetError::LengthMismatch {
                expected: record.horizon(),
                got:      steps,
                what:     "history window",
            });
        }
        Self::package(
            &record.human.states()[..steps],
            &record.robot.states()[..steps],
            plan,
            &record.goals,
        )
    }

    /// Number of history steps.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.nrows()
    }
}

/// One column per state, one row per state component.
fn columns(states: &[State]) -> Array2<f64> {
    Array2::from_shape_fn((STATE_DIM, states.len()), |(c, k)| states[k].0[c])
}

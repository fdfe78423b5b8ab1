//! Per-trial labels derived from a recorded rollout.
//!
//! Both labels are pure functions of the record, so they can be recomputed
//! at any time and must always agree with what the builder stored.

use hri_agent::nearest_goal;
use hri_sim::TrialRecord;

/// Labels attached to one trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrialLabels {
    /// Human's reached indicator at the final step.
    pub reached:    u8,
    /// Index of the candidate goal nearest the human's final pursued goal.
    pub goal_index: usize,
}

impl TrialLabels {
    pub fn from_record(record: &TrialRecord) -> Self {
        Self { reached: reached_flag(record), goal_index: goal_index(record) }
    }
}

/// The human's goal-reached indicator at the final timestep.
#[inline]
pub fn reached_flag(record: &TrialRecord) -> u8 {
    record.final_reached()
}

/// Index into the trial's goal set of the goal nearest (full 4-component
/// distance) to the human's goal at the final timestep.  Ties go to the
/// earlier goal.
pub fn goal_index(record: &TrialRecord) -> usize {
    record
        .final_human_goal()
        .and_then(|g| nearest_goal(g.as_state(), &record.goals))
        .unwrap_or(0)
}

//! Append-only trajectory recording and the frozen per-trial record.

use hri_core::{Goal, State};

use crate::{SimError, SimResult};

// ── Trajectory ────────────────────────────────────────────────────────────────

/// An immutable sequence of states, one per timestep.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Trajectory {
    states: Vec<State>,
}

impl Trajectory {
    #[inline]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&State> {
        self.states.last()
    }
}

/// Append-only builder for a [`Trajectory`] of fixed length.
#[derive(Debug)]
pub struct TrajectoryBuilder {
    horizon: usize,
    states:  Vec<State>,
}

impl TrajectoryBuilder {
    /// Pre-allocate room for `horizon` states.
    pub fn new(horizon: usize) -> Self {
        Self { horizon, states: Vec::with_capacity(horizon) }
    }

    /// Append one state.  Returns `false` (and drops the state) once the
    /// horizon is full.
    pub fn push(&mut self, state: State) -> bool {
        if self.states.len() >= self.horizon {
            return false;
        }
        self.states.push(state);
        true
    }

    /// Freeze into a [`Trajectory`].  Fails unless exactly `horizon` states
    /// were pushed.
    pub fn freeze(self) -> SimResult<Trajectory> {
        if self.states.len() != self.horizon {
            return Err(SimError::Incomplete { expected: self.horizon, got: self.states.len() });
        }
        Ok(Trajectory { states: self.states })
    }
}

// ── TrialRecord ───────────────────────────────────────────────────────────────

/// Everything recorded during one closed-loop rollout.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialRecord {
    /// Human state at each step (before that step's update).
    pub human: Trajectory,
    /// Robot state at each step (before that step's update).
    pub robot: Trajectory,
    /// The human's pursued goal at each step.
    pub human_goals: Vec<Goal>,
    /// 1 if the human was within the reach threshold of its goal at that
    /// step, else 0.
    pub reached: Vec<u8>,
    /// Candidate goal set of the trial.
    pub goals: Vec<Goal>,
    /// The robot's assigned goal.
    pub robot_goal: Goal,
    /// Steps on which the safety filter changed the robot's control.
    pub filter_interventions: usize,
    /// Steps on which no admissible control met the distance constraint.
    pub infeasible_steps: usize,
}

impl TrialRecord {
    #[inline]
    pub fn horizon(&self) -> usize {
        self.human.len()
    }

    /// Human's pursued goal at the final step.
    pub fn final_human_goal(&self) -> Option<Goal> {
        self.human_goals.last().copied()
    }

    /// Reached indicator at the final step (0 for an empty record).
    pub fn final_reached(&self) -> u8 {
        self.reached.last().copied().unwrap_or(0)
    }

    /// Smallest recorded robot-human separation.
    pub fn min_separation(&self) -> f64 {
        self.human
            .states()
            .iter()
            .zip(self.robot.states())
            .map(|(h, r)| h.position_distance(r))
            .fold(f64::INFINITY, f64::min)
    }
}

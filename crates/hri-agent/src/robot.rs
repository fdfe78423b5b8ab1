//! The robot agent: one goal, with its control passed through a safety filter.

use hri_core::{Control, DynamicsModel, Goal, State};
use tracing::trace;

use crate::{Agent, AgentError, AgentResult, FilterOutcome, Interaction, ProjectionFilter, SafetyFilter};

/// Goal-seeking robot whose control is filtered to keep `dmin` from the human.
pub struct Robot<F: SafetyFilter = ProjectionFilter> {
    state:    State,
    dynamics: DynamicsModel,
    goal:     Goal,
    dmin:     f64,
    filter:   F,
}

impl<F: SafetyFilter> Robot<F> {
    /// Fails if `dmin` is not finite and positive.
    pub fn new(
        state:    State,
        dynamics: DynamicsModel,
        goal:     Goal,
        dmin:     f64,
        filter:   F,
    ) -> AgentResult<Self> {
        if !(dmin.is_finite() && dmin > 0.0) {
            return Err(AgentError::Config(format!("dmin must be finite and positive, got {dmin}")));
        }
        Ok(Self { state, dynamics, goal, dmin, filter })
    }

    #[inline]
    pub fn dmin(&self) -> f64 {
        self.dmin
    }

    #[inline]
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Unfiltered goal-seeking control.
    pub fn nominal_u(&self) -> Control {
        self.dynamics.get_goal_control(&self.state, &self.goal)
    }

    /// Goal-seeking control passed through the safety filter, with the
    /// filter's diagnostics.
    pub fn filtered_u(&self, obs: &Interaction) -> FilterOutcome {
        let separation = obs.previous_separation();
        if separation < self.dmin {
            trace!(
                separation,
                dmin = self.dmin,
                "previous step ended inside minimum distance"
            );
        }
        let outcome = self.filter.filter(self.nominal_u(), &self.state, obs, &self.dynamics, self.dmin);
        if outcome.modified {
            trace!(
                feasible = outcome.feasible,
                projected = outcome.projected_distance,
                "safety filter adjusted robot control"
            );
        }
        outcome
    }
}

impl<F: SafetyFilter> Agent for Robot<F> {
    type Observation = Interaction;

    #[inline]
    fn state(&self) -> &State {
        &self.state
    }

    #[inline]
    fn goal(&self) -> Goal {
        self.goal
    }

    #[inline]
    fn dynamics(&self) -> &DynamicsModel {
        &self.dynamics
    }

    fn get_u(&self, obs: Interaction) -> Control {
        self.filtered_u(&obs).control
    }

    fn step(&mut self, control: Control) -> State {
        self.state = self.dynamics.step(&self.state, &control);
        self.state
    }
}

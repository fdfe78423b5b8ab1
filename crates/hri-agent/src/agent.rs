//! The `Agent` capability shared by [`Human`][crate::Human] and
//! [`Robot`][crate::Robot].

use hri_core::{Control, DynamicsModel, Goal, State};

/// Shared capability of every simulated agent.
///
/// An agent owns its state and mutates it in place through [`step`][Self::step].
/// Computing a control never mutates anything, so a simulator may query
/// both agents before advancing either of them.
pub trait Agent {
    /// What the agent looks at when choosing its control.
    type Observation;

    /// Current state.
    fn state(&self) -> &State;

    /// The goal currently being pursued.
    fn goal(&self) -> Goal;

    /// The point-mass model this agent integrates with.
    fn dynamics(&self) -> &DynamicsModel;

    /// Control to apply this step.
    fn get_u(&self, obs: Self::Observation) -> Control;

    /// Apply `control` for one timestep and return the new state.
    fn step(&mut self, control: Control) -> State;

    /// Full-state distance to the pursued goal.
    fn distance_to_goal(&self) -> f64 {
        self.state().distance(self.goal().as_state())
    }
}

/// Everything the robot observes when choosing its control.
///
/// `robot_prev`/`human_prev` are the states recorded one step earlier.  On
/// the first step there is no history and the current states stand in for
/// the previous ones (see [`Interaction::first`]).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interaction {
    pub human:      State,
    pub robot_prev: State,
    pub human_prev: State,
}

impl Interaction {
    pub fn new(human: State, robot_prev: State, human_prev: State) -> Self {
        Self { human, robot_prev, human_prev }
    }

    /// Observation for step 0: current states double as history.
    pub fn first(human: State, robot: State) -> Self {
        Self { human, robot_prev: robot, human_prev: human }
    }

    /// Separation between the two agents one step ago.
    #[inline]
    pub fn previous_separation(&self) -> f64 {
        self.robot_prev.position_distance(&self.human_prev)
    }

    /// Finite-difference estimate of the human's acceleration from the
    /// change in its velocity over one step of length `ts`.
    pub fn human_accel_estimate(&self, ts: f64) -> [f64; 2] {
        let [vx, vy] = self.human.velocity();
        let [pvx, pvy] = self.human_prev.velocity();
        [(vx - pvx) / ts, (vy - pvy) / ts]
    }
}

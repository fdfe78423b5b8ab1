//! The human agent: a fixed set of candidate goals, one of which is pursued.

use hri_core::{Control, DynamicsModel, Goal, State};

use crate::{Agent, AgentError, AgentResult, ReactionPolicy, Repulsion};

/// Which candidate goal the human pursues.  Chosen once at construction and
/// fixed for the whole trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GoalSelection {
    /// The first candidate.
    #[default]
    First,
    /// The candidate nearest (full-state distance) to the initial state.
    /// Ties go to the earlier candidate.
    Nearest,
    /// A specific candidate by index.
    Fixed(usize),
}

impl GoalSelection {
    /// Resolve to an index into `goals`.
    pub fn resolve(self, initial: &State, goals: &[Goal]) -> AgentResult<usize> {
        if goals.is_empty() {
            return Err(AgentError::EmptyGoals);
        }
        match self {
            GoalSelection::First => Ok(0),
            GoalSelection::Nearest => Ok(nearest_goal(initial, goals).unwrap_or(0)),
            GoalSelection::Fixed(index) if index < goals.len() => Ok(index),
            GoalSelection::Fixed(index) => Err(AgentError::GoalIndex { index, len: goals.len() }),
        }
    }
}

/// Index of the goal nearest to `state` (argmin; first occurrence wins ties).
pub fn nearest_goal(state: &State, goals: &[Goal]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, g) in goals.iter().enumerate() {
        let d = state.distance(g.as_state());
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Goal-seeking human with a pluggable reaction to the robot.
pub struct Human<P: ReactionPolicy = Repulsion> {
    state:    State,
    dynamics: DynamicsModel,
    goals:    Vec<Goal>,
    active:   usize,
    reaction: P,
}

impl<P: ReactionPolicy> Human<P> {
    /// Build a human at `state` choosing among `goals` per `selection`.
    ///
    /// Fails on an empty goal set or an out-of-range `Fixed` index.
    pub fn new(
        state:     State,
        dynamics:  DynamicsModel,
        goals:     Vec<Goal>,
        selection: GoalSelection,
        reaction:  P,
    ) -> AgentResult<Self> {
        let active = selection.resolve(&state, &goals)?;
        Ok(Self { state, dynamics, goals, active, reaction })
    }

    /// The currently pursued goal.
    #[inline]
    pub fn get_goal(&self) -> Goal {
        self.goals[self.active]
    }

    /// Index of the pursued goal within [`goals`](Self::goals).
    #[inline]
    pub fn goal_index(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    #[inline]
    pub fn reaction(&self) -> &P {
        &self.reaction
    }

    /// Goal-seeking control alone, before the reaction term.
    pub fn nominal_u(&self) -> Control {
        self.dynamics.get_goal_control(&self.state, &self.get_goal())
    }
}

impl<P: ReactionPolicy> Agent for Human<P> {
    /// The robot's current state.
    type Observation = State;

    #[inline]
    fn state(&self) -> &State {
        &self.state
    }

    #[inline]
    fn goal(&self) -> Goal {
        self.get_goal()
    }

    #[inline]
    fn dynamics(&self) -> &DynamicsModel {
        &self.dynamics
    }

    fn get_u(&self, robot: State) -> Control {
        let u = self.nominal_u() + self.reaction.react(&self.state, &robot);
        u.saturate(self.dynamics.max_accel())
    }

    fn step(&mut self, control: Control) -> State {
        self.state = self.dynamics.step(&self.state, &control);
        self.state
    }
}

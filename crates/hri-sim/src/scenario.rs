//! Initial conditions for one trial.

use hri_agent::GoalSelection;
use hri_core::{Goal, SimConfig, State, TrialRng};

use crate::{SimError, SimResult};

/// Initial states, candidate goals, and goal assignments for one trial.
///
/// Either supplied by the caller or drawn with [`Scenario::sample`].
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub human: State,
    pub robot: State,
    /// Candidate goals shared by both agents.
    pub goals: Vec<Goal>,
    /// Index into `goals` of the robot's goal.
    pub robot_goal: usize,
    /// How the human picks its goal among `goals`.
    pub human_goal: GoalSelection,
}

impl Scenario {
    /// Draw a scenario: both agents at rest at uniform positions in
    /// `[-domain, domain]²`, `num_goals` uniform goals, and uniformly random
    /// goal assignments for the robot and the human.
    ///
    /// Draw order is fixed so a given RNG state always yields the same
    /// scenario.
    pub fn sample(rng: &mut TrialRng, config: &SimConfig) -> Self {
        let half = config.domain;
        let (hx, hy) = rng.position(half);
        let (rx, ry) = rng.position(half);
        let goals: Vec<Goal> = (0..config.num_goals)
            .map(|_| {
                let (x, y) = rng.position(half);
                Goal::at(x, y)
            })
            .collect();
        let robot_goal = rng.index(goals.len()).unwrap_or(0);
        let human_goal = GoalSelection::Fixed(rng.index(goals.len()).unwrap_or(0));
        Self {
            human: State::at_rest(hx, hy),
            robot: State::at_rest(rx, ry),
            goals,
            robot_goal,
            human_goal,
        }
    }

    /// The robot's assigned goal, if the index is valid.
    pub fn robot_goal(&self) -> Option<Goal> {
        self.goals.get(self.robot_goal).copied()
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.goals.is_empty() {
            return Err(SimError::Scenario("goal set is empty".into()));
        }
        if self.robot_goal >= self.goals.len() {
            return Err(SimError::Scenario(format!(
                "robot goal index {} out of range for {} goals",
                self.robot_goal,
                self.goals.len()
            )));
        }
        if let GoalSelection::Fixed(i) = self.human_goal {
            if i >= self.goals.len() {
                return Err(SimError::Scenario(format!(
                    "human goal index {i} out of range for {} goals",
                    self.goals.len()
                )));
            }
        }
        if !self.human.is_finite() || !self.robot.is_finite() {
            return Err(SimError::Scenario("initial states must be finite".into()));
        }
        if self.goals.iter().any(|g| !g.as_state().is_finite()) {
            return Err(SimError::Scenario("goals must be finite".into()));
        }
        Ok(())
    }
}

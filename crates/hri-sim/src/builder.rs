//! Fluent builder for constructing an [`InteractionSimulator`].

use hri_agent::{Human, ProjectionFilter, ReactionPolicy, Repulsion, Robot, SafetyFilter};
use hri_core::{DynamicsModel, SimConfig};

use crate::{InteractionSimulator, Scenario, SimError, SimResult};

/// Fluent builder for [`InteractionSimulator<P, F>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: timestep, horizon, reach threshold, `dmin`, gains, …
/// - [`Scenario`]: initial states, goal set, goal assignments
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                         |
/// |------------------|---------------------------------|
/// | `.reaction(p)`   | `Repulsion::default()`          |
/// | `.filter(f)`     | `ProjectionFilter::default()`   |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config, scenario)
///     .reaction(NoReaction)
///     .build()?;
/// let record = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: ReactionPolicy = Repulsion, F: SafetyFilter = ProjectionFilter> {
    config:   SimConfig,
    scenario: Scenario,
    reaction: P,
    filter:   F,
}

impl SimBuilder<Repulsion, ProjectionFilter> {
    /// Create a builder with the default policies.
    pub fn new(config: SimConfig, scenario: Scenario) -> Self {
        Self {
            config,
            scenario,
            reaction: Repulsion::default(),
            filter:   ProjectionFilter::default(),
        }
    }
}

impl<P: ReactionPolicy, F: SafetyFilter> SimBuilder<P, F> {
    /// Replace the human's reaction policy.
    pub fn reaction<Q: ReactionPolicy>(self, reaction: Q) -> SimBuilder<Q, F> {
        SimBuilder {
            config:   self.config,
            scenario: self.scenario,
            reaction,
            filter:   self.filter,
        }
    }

    /// Replace the robot's safety filter.
    pub fn filter<G: SafetyFilter>(self, filter: G) -> SimBuilder<P, G> {
        SimBuilder {
            config:   self.config,
            scenario: self.scenario,
            reaction: self.reaction,
            filter,
        }
    }

    /// Validate inputs, construct both agents, and return a ready-to-run
    /// simulator.
    pub fn build(self) -> SimResult<InteractionSimulator<P, F>> {
        self.config.validate()?;
        self.scenario.validate()?;

        let dynamics = DynamicsModel::from_config(&self.config)?;
        let robot_goal = self
            .scenario
            .robot_goal()
            .ok_or_else(|| SimError::Scenario("robot goal index out of range".into()))?;

        let human = Human::new(
            self.scenario.human,
            dynamics,
            self.scenario.goals.clone(),
            self.scenario.human_goal,
            self.reaction,
        )?;
        let robot = Robot::new(self.scenario.robot, dynamics, robot_goal, self.config.dmin, self.filter)?;

        Ok(InteractionSimulator {
            config: self.config,
            human,
            robot,
            goals: self.scenario.goals,
        })
    }
}

//! The `InteractionSimulator` and its step loop.

use hri_agent::{Agent, Human, Interaction, ReactionPolicy, Robot, SafetyFilter};
use hri_core::{Goal, SimConfig};
use tracing::debug;

use crate::{SimObserver, SimResult, StepSample, TrajectoryBuilder, TrialRecord};

/// One fixed-horizon closed-loop rollout of a human and a robot.
///
/// Create via [`SimBuilder`][crate::SimBuilder]; consume with
/// [`run`](Self::run).  Agents live exactly as long as the trial.
pub struct InteractionSimulator<P: ReactionPolicy, F: SafetyFilter> {
    pub(crate) config: SimConfig,
    pub(crate) human:  Human<P>,
    pub(crate) robot:  Robot<F>,
    pub(crate) goals:  Vec<Goal>,
}

impl<P: ReactionPolicy, F: SafetyFilter> InteractionSimulator<P, F> {
    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn human(&self) -> &Human<P> {
        &self.human
    }

    #[inline]
    pub fn robot(&self) -> &Robot<F> {
        &self.robot
    }

    #[inline]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Run all `config.horizon` steps and return the frozen record.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimResult<TrialRecord> {
        let horizon = self.config.horizon;
        let threshold = self.config.reach_threshold;

        let mut human_traj = TrajectoryBuilder::new(horizon);
        let mut robot_traj = TrajectoryBuilder::new(horizon);
        let mut human_goals = Vec::with_capacity(horizon);
        let mut reached = Vec::with_capacity(horizon);
        let mut filter_interventions = 0;
        let mut infeasible_steps = 0;

        observer.on_trial_start(self.human.state(), self.robot.state());

        let mut history = None;
        for step in 0..horizon {
            // ── Record ────────────────────────────────────────────────────
            let xh = *self.human.state();
            let xr = *self.robot.state();
            let goal = self.human.get_goal();
            let at_goal = xh.distance(goal.as_state()) < threshold;
            human_traj.push(xh);
            robot_traj.push(xr);
            human_goals.push(goal);
            reached.push(at_goal as u8);
            observer.on_step(&StepSample { step, human: xh, robot: xr, human_goal: goal, reached: at_goal });

            // ── Controls ──────────────────────────────────────────────────
            let uh = self.human.get_u(xr);
            let obs = match history {
                None => Interaction::first(xh, xr),
                Some((robot_prev, human_prev)) => Interaction::new(xh, robot_prev, human_prev),
            };
            let outcome = self.robot.filtered_u(&obs);
            filter_interventions += outcome.modified as usize;
            infeasible_steps += (!outcome.feasible) as usize;
            observer.on_filter(step, &outcome);

            // ── Advance ───────────────────────────────────────────────────
            self.human.step(uh);
            self.robot.step(outcome.control);
            history = Some((xr, xh));
        }

        let record = TrialRecord {
            human: human_traj.freeze()?,
            robot: robot_traj.freeze()?,
            human_goals,
            reached,
            goals: self.goals,
            robot_goal: self.robot.goal(),
            filter_interventions,
            infeasible_steps,
        };

        debug!(
            reached = record.final_reached(),
            filter_interventions,
            infeasible_steps,
            min_separation = record.min_separation(),
            "trial complete"
        );

        observer.on_trial_end(&record);
        Ok(record)
    }
}

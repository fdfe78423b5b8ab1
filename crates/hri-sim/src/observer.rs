//! Observer hooks for watching a rollout.

use hri_agent::FilterOutcome;
use hri_core::{Goal, State};

use crate::TrialRecord;

/// What was recorded at one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepSample {
    pub step:       usize,
    pub human:      State,
    pub robot:      State,
    pub human_goal: Goal,
    pub reached:    bool,
}

/// Callbacks invoked by [`InteractionSimulator::run`][crate::InteractionSimulator::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: separation tracker
///
/// ```rust,ignore
/// struct MinSeparation(f64);
///
/// impl SimObserver for MinSeparation {
///     fn on_step(&mut self, s: &StepSample) {
///         self.0 = self.0.min(s.human.position_distance(&s.robot));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first step with the initial states.
    fn on_trial_start(&mut self, _human: &State, _robot: &State) {}

    /// Called after each step's states have been recorded.
    fn on_step(&mut self, _sample: &StepSample) {}

    /// Called with the safety filter's result for the robot's control.
    fn on_filter(&mut self, _step: usize, _outcome: &FilterOutcome) {}

    /// Called once after the final step with the frozen record.
    fn on_trial_end(&mut self, _record: &TrialRecord) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

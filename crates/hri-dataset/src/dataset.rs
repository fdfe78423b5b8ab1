//! The aggregated dataset and its array views.

use hri_core::{Goal, STATE_DIM, SimRng};
use hri_sim::{Trajectory, TrialRecord};
use ndarray::Array3;

use crate::TrialLabels;

/// Trial-indexed records and their labels.
///
/// Frozen once built: rows are appended by [`DatasetBuilder`][crate::DatasetBuilder]
/// exactly once per trial and never modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    horizon:   usize,
    num_goals: usize,
    records:   Vec<TrialRecord>,
    labels:    Vec<TrialLabels>,
}

/// Aggregate statistics, mostly for logging.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetSummary {
    pub trials:                 usize,
    /// Fraction of trials whose reached flag is 1.
    pub reach_rate:             f64,
    /// Trials per goal index.
    pub goal_histogram:         Vec<usize>,
    pub mean_interventions:     f64,
    pub trials_with_infeasible: usize,
    /// Smallest robot-human separation over every recorded step.
    pub min_separation:         f64,
}

impl Dataset {
    pub(crate) fn new(horizon: usize, num_goals: usize, records: Vec<TrialRecord>) -> Self {
        let labels = records.iter().map(TrialLabels::from_record).collect();
        Self { horizon, num_goals, records, labels }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    #[inline]
    pub fn num_goals(&self) -> usize {
        self.num_goals
    }

    #[inline]
    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    #[inline]
    pub fn labels(&self) -> &[TrialLabels] {
        &self.labels
    }

    /// Human trajectories, shape `[4, horizon, trials]`.
    pub fn human_trajectories(&self) -> Array3<f64> {
        self.stack_trajectories(|r| &r.human)
    }

    /// Robot trajectories, shape `[4, horizon, trials]`.
    pub fn robot_trajectories(&self) -> Array3<f64> {
        self.stack_trajectories(|r| &r.robot)
    }

    /// Reached flags, shape `[trials]`, values in `{0, 1}`.
    pub fn reached(&self) -> Vec<u8> {
        self.labels.iter().map(|l| l.reached).collect()
    }

    /// Goal indices, shape `[trials]`, values in `[0, num_goals)`.
    pub fn goal_indices(&self) -> Vec<usize> {
        self.labels.iter().map(|l| l.goal_index).collect()
    }

    /// Candidate goal sets, shape `[4, num_goals, trials]`.
    pub fn goal_sets(&self) -> Array3<f64> {
        self.stack_goals(self.num_goals, |r, g| r.goals[g])
    }

    /// Robot goals, shape `[4, 1, trials]`.
    pub fn robot_goals(&self) -> Array3<f64> {
        self.stack_goals(1, |r, _| r.robot_goal)
    }

    /// Human pursued goal per step, shape `[4, horizon, trials]`.
    pub fn human_goal_sequences(&self) -> Array3<f64> {
        self.stack_goals(self.horizon, |r, t| r.human_goals[t])
    }

    fn stack_trajectories(&self, pick: impl Fn(&TrialRecord) -> &Trajectory) -> Array3<f64> {
        Array3::from_shape_fn((STATE_DIM, self.horizon, self.len()), |(c, t, n)| {
            pick(&self.records[n]).states()[t].0[c]
        })
    }

    fn stack_goals(&self, width: usize, pick: impl Fn(&TrialRecord, usize) -> Goal) -> Array3<f64> {
        Array3::from_shape_fn((STATE_DIM, width, self.len()), |(c, k, n)| {
            pick(&self.records[n], k).as_state().0[c]
        })
    }

    pub fn summary(&self) -> DatasetSummary {
        let trials = self.len();
        let mut goal_histogram = vec![0; self.num_goals];
        for l in &self.labels {
            if let Some(slot) = goal_histogram.get_mut(l.goal_index) {
                *slot += 1;
            }
        }
        let reached = self.labels.iter().filter(|l| l.reached == 1).count();
        let interventions: usize = self.records.iter().map(|r| r.filter_interventions).sum();
        let denom = trials.max(1) as f64;
        DatasetSummary {
            trials,
            reach_rate: reached as f64 / denom,
            goal_histogram,
            mean_interventions: interventions as f64 / denom,
            trials_with_infeasible: self.records.iter().filter(|r| r.infeasible_steps > 0).count(),
            min_separation: self
                .records
                .iter()
                .map(TrialRecord::min_separation)
                .fold(f64::INFINITY, f64::min),
        }
    }

    /// Deterministically shuffle trial indices and split them into
    /// `(train, validation)` with `valid_fraction` of trials (rounded down)
    /// in the validation set.
    pub fn split_indices(&self, valid_fraction: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
        let mut idx: Vec<usize> = (0..self.len()).collect();
        SimRng::new(seed).shuffle(&mut idx);
        let n_valid = ((self.len() as f64) * valid_fraction.clamp(0.0, 1.0)) as usize;
        let valid = idx.split_off(self.len() - n_valid);
        (idx, valid)
    }
}

//! The trial loop.

use hri_agent::{ProjectionFilter, ReactionPolicy, Repulsion, SafetyFilter};
use hri_core::{SimConfig, TrialRng};
use hri_sim::{NoopObserver, Scenario, SimBuilder, TrialRecord};
use tracing::{info, warn};

use crate::{Dataset, DatasetError, DatasetResult};

/// Runs `N` independent trials and aggregates them into a [`Dataset`].
///
/// Trial `i` draws its scenario from `TrialRng::new(config.seed, i)` unless
/// scenarios were supplied with [`scenarios`](Self::scenarios).  Trials share
/// nothing but the read-only config and policies, so with the `parallel`
/// feature they run on Rayon workers and the dataset is identical to a
/// sequential build.
///
/// # Example
///
/// ```rust,ignore
/// let dataset = DatasetBuilder::new(SimConfig::default())
///     .trials(1000)
///     .build()?;
/// assert_eq!(dataset.human_trajectories().shape(), [4, 200, 1000]);
/// ```
pub struct DatasetBuilder<P = Repulsion, F = ProjectionFilter>
where
    P: ReactionPolicy + Clone,
    F: SafetyFilter + Clone,
{
    config:    SimConfig,
    trials:    Option<usize>,
    scenarios: Option<Vec<Scenario>>,
    reaction:  P,
    filter:    F,
}

impl DatasetBuilder<Repulsion, ProjectionFilter> {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            trials:    None,
            scenarios: None,
            reaction:  Repulsion::default(),
            filter:    ProjectionFilter::default(),
        }
    }
}

impl<P, F> DatasetBuilder<P, F>
where
    P: ReactionPolicy + Clone,
    F: SafetyFilter + Clone,
{
    /// Number of trials.  Defaults to `config.num_trials`, or to the number
    /// of supplied scenarios.
    pub fn trials(mut self, n: usize) -> Self {
        self.trials = Some(n);
        self
    }

    /// Use these scenarios instead of sampling.  One trial per scenario.
    pub fn scenarios(mut self, scenarios: Vec<Scenario>) -> Self {
        self.scenarios = Some(scenarios);
        self
    }

    pub fn reaction<Q: ReactionPolicy + Clone>(self, reaction: Q) -> DatasetBuilder<Q, F> {
        DatasetBuilder {
            config:    self.config,
            trials:    self.trials,
            scenarios: self.scenarios,
            reaction,
            filter:    self.filter,
        }
    }

    pub fn filter<G: SafetyFilter + Clone>(self, filter: G) -> DatasetBuilder<P, G> {
        DatasetBuilder {
            config:    self.config,
            trials:    self.trials,
            scenarios: self.scenarios,
            reaction:  self.reaction,
            filter,
        }
    }

    /// Validate inputs, run every trial, and return the labelled dataset.
    pub fn build(self) -> DatasetResult<Dataset> {
        self.config.validate()?;
        let n = self.trial_count()?;
        let num_goals = self.goal_count()?;

        let records = self.run_trials(n)?;
        let dataset = Dataset::new(self.config.horizon, num_goals, records);

        let summary = dataset.summary();
        info!(
            trials = summary.trials,
            reach_rate = summary.reach_rate,
            goal_histogram = ?summary.goal_histogram,
            mean_interventions = summary.mean_interventions,
            "dataset built"
        );
        if summary.trials_with_infeasible > 0 {
            warn!(
                trials = summary.trials_with_infeasible,
                min_separation = summary.min_separation,
                "some trials had steps where the safety constraint could not be met"
            );
        }
        Ok(dataset)
    }

    fn trial_count(&self) -> DatasetResult<usize> {
        match (&self.scenarios, self.trials) {
            (Some(s), Some(n)) if s.len() != n => Err(DatasetError::LengthMismatch {
                expected: n,
                got:      s.len(),
                what:     "supplied scenarios",
            }),
            (Some(s), _) => Ok(s.len()),
            (None, Some(n)) => Ok(n),
            (None, None) => Ok(self.config.num_trials),
        }
    }

    /// Every trial must have the same number of goals so the goal-set array
    /// has a single shape.  Supplied scenarios are validated up front.
    fn goal_count(&self) -> DatasetResult<usize> {
        let Some(scenarios) = &self.scenarios else {
            return Ok(self.config.num_goals);
        };
        let Some(first) = scenarios.first() else {
            return Ok(self.config.num_goals);
        };
        let num_goals = first.goals.len();
        for (trial, s) in scenarios.iter().enumerate() {
            s.validate().map_err(|source| DatasetError::Trial { trial, source })?;
            if s.goals.len() != num_goals {
                return Err(DatasetError::LengthMismatch {
                    expected: num_goals,
                    got:      s.goals.len(),
                    what:     "scenario goal set",
                });
            }
        }
        Ok(num_goals)
    }

    fn run_trial(&self, trial: usize) -> DatasetResult<TrialRecord> {
        let scenario = match &self.scenarios {
            Some(s) => s[trial].clone(),
            None => Scenario::sample(&mut TrialRng::new(self.config.seed, trial), &self.config),
        };
        SimBuilder::new(self.config.clone(), scenario)
            .reaction(self.reaction.clone())
            .filter(self.filter.clone())
            .build()
            .and_then(|sim| sim.run(&mut NoopObserver))
            .map_err(|source| DatasetError::Trial { trial, source })
    }

    #[cfg(not(feature = "parallel"))]
    fn run_trials(&self, n: usize) -> DatasetResult<Vec<TrialRecord>> {
        (0..n).map(|i| self.run_trial(i)).collect()
    }

    #[cfg(feature = "parallel")]
    fn run_trials(&self, n: usize) -> DatasetResult<Vec<TrialRecord>> {
        use rayon::prelude::*;

        // Indexed collect keeps trial order regardless of scheduling.
        let run = || -> DatasetResult<Vec<TrialRecord>> {
            (0..n).into_par_iter().map(|i| self.run_trial(i)).collect()
        };
        match self.config.num_threads {
            None => run(),
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| DatasetError::Config(format!("thread pool: {e}")))?
                .install(run),
        }
    }
}

//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `trials.csv`
//! - `trajectories.csv`
//! - `goals.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::DatasetWriter;
use crate::{OutputResult, TrialRows};

pub const TRIAL_HEADER: [&str; 7] = [
    "trial",
    "reached",
    "goal_idx",
    "robot_goal_x",
    "robot_goal_y",
    "filter_interventions",
    "infeasible_steps",
];

pub const TRAJECTORY_HEADER: [&str; 10] =
    ["trial", "step", "agent", "px", "vx", "py", "vy", "goal_x", "goal_y", "reached"];

pub const GOAL_HEADER: [&str; 4] = ["trial", "goal_idx", "x", "y"];

/// Writes a dataset to three CSV files.
pub struct CsvWriter {
    trials:       Writer<File>,
    trajectories: Writer<File>,
    goals:        Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut trials = Writer::from_path(dir.join("trials.csv"))?;
        trials.write_record(TRIAL_HEADER)?;

        let mut trajectories = Writer::from_path(dir.join("trajectories.csv"))?;
        trajectories.write_record(TRAJECTORY_HEADER)?;

        let mut goals = Writer::from_path(dir.join("goals.csv"))?;
        goals.write_record(GOAL_HEADER)?;

        debug!(dir = %dir.display(), "csv writer opened");
        Ok(Self {
            trials,
            trajectories,
            goals,
            finished: false,
        })
    }
}

impl DatasetWriter for CsvWriter {
    fn write_trial(&mut self, rows: &TrialRows) -> OutputResult<()> {
        let t = &rows.trial;
        self.trials.write_record(&[
            t.trial.to_string(),
            t.reached.to_string(),
            t.goal_idx.to_string(),
            t.robot_goal_x.to_string(),
            t.robot_goal_y.to_string(),
            t.filter_interventions.to_string(),
            t.infeasible_steps.to_string(),
        ])?;

        for row in &rows.trajectory {
            self.trajectories.write_record(&[
                row.trial.to_string(),
                row.step.to_string(),
                row.agent.to_string(),
                row.px.to_string(),
                row.vx.to_string(),
                row.py.to_string(),
                row.vy.to_string(),
                row.goal_x.to_string(),
                row.goal_y.to_string(),
                row.reached.map(|r| r.to_string()).unwrap_or_default(),
            ])?;
        }

        for row in &rows.goals {
            self.goals.write_record(&[
                row.trial.to_string(),
                row.goal_idx.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trials.flush()?;
        self.trajectories.flush()?;
        self.goals.flush()?;
        Ok(())
    }
}

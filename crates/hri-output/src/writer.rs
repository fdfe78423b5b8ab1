//! The `DatasetWriter` trait implemented by all backend writers.

use hri_dataset::Dataset;

use crate::{OutputResult, TrialRows};

/// Trait implemented by the CSV and SQLite writers.
pub trait DatasetWriter {
    /// Write every row belonging to one trial.
    fn write_trial(&mut self, rows: &TrialRows) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write every trial of `dataset` in trial order.
    fn write_dataset(&mut self, dataset: &Dataset) -> OutputResult<()> {
        for (trial, record) in dataset.records().iter().enumerate() {
            self.write_trial(&TrialRows::from_record(trial, record))?;
        }
        Ok(())
    }
}

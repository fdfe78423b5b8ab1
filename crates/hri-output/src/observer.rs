//! `TrialOutputObserver<W>`: bridges `SimObserver` to a `DatasetWriter`.

use hri_sim::{SimObserver, TrialRecord};

use crate::writer::DatasetWriter;
use crate::{OutputError, OutputResult, TrialRows};

/// A [`SimObserver`] that writes each finished rollout to any
/// [`DatasetWriter`] backend, numbering trials in the order they end.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TrialOutputObserver<W: DatasetWriter> {
    writer:     W,
    next_trial: usize,
    last_error: Option<OutputError>,
}

impl<W: DatasetWriter> TrialOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self::starting_at(writer, 0)
    }

    /// Number trials from `first_trial` instead of zero.
    pub fn starting_at(writer: W, first_trial: usize) -> Self {
        Self { writer, next_trial: first_trial, last_error: None }
    }

    /// Index the next finished trial will be written under.
    #[inline]
    pub fn next_trial(&self) -> usize {
        self.next_trial
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Finish the writer and hand it back.
    pub fn finish(mut self) -> OutputResult<W> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()?;
        Ok(self.writer)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: DatasetWriter> SimObserver for TrialOutputObserver<W> {
    fn on_trial_end(&mut self, record: &TrialRecord) {
        let rows = TrialRows::from_record(self.next_trial, record);
        self.next_trial += 1;
        let result = self.writer.write_trial(&rows);
        self.store_err(result);
    }
}

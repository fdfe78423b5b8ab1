//! `hri-output`: dataset writers for the hri simulator.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                   |
//! |-----------|---------|-------------------------------------------------|
//! | *(none)*  | CSV     | `trials.csv`, `trajectories.csv`, `goals.csv`   |
//! | `sqlite`  | SQLite  | `dataset.db`                                    |
//!
//! Both implement [`DatasetWriter`].  A whole [`Dataset`][hri_dataset::Dataset]
//! is written with [`DatasetWriter::write_dataset`]; single rollouts can be
//! streamed through [`TrialOutputObserver`], which implements
//! `hri_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hri_output::{CsvWriter, DatasetWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./out"))?;
//! writer.write_dataset(&dataset)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrialOutputObserver;
pub use row::{AgentKind, GoalRow, TrajectoryRow, TrialRow, TrialRows};
pub use writer::DatasetWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

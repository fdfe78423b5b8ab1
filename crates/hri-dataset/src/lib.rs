//! `hri-dataset`: many independent rollouts turned into a labelled dataset.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                   |
//! |-------------------|------------------------------------------------------------|
//! | [`builder`]       | `DatasetBuilder` (trial loop, optional Rayon)              |
//! | [`dataset`]       | `Dataset`, `DatasetSummary`                                |
//! | [`labels`]        | `TrialLabels`, `reached_flag`, `goal_index`                |
//! | [`model_input`]   | `ModelInput`: history/plan/goal arrays for a predictor     |
//! | [`error`]         | `DatasetError`, `DatasetResult<T>`                         |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the trial loop on Rayon's thread pool.            |
//!
//! Array views are `ndarray` arrays in standard (row-major) layout, so
//! `as_slice()` hands exporters a contiguous buffer.

pub mod builder;
pub mod dataset;
pub mod error;
pub mod labels;
pub mod model_input;


pub use builder::DatasetBuilder;
pub use dataset::{Dataset, DatasetSummary};
pub use error::{DatasetError, DatasetResult};
pub use labels::{TrialLabels, goal_index, reached_flag};
pub use model_input::{HISTORY_DIM, ModelInput};
pub use ndarray::{Array2, Array3};

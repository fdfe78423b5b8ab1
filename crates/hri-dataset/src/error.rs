use hri_core::HriError;
use hri_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Core(#[from] HriError),

    #[error("trial {trial} failed: {source}")]
    Trial {
        trial:  usize,
        #[source]
        source: SimError,
    },

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error("dataset configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type DatasetResult<T> = Result<T, DatasetError>;

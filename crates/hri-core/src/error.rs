//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `HriError` as one
//! variant via `#[from]`, so `?` works across crate boundaries.

use thiserror::Error;

/// The top-level error type for `hri-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HriError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{what} has dimension {got}, expected {expected}")]
    Dimension {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `hri-*` crates.
pub type HriResult<T> = Result<T, HriError>;

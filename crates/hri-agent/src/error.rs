use hri_core::HriError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Core(#[from] HriError),

    #[error("human needs at least one candidate goal")]
    EmptyGoals,

    #[error("goal index {index} out of range for {len} goals")]
    GoalIndex { index: usize, len: usize },

    #[error("agent configuration error: {0}")]
    Config(String),
}

pub type AgentResult<T> = Result<T, AgentError>;

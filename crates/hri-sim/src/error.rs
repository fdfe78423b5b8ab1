use hri_agent::AgentError;
use hri_core::HriError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] HriError),

    #[error("agent construction failed: {0}")]
    Agent(#[from] AgentError),

    #[error("scenario error: {0}")]
    Scenario(String),

    #[error("trajectory has {got} states, expected horizon {expected}")]
    Incomplete { expected: usize, got: usize },
}

pub type SimResult<T> = Result<T, SimError>;

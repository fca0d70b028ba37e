use crate::executor::ExecutorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("At least one worker name is required")]
    NoWorkers,

    #[error("Invalid worker identity '{0}': expected 4 characters from [a-z0-9]")]
    InvalidIdentity(String),

    // Converts `ExecutorError` -> `ProviderError::Executor(err)`
    #[error("Executor error: {0}")]
    Executor(#[from] ExecutorError),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

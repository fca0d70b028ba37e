use crate::provider::ProviderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing prerequisite: {0}")]
    MissingPrerequisite(String),

    #[error("Invalid input: {0}")]
    InvalidInput(ProviderError),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("Teardown could not be dispatched for: {}", .failed.join(", "))]
    PartialDispatch { failed: Vec<String> },
}

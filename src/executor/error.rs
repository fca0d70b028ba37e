use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum ExecutorError {
    #[error("Failed to start '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    #[error("Failed to open detached output sink {path}: {message}")]
    SinkUnavailable { path: String, message: String },

    #[error("Generic executor error: {0}")]
    Other(String),
}

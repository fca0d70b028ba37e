use std::fmt;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use std::time::{Duration, SystemTime};
use thiserror::Error;

/// Errors that can occur when interpreting command output
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] FromUtf8Error),

    #[error("Output exceeds maximum size: {size} bytes")]
    OutputTooLarge { size: usize },
}

/// Raw output (stdout/stderr), exit code and timing of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub timestamp: SystemTime,
    pub duration: Duration,
}

impl Default for CommandOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandOutput {
    const MAX_OUTPUT_SIZE: usize = 10 * 1024 * 1024; // 10 MB

    pub fn new() -> Self {
        Self {
            stdout: vec![],
            stderr: vec![],
            exit_code: Some(0),
            timestamp: SystemTime::now(),
            duration: Duration::default(),
        }
    }

    pub fn to_stdout_string(&self) -> Result<String, OutputError> {
        Self::bytes_to_string(&self.stdout)
    }

    pub fn to_stderr_string(&self) -> Result<String, OutputError> {
        Self::bytes_to_string(&self.stderr)
    }

    fn bytes_to_string(bytes: &[u8]) -> Result<String, OutputError> {
        if bytes.len() > Self::MAX_OUTPUT_SIZE {
            return Err(OutputError::OutputTooLarge { size: bytes.len() });
        }
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

/// The command that was run plus its resulting output.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub command: String,
    pub output: CommandOutput,
}

impl CommandResult {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            output: CommandOutput::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.output.exit_code == Some(0)
    }
}

/// Where a detached command's stdout ends up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DiscardSink {
    /// Thrown away (`/dev/null`)
    #[default]
    Null,
    /// Appended to a file
    File(PathBuf),
}

impl fmt::Display for DiscardSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscardSink::Null => f.write_str("null"),
            DiscardSink::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A command that was started and deliberately never awaited.
///
/// Nothing can be learned about its outcome through this handle; worker
/// state is checked afterwards with `list`.
#[derive(Debug, Clone)]
#[must_use = "call `discard()` to make dropping a detached task explicit"]
pub struct DetachedTask {
    pub command: String,
    pub pid: Option<u32>,
}

impl DetachedTask {
    /// Let the task run on its own.
    pub fn discard(self) {}
}

use async_trait::async_trait;

use super::types::{CommandResult, DetachedTask, DiscardSink};
use super::ExecutorError;
use crate::provider::ProviderCommand;

/// A trait for running provider commands, either to completion or detached.
#[async_trait]
pub trait CommandExecutor {
    /// Run a command to completion and return its captured stdout/stderr/exit code.
    async fn execute_command(
        &mut self,
        command: &ProviderCommand,
    ) -> Result<CommandResult, ExecutorError>;

    /// Start a command without waiting on it. Its stdout goes to `sink`.
    ///
    /// Returns as soon as the process has been spawned.
    fn spawn_detached(
        &mut self,
        command: &ProviderCommand,
        sink: &DiscardSink,
    ) -> Result<DetachedTask, ExecutorError>;
}

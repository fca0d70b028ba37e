use async_trait::async_trait;
use std::fs::OpenOptions;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tracing::{debug, trace};

use super::error::ExecutorError;
use super::traits::CommandExecutor;
use super::types::{CommandOutput, CommandResult, DetachedTask, DiscardSink};
use crate::provider::ProviderCommand;

/// Runs provider commands as child processes of this machine.
pub struct LocalCommandExecutor;

impl Default for LocalCommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalCommandExecutor {
    pub fn new() -> Self {
        Self
    }

    fn command_for(command: &ProviderCommand) -> Command {
        let mut cmd = Command::new(command.program());
        cmd.args(command.arguments());
        cmd
    }

    fn open_sink(sink: &DiscardSink) -> Result<Stdio, ExecutorError> {
        match sink {
            DiscardSink::Null => Ok(Stdio::null()),
            DiscardSink::File(path) => OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map(Stdio::from)
                .map_err(|e| ExecutorError::SinkUnavailable {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }),
        }
    }
}

#[async_trait]
impl CommandExecutor for LocalCommandExecutor {
    async fn execute_command(
        &mut self,
        command: &ProviderCommand,
    ) -> Result<CommandResult, ExecutorError> {
        trace!(%command, "running to completion");
        let start_time = Instant::now();

        let output = Self::command_for(command)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| ExecutorError::SpawnFailed {
                program: command.program().to_string(),
                message: e.to_string(),
            })?;

        let mut cmd_output = CommandOutput::new();
        cmd_output.stdout = output.stdout;
        cmd_output.stderr = output.stderr;
        cmd_output.exit_code = output.status.code();
        cmd_output.duration = start_time.elapsed();

        debug!(
            %command,
            exit_code = ?cmd_output.exit_code,
            elapsed_ms = cmd_output.duration.as_millis() as u64,
            "command finished"
        );

        Ok(CommandResult {
            command: command.to_string(),
            output: cmd_output,
        })
    }

    fn spawn_detached(
        &mut self,
        command: &ProviderCommand,
        sink: &DiscardSink,
    ) -> Result<DetachedTask, ExecutorError> {
        let stdout = Self::open_sink(sink)?;

        // stderr stays attached so provider failures still reach the terminal
        let child = Self::command_for(command)
            .stdin(Stdio::null())
            .stdout(stdout)
            .kill_on_drop(false)
            .spawn()
            .map_err(|e| ExecutorError::SpawnFailed {
                program: command.program().to_string(),
                message: e.to_string(),
            })?;

        let pid = child.id();
        trace!(%command, ?pid, %sink, "spawned detached");

        Ok(DetachedTask {
            command: command.to_string(),
            pid,
        })
    }
}

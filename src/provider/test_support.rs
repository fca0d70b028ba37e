use crate::executor::{
    CommandExecutor, CommandResult, DetachedTask, DiscardSink, ExecutorError,
};
use crate::provider::ProviderCommand;
use async_trait::async_trait;
use std::collections::HashMap;

/// Records every command it sees; answers sync commands from canned responses.
pub struct MockExecutor {
    responses: HashMap<String, CommandResult>,
    failing_detached: Vec<String>,
    pub executed: Vec<String>,
    pub detached: Vec<String>,
    pub sinks: Vec<DiscardSink>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            failing_detached: Vec::new(),
            executed: Vec::new(),
            detached: Vec::new(),
            sinks: Vec::new(),
        }
    }

    pub fn respond(&mut self, command: &str, exit_code: i32, stdout: &str) {
        let mut result = CommandResult::new(command);
        result.output.exit_code = Some(exit_code);
        result.output.stdout = stdout.as_bytes().to_vec();
        self.responses.insert(command.to_string(), result);
    }

    /// Detached spawns whose rendered command contains `needle` fail.
    pub fn fail_detached_containing(&mut self, needle: &str) {
        self.failing_detached.push(needle.to_string());
    }

    pub fn all_commands(&self) -> Vec<&str> {
        self.executed
            .iter()
            .chain(self.detached.iter())
            .map(String::as_str)
            .collect()
    }
}

#[async_trait]
impl CommandExecutor for MockExecutor {
    async fn execute_command(
        &mut self,
        command: &ProviderCommand,
    ) -> Result<CommandResult, ExecutorError> {
        let rendered = command.to_string();
        self.executed.push(rendered.clone());
        self.responses
            .get(&rendered)
            .cloned()
            .ok_or_else(|| ExecutorError::SpawnFailed {
                program: command.program().to_string(),
                message: "No such file or directory (os error 2)".to_string(),
            })
    }

    fn spawn_detached(
        &mut self,
        command: &ProviderCommand,
        sink: &DiscardSink,
    ) -> Result<DetachedTask, ExecutorError> {
        let rendered = command.to_string();
        if self.failing_detached.iter().any(|n| rendered.contains(n)) {
            return Err(ExecutorError::Other(format!("mock spawn failure: {}", rendered)));
        }
        self.detached.push(rendered.clone());
        self.sinks.push(sink.clone());
        Ok(DetachedTask {
            command: rendered,
            pid: None,
        })
    }
}

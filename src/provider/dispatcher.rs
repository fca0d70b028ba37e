use super::command::ProviderCommand;
use super::error::ProviderResult;
use crate::executor::{CommandExecutor, CommandResult, DetachedTask, DiscardSink};
use tokio::sync::mpsc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Wait for the command and hand its output back
    Sync,
    /// Start the command and return immediately
    Async,
}

#[derive(Debug, Clone, Default)]
pub struct DispatcherConfig {
    /// Destination for detached commands' stdout
    pub sink: DiscardSink,
}

/// Progress and trace notifications emitted while dispatching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    /// Exact command about to be launched in the background
    Echo(String),
    Launched { command: String, pid: Option<u32> },
    Failed { command: String, error: String },
}

#[derive(Debug)]
pub enum DispatchOutcome {
    Completed(CommandResult),
    Detached(DetachedTask),
}

pub struct Dispatcher<'a, E: CommandExecutor + Send + ?Sized> {
    executor: &'a mut E,
    config: DispatcherConfig,
    event_sender: Option<mpsc::Sender<DispatchEvent>>,
}

impl<'a, E: CommandExecutor + Send + ?Sized> Dispatcher<'a, E> {
    pub fn new(
        executor: &'a mut E,
        config: DispatcherConfig,
        event_sender: Option<mpsc::Sender<DispatchEvent>>,
    ) -> Self {
        Self {
            executor,
            config,
            event_sender,
        }
    }

    async fn send_event(&self, event: DispatchEvent) {
        if let Some(sender) = &self.event_sender {
            if let Err(e) = sender.send(event).await {
                warn!("Failed to send dispatch event: {}", e);
            }
        }
    }

    pub async fn execute(
        &mut self,
        command: &ProviderCommand,
        mode: ExecutionMode,
    ) -> ProviderResult<DispatchOutcome> {
        match mode {
            ExecutionMode::Sync => self.query(command).await.map(DispatchOutcome::Completed),
            ExecutionMode::Async => self.spawn(command).await.map(DispatchOutcome::Detached),
        }
    }

    /// Runs a query and returns its output, whatever the exit status.
    pub async fn query(&mut self, command: &ProviderCommand) -> ProviderResult<CommandResult> {
        let result = self.executor.execute_command(command).await?;
        if !result.is_success() {
            warn!(
                command = %command,
                exit_code = ?result.output.exit_code,
                "provider command exited with failure"
            );
        }
        Ok(result)
    }

    /// Launches a command in the background and forgets about it.
    pub async fn launch(&mut self, command: &ProviderCommand) -> ProviderResult<()> {
        self.spawn(command).await?.discard();
        Ok(())
    }

    async fn spawn(&mut self, command: &ProviderCommand) -> ProviderResult<DetachedTask> {
        let rendered = command.to_string();
        debug!(command = %rendered, sink = %self.config.sink, "dispatching in background");
        self.send_event(DispatchEvent::Echo(rendered.clone())).await;

        match self.executor.spawn_detached(command, &self.config.sink) {
            Ok(task) => {
                self.send_event(DispatchEvent::Launched {
                    command: rendered,
                    pid: task.pid,
                })
                .await;
                Ok(task)
            }
            Err(e) => {
                self.send_event(DispatchEvent::Failed {
                    command: rendered,
                    error: e.to_string(),
                })
                .await;
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::error::ProviderError;
    use crate::provider::test_support::MockExecutor;

    fn delete(name: &str) -> ProviderCommand {
        ProviderCommand::new("gcloud").args(["compute", "instances", "delete", name, "--zone", "z", "-q"])
    }

    #[tokio::test]
    async fn test_sync_returns_failed_output_without_error() {
        let mut executor = MockExecutor::new();
        executor.respond("gcloud compute instances list", 1, "");
        let mut dispatcher = Dispatcher::new(&mut executor, DispatcherConfig::default(), None);

        let cmd = ProviderCommand::new("gcloud").args(["compute", "instances", "list"]);
        let result = dispatcher.query(&cmd).await.unwrap();
        assert_eq!(result.output.exit_code, Some(1));
    }

    #[tokio::test]
    async fn test_execute_mode_selects_outcome() {
        let mut executor = MockExecutor::new();
        executor.respond("gcloud --version", 0, "Google Cloud SDK\n");
        let mut dispatcher = Dispatcher::new(&mut executor, DispatcherConfig::default(), None);

        let probe = ProviderCommand::new("gcloud").arg("--version");
        let sync = dispatcher.execute(&probe, ExecutionMode::Sync).await.unwrap();
        assert!(matches!(sync, DispatchOutcome::Completed(r) if r.is_success()));

        let detached = dispatcher.execute(&delete("a"), ExecutionMode::Async).await.unwrap();
        match detached {
            DispatchOutcome::Detached(task) => {
                assert_eq!(task.command, delete("a").to_string());
                task.discard();
            }
            other => panic!("expected detached outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_async_echoes_before_launch() {
        let mut executor = MockExecutor::new();
        let (sender, mut receiver) = mpsc::channel(8);
        let mut dispatcher = Dispatcher::new(&mut executor, DispatcherConfig::default(), Some(sender));

        dispatcher.launch(&delete("a")).await.unwrap();
        drop(dispatcher);

        let rendered = delete("a").to_string();
        assert_eq!(receiver.recv().await, Some(DispatchEvent::Echo(rendered.clone())));
        assert!(matches!(
            receiver.recv().await,
            Some(DispatchEvent::Launched { command, .. }) if command == rendered
        ));
        assert_eq!(receiver.recv().await, None);
        assert_eq!(executor.detached, vec![rendered]);
    }

    #[tokio::test]
    async fn test_async_passes_injected_sink() {
        let mut executor = MockExecutor::new();
        let config = DispatcherConfig {
            sink: DiscardSink::File("/tmp/loadgen.log".into()),
        };
        let mut dispatcher = Dispatcher::new(&mut executor, config.clone(), None);

        dispatcher.launch(&delete("a")).await.unwrap();
        assert_eq!(executor.sinks, vec![config.sink]);
    }

    #[tokio::test]
    async fn test_async_spawn_failure_is_reported() {
        let mut executor = MockExecutor::new();
        executor.fail_detached_containing("delete b ");
        let (sender, mut receiver) = mpsc::channel(8);
        let mut dispatcher = Dispatcher::new(&mut executor, DispatcherConfig::default(), Some(sender));

        let err = dispatcher.launch(&delete("b")).await.unwrap_err();
        assert!(matches!(err, ProviderError::Executor(_)));
        drop(dispatcher);

        assert!(matches!(receiver.recv().await, Some(DispatchEvent::Echo(_))));
        assert!(matches!(receiver.recv().await, Some(DispatchEvent::Failed { .. })));
    }
}

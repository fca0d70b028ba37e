use super::builder::CommandBuilder;
use super::dispatcher::{DispatchEvent, Dispatcher, DispatcherConfig};
use super::error::{ProviderError, ProviderResult};
use super::identity::WorkerIdentity;
use super::types::{LaunchSpec, ProviderConfig, TeardownSpec};
use crate::executor::{CommandExecutor, CommandResult};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Outcome of a teardown fan-out. Only covers dispatch, never the deletions themselves.
#[derive(Debug, Default)]
pub struct TeardownReport {
    pub dispatched: Vec<String>,
    pub failed: Vec<(String, ProviderError)>,
}

impl TeardownReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_names(&self) -> Vec<&str> {
        self.failed.iter().map(|(name, _)| name.as_str()).collect()
    }
}

/// Drives worker lifecycle operations against the provider.
pub struct WorkerManager<'a, E: CommandExecutor + Send + ?Sized> {
    config: &'a ProviderConfig,
    dispatcher: Dispatcher<'a, E>,
}

impl<'a, E: CommandExecutor + Send + ?Sized> WorkerManager<'a, E> {
    pub fn new(
        config: &'a ProviderConfig,
        executor: &'a mut E,
        dispatcher_config: DispatcherConfig,
        event_sender: Option<mpsc::Sender<DispatchEvent>>,
    ) -> Self {
        debug!(
            binary = %config.binary,
            machine_type = %config.machine_type,
            image = %config.image,
            sink = %dispatcher_config.sink,
            "worker manager created"
        );
        Self {
            config,
            dispatcher: Dispatcher::new(executor, dispatcher_config, event_sender),
        }
    }

    fn builder(&self) -> CommandBuilder<'a> {
        CommandBuilder::new(self.config)
    }

    /// Launches one worker in the background and returns the name it was given.
    pub async fn startup(&mut self, spec: &LaunchSpec) -> ProviderResult<String> {
        let identity = WorkerIdentity::generate();
        let builder = self.builder();
        let name = builder.worker_name(&identity);
        let command = builder.startup(spec, &identity);

        info!(
            worker = %name,
            target = %spec.target,
            zone = %spec.zone,
            scenarios = spec.scenarios.len(),
            "launching worker"
        );
        self.dispatcher.launch(&command).await?;
        Ok(name)
    }

    /// Queries the provider for current workers. Output is returned untouched.
    pub async fn list(&mut self) -> ProviderResult<CommandResult> {
        let command = self.builder().list();
        self.dispatcher.query(&command).await
    }

    /// Dispatches one delete per name. A failed dispatch never stops the rest.
    pub async fn teardown(&mut self, spec: &TeardownSpec) -> TeardownReport {
        let builder = self.builder();
        let mut report = TeardownReport::default();

        for name in &spec.names {
            let command = builder.teardown(name, &spec.zone);
            match self.dispatcher.launch(&command).await {
                Ok(()) => {
                    info!(worker = %name, zone = %spec.zone, "teardown dispatched");
                    report.dispatched.push(name.clone());
                }
                Err(e) => {
                    warn!(worker = %name, error = %e, "teardown dispatch failed, continuing");
                    report.failed.push((name.clone(), e));
                }
            }
        }
        report
    }
}

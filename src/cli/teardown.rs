use super::common::dispatcher_config;
use super::error::CliError;
use super::parser::Cli;
use super::ui;
use crate::executor::CommandExecutor;
use crate::provider::{ProviderConfig, TeardownSpec, WorkerManager};
use clap::Args;
use tracing::{error, instrument};

#[derive(Debug, Args)]
pub struct Teardown {
    /// Names of the workers to delete
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,

    /// Zone the workers run in
    #[arg(long, required = true)]
    pub zone: String,
}

impl Teardown {
    #[instrument(name = "teardown", skip_all, fields(zone = %self.zone, count = self.names.len()))]
    pub async fn run<E: CommandExecutor + Send + ?Sized>(
        &self,
        cli_args: &Cli,
        config: &ProviderConfig,
        executor: &mut E,
    ) -> Result<(), CliError> {
        let spec =
            TeardownSpec::new(self.names.clone(), self.zone.clone()).map_err(CliError::InvalidInput)?;

        let (sender, ui_task) = ui::spawn_event_printer();
        let mut manager =
            WorkerManager::new(config, executor, dispatcher_config(cli_args), Some(sender));
        let report = manager.teardown(&spec).await;

        drop(manager);
        if let Err(e) = ui_task.await {
            error!("UI update task failed: {}", e);
        }

        for name in &report.dispatched {
            println!(
                "{} {}",
                ui::format_success("Deleting"),
                ui::format_highlight(name)
            );
        }

        if !report.is_complete() {
            return Err(CliError::PartialDispatch {
                failed: report.failed_names().into_iter().map(String::from).collect(),
            });
        }
        Ok(())
    }
}

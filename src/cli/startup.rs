use super::common::dispatcher_config;
use super::error::CliError;
use super::parser::Cli;
use super::ui;
use crate::executor::CommandExecutor;
use crate::provider::{LaunchSpec, ProviderConfig, WorkerManager};
use clap::Args;
use tracing::{error, instrument};

#[derive(Debug, Args)]
pub struct Startup {
    /// Address the worker sends traffic to
    #[arg(required = true)]
    pub target_ip: String,

    /// Zone to create the worker in
    #[arg(long, required = true)]
    pub zone: String,

    /// Scenarios to run; all of them when omitted
    #[arg(long, num_args = 1..)]
    pub scenarios: Vec<String>,
}

impl Startup {
    #[instrument(name = "startup", skip_all, fields(target = %self.target_ip, zone = %self.zone))]
    pub async fn run<E: CommandExecutor + Send + ?Sized>(
        &self,
        cli_args: &Cli,
        config: &ProviderConfig,
        executor: &mut E,
    ) -> Result<(), CliError> {
        let spec = LaunchSpec::new(
            self.target_ip.clone(),
            self.zone.clone(),
            self.scenarios.clone(),
        )
        .map_err(CliError::InvalidInput)?;

        let (sender, ui_task) = ui::spawn_event_printer();
        let mut manager =
            WorkerManager::new(config, executor, dispatcher_config(cli_args), Some(sender));
        let startup_result = manager.startup(&spec).await;

        // Close the event channel so the printer finishes
        drop(manager);
        if let Err(e) = ui_task.await {
            error!("UI update task failed: {}", e);
        }

        let name = startup_result
            .map_err(|e| CliError::OperationFailed(format!("Startup dispatch failed: {}", e)))?;

        println!(
            "{} {} in {}",
            ui::format_success("Launching worker"),
            ui::format_highlight(&name),
            ui::format_highlight(&spec.zone)
        );
        println!("Run `loadgen list` to check on it.");
        Ok(())
    }
}

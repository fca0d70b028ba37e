mod common;
mod error;
mod list;
pub mod parser;
mod startup;
mod teardown;
mod ui;

use crate::executor::{CommandExecutor, LocalCommandExecutor};
use crate::provider::PrerequisiteChecker;
use clap::Parser;
pub use error::CliError;
use parser::Cli;

// Helper function to parse args
pub fn parse_args() -> Cli {
    Cli::parse()
}

// Main CLI execution function, receives parsed args
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let mut executor = LocalCommandExecutor::new();
    run_with(cli, &mut executor).await
}

/// Runs a parsed invocation against the given executor.
///
/// Nothing is built or dispatched unless the provider CLI answers first.
pub async fn run_with<E: CommandExecutor + Send + ?Sized>(
    cli: Cli,
    executor: &mut E,
) -> Result<(), CliError> {
    let config = common::provider_config(&cli);

    let mut checker = PrerequisiteChecker::new(&mut *executor, &config);
    if !checker.check().await {
        return Err(CliError::MissingPrerequisite(checker.diagnostic()));
    }

    match &cli.command {
        parser::Commands::Startup(cmd) => cmd.run(&cli, &config, executor).await,
        parser::Commands::List(cmd) => cmd.run(&config, executor).await,
        parser::Commands::Teardown(cmd) => cmd.run(&cli, &config, executor).await,
    }
}

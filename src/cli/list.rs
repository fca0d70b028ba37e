use super::error::CliError;
use super::ui;
use crate::executor::{CommandExecutor, CommandResult};
use crate::provider::{DispatcherConfig, ProviderConfig, WorkerManager};
use clap::Args;
use std::io::{self, Write};
use tracing::{info, instrument};

#[derive(Debug, Args)]
pub struct List {
    /// Disable interactive progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

/// Copies the provider's output through unchanged.
fn write_provider_output<O: Write, E: Write>(
    result: &CommandResult,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    out.write_all(&result.output.stdout)?;
    out.flush()?;
    err.write_all(&result.output.stderr)?;
    err.flush()
}

impl List {
    #[instrument(name = "list", skip_all)]
    pub async fn run<E: CommandExecutor + Send + ?Sized>(
        &self,
        config: &ProviderConfig,
        executor: &mut E,
    ) -> Result<(), CliError> {
        let spinner = if self.no_progress {
            info!("Progress spinner disabled via --no-progress.");
            None
        } else {
            Some(ui::create_spinner("Querying workers..."))
        };

        // Queries never detach, so no event channel is needed
        let list_result = WorkerManager::new(config, executor, DispatcherConfig::default(), None)
            .list()
            .await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        let result = list_result
            .map_err(|e| CliError::OperationFailed(format!("Listing workers failed: {}", e)))?;

        write_provider_output(&result, &mut io::stdout().lock(), &mut io::stderr().lock())
            .map_err(|e| CliError::OperationFailed(format!("Failed to print output: {}", e)))?;

        if !result.is_success() {
            let status = result
                .output
                .exit_code
                .map_or_else(|| "a signal".to_string(), |code| code.to_string());
            eprintln!(
                "{}",
                ui::format_warning(&format!("{} exited with {}", config.binary, status))
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_output_is_copied_verbatim() {
        let mut result = CommandResult::new("gcloud compute instances list");
        result.output.stdout = b"Listed 0 items.\n".to_vec();
        result.output.stderr = b"WARNING: no zone set\n".to_vec();

        let mut out = Vec::new();
        let mut err = Vec::new();
        write_provider_output(&result, &mut out, &mut err).unwrap();

        assert_eq!(out, b"Listed 0 items.\n");
        assert_eq!(err, b"WARNING: no zone set\n");
    }

    #[test]
    fn test_empty_output_stays_empty() {
        let result = CommandResult::new("gcloud compute instances list");
        let mut out = Vec::new();
        let mut err = Vec::new();
        write_provider_output(&result, &mut out, &mut err).unwrap();

        assert!(out.is_empty());
        assert!(err.is_empty());
    }
}

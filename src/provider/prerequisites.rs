use super::builder::CommandBuilder;
use super::types::{ProviderConfig, INSTALL_URL};
use crate::executor::CommandExecutor;
use tracing::{debug, error};

/// Gates every lifecycle operation on the provider CLI being callable.
pub struct PrerequisiteChecker<'a, E: CommandExecutor + Send + ?Sized> {
    executor: &'a mut E,
    config: &'a ProviderConfig,
}

impl<'a, E: CommandExecutor + Send + ?Sized> PrerequisiteChecker<'a, E> {
    pub fn new(executor: &'a mut E, config: &'a ProviderConfig) -> Self {
        Self { executor, config }
    }

    /// Diagnostic shown when the provider CLI is missing or broken.
    pub fn diagnostic(&self) -> String {
        format!(
            "'{}' is not installed or not working. Install the Google Cloud SDK from {} and run `gcloud auth login`.",
            self.config.binary, INSTALL_URL
        )
    }

    /// Runs the provider's version command with its output captured and dropped.
    pub async fn check(&mut self) -> bool {
        let probe = CommandBuilder::new(self.config).version_probe();
        match self.executor.execute_command(&probe).await {
            Ok(result) if result.is_success() => {
                let version = result.output.to_stdout_string().unwrap_or_default();
                debug!(
                    command = %probe,
                    version = version.lines().next().unwrap_or(""),
                    "provider CLI available"
                );
                true
            }
            Ok(result) => {
                error!(
                    command = %probe,
                    exit_code = ?result.output.exit_code,
                    "{}",
                    self.diagnostic()
                );
                false
            }
            Err(e) => {
                error!(command = %probe, error = %e, "{}", self.diagnostic());
                false
            }
        }
    }
}

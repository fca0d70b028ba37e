use super::command::ProviderCommand;
use super::identity::WorkerIdentity;
use super::types::{LaunchSpec, ProviderConfig};

/// Renders provider commands, one instance per command.
pub struct CommandBuilder<'a> {
    config: &'a ProviderConfig,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(config: &'a ProviderConfig) -> Self {
        Self { config }
    }

    fn instances(&self) -> ProviderCommand {
        ProviderCommand::new(&self.config.binary).args(["compute", "instances"])
    }

    pub fn worker_name(&self, identity: &WorkerIdentity) -> String {
        format!("{}-{}", self.config.name_prefix, identity)
    }

    /// Command that only succeeds when the provider CLI is installed.
    pub fn version_probe(&self) -> ProviderCommand {
        ProviderCommand::new(&self.config.binary).arg("--version")
    }

    pub fn startup(&self, spec: &LaunchSpec, identity: &WorkerIdentity) -> ProviderCommand {
        self.instances()
            .arg("create-with-container")
            .arg(self.worker_name(identity))
            .arg(format!("--zone={}", spec.zone))
            .arg(format!("--machine-type={}", self.config.machine_type))
            .arg(format!("--container-image={}", self.config.image))
            .arg(format!("--container-env=FRONTEND_ADDR={}", spec.target))
            .args(
                spec.scenarios
                    .iter()
                    .map(|scenario| format!("--container-arg={}", scenario)),
            )
    }

    pub fn list(&self) -> ProviderCommand {
        self.instances()
            .arg("list")
            .arg(format!("--filter=name~{}*", self.config.name_prefix))
    }

    pub fn teardown(&self, name: &str, zone: &str) -> ProviderCommand {
        self.instances()
            .args(["delete", name, "--zone", zone, "-q"])
    }
}

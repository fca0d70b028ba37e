use super::parser::Cli;
use crate::executor::DiscardSink;
use crate::provider::{DispatcherConfig, ProviderConfig};

pub fn provider_config(cli: &Cli) -> ProviderConfig {
    ProviderConfig {
        binary: cli.provider_bin.clone(),
        machine_type: cli.machine_type.clone(),
        image: cli.image.clone(),
        ..ProviderConfig::default()
    }
}

pub fn dispatcher_config(cli: &Cli) -> DispatcherConfig {
    let sink = match &cli.detached_log {
        Some(path) => DiscardSink::File(path.clone()),
        None => DiscardSink::Null,
    };
    DispatcherConfig { sink }
}

pub mod builder;
pub mod command;
pub mod dispatcher;
pub mod error;
pub mod identity;
pub mod prerequisites;
pub mod service;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use builder::CommandBuilder;
pub use command::ProviderCommand;
pub use dispatcher::{DispatchEvent, DispatchOutcome, Dispatcher, DispatcherConfig, ExecutionMode};
pub use error::{ProviderError, ProviderResult};
pub use identity::WorkerIdentity;
pub use prerequisites::PrerequisiteChecker;
pub use service::{TeardownReport, WorkerManager};
pub use types::{LaunchSpec, ProviderConfig, TeardownSpec};

use super::{list, startup, teardown};
use crate::provider::types::{DEFAULT_IMAGE, DEFAULT_MACHINE_TYPE, DEFAULT_PROVIDER_BIN};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

const VERSION_INFO: &str = env!("LOADGEN_BUILD_VERSION");

#[derive(Parser, Debug)]
#[command(name = "loadgen")]
#[command(about = "Manage load generator workers on Google Compute Engine", long_about = None, version = VERSION_INFO)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Provider CLI executable
    #[arg(long, env = "LOADGEN_PROVIDER_BIN", default_value = DEFAULT_PROVIDER_BIN, global = true)]
    pub provider_bin: String,

    /// Machine type for new workers
    #[arg(long, env = "LOADGEN_MACHINE_TYPE", default_value = DEFAULT_MACHINE_TYPE, global = true)]
    pub machine_type: String,

    /// Container image new workers run
    #[arg(long, env = "LOADGEN_IMAGE", default_value = DEFAULT_IMAGE, global = true)]
    pub image: String,

    /// Append stdout of background provider commands to this file instead of discarding it
    #[arg(long, global = true)]
    pub detached_log: Option<PathBuf>,

    /// Increase message verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch a worker that sends traffic to a target address
    Startup(startup::Startup),

    /// List running workers
    List(list::List),

    /// Delete workers by name
    Teardown(teardown::Teardown),
}

//! Command-line interface: clap types, target resolution, command handlers,
//! and report rendering.

pub mod commands;
pub mod output;
pub mod targets;
pub mod types;

pub use types::{
    Cli, Commands, HostSourceArgs, JobKeyArgs, KillCommands, MonitorCommands, RestartCommands,
    StartCommands, StopCommands,
};

use crate::domain::models::JobKey;

impl From<JobKeyArgs> for JobKey {
    fn from(args: JobKeyArgs) -> Self {
        JobKey::new(args.environment, args.role, args.name)
    }
}

/// Print a top-level error in the requested format and exit non-zero.
///
/// A convergence timeout reaches this point only after the partial result has
/// already been reported.
pub fn handle_error(err: &anyhow::Error, to_json: bool) -> ! {
    if to_json {
        eprintln!("{}", serde_json::json!({ "error": format!("{err:#}") }));
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}

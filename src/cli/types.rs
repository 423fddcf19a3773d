//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI
//! interface.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::infrastructure::config::DEFAULT_CONFIG_PATH;

#[derive(Parser)]
#[command(name = "drover")]
#[command(about = "Operator CLI for cluster scheduler maintenance", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print output in JSON format
    #[arg(long, global = true)]
    pub to_json: bool,

    /// Config file to use
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Scheduler API address
    #[arg(short = 's', long, global = true, env = "DROVER_SCHEDULER__ADDR")]
    pub scheduler_addr: Option<String>,

    /// Username for API authentication
    #[arg(short = 'u', long, global = true)]
    pub username: Option<String>,

    /// Password for API authentication
    #[arg(short = 'p', long, global = true)]
    pub password: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short = 'l', long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Place hosts into a maintenance state
    #[command(subcommand)]
    Start(StartCommands),

    /// Take hosts out of a maintenance state
    #[command(subcommand)]
    Stop(StopCommands),

    /// Watch state without mutating anything
    #[command(subcommand)]
    Monitor(MonitorCommands),

    /// Kill job instances
    #[command(subcommand)]
    Kill(KillCommands),

    /// Restart jobs
    #[command(subcommand)]
    Restart(RestartCommands),
}

/// Host list input, from exactly one of three mutually exclusive sources.
#[derive(Args, Debug, Clone)]
pub struct HostSourceArgs {
    /// Hosts to operate on
    pub hosts: Vec<String>,

    /// Read a JSON array of hosts from stdin
    #[arg(long)]
    pub json: bool,

    /// Read a JSON array of hosts from a file
    #[arg(long, value_name = "PATH")]
    pub json_file: Option<PathBuf>,
}

/// Job identity flags shared by instance-level commands.
#[derive(Args, Debug, Clone)]
pub struct JobKeyArgs {
    /// Job environment
    #[arg(short = 'e', long)]
    pub environment: String,

    /// Job role
    #[arg(short = 'r', long)]
    pub role: String,

    /// Job name
    #[arg(short = 'n', long)]
    pub name: String,
}

#[derive(Subcommand)]
pub enum StartCommands {
    /// Drain hosts: stop scheduling new work and relocate running work
    Drain {
        #[command(flatten)]
        targets: HostSourceArgs,

        /// Interval in seconds at which to poll the scheduler
        #[arg(long, default_value_t = 5)]
        interval: u64,

        /// Seconds after which the monitor stops polling and the command fails
        #[arg(long, default_value_t = 600)]
        timeout: u64,
    },

    /// Drain hosts with an SLA-aware fallback policy
    SlaDrain {
        #[command(flatten)]
        targets: HostSourceArgs,

        /// Instance count that must stay running to meet the SLA
        #[arg(long)]
        count: Option<u64>,

        /// Percentage of instances that must stay running to meet the SLA
        #[arg(long)]
        percentage: Option<f64>,

        /// Minimum seconds an instance must be RUNNING to count as live
        #[arg(long, default_value_t = 60)]
        duration: u64,

        /// Seconds after which the drain sheds SLA awareness
        #[arg(long = "sla-limit", default_value_t = 3600)]
        sla_limit: u64,

        /// Interval in seconds at which to poll the scheduler
        #[arg(long, default_value_t = 10)]
        interval: u64,

        /// Seconds after which the monitor stops polling and the command fails
        #[arg(long, default_value_t = 1200)]
        timeout: u64,
    },

    /// Mark hosts for maintenance without draining them
    Maintenance {
        #[command(flatten)]
        targets: HostSourceArgs,

        /// Interval in seconds at which to poll the scheduler
        #[arg(long, default_value_t = 5)]
        interval: u64,

        /// Seconds after which the monitor stops polling and the command fails
        #[arg(long, default_value_t = 600)]
        timeout: u64,
    },
}

#[derive(Subcommand)]
pub enum StopCommands {
    /// Move hosts currently in a maintenance state back to NONE
    Drain {
        #[command(flatten)]
        targets: HostSourceArgs,

        /// Interval in seconds at which to poll the scheduler
        #[arg(long, default_value_t = 5)]
        interval: u64,

        /// Seconds after which the monitor stops polling and the command fails
        #[arg(long, default_value_t = 60)]
        timeout: u64,
    },
}

#[derive(Subcommand)]
pub enum MonitorCommands {
    /// Watch hosts until each enters one of the desired maintenance modes
    Hosts {
        #[command(flatten)]
        targets: HostSourceArgs,

        /// Acceptable maintenance modes, case-insensitive
        /// [NONE, SCHEDULED, DRAINING, DRAINED]
        #[arg(long, value_delimiter = ',', default_value = "DRAINED")]
        statuses: Vec<String>,

        /// Interval in seconds at which to poll the scheduler
        #[arg(long, default_value_t = 5)]
        interval: u64,

        /// Seconds after which the monitor stops polling and the command fails
        #[arg(long, default_value_t = 600)]
        timeout: u64,
    },
}

#[derive(Subcommand)]
pub enum KillCommands {
    /// Kill specific instances of a job
    Instances {
        #[command(flatten)]
        job: JobKeyArgs,

        /// Instance numbers to kill
        #[arg(short = 'i', long, value_delimiter = ',', required = true)]
        instances: Vec<u32>,

        /// Monitor the instances until they reach a terminal state
        #[arg(short = 'm', long, default_value_t = true, action = ArgAction::Set, num_args = 1)]
        monitor: bool,

        /// Interval in seconds at which to poll the scheduler
        #[arg(long, default_value_t = 5)]
        interval: u64,

        /// Seconds after which the monitor stops polling and the command fails
        #[arg(long, default_value_t = 50)]
        timeout: u64,
    },

    /// Kill every instance of a job
    Job {
        #[command(flatten)]
        job: JobKeyArgs,

        /// Monitor the instances until they reach a terminal state
        #[arg(short = 'm', long, default_value_t = true, action = ArgAction::Set, num_args = 1)]
        monitor: bool,

        /// Interval in seconds at which to poll the scheduler
        #[arg(long, default_value_t = 5)]
        interval: u64,

        /// Seconds after which the monitor stops polling and the command fails
        #[arg(long, default_value_t = 50)]
        timeout: u64,
    },
}

#[derive(Subcommand)]
pub enum RestartCommands {
    /// Restart every instance of a job
    Job {
        #[command(flatten)]
        job: JobKeyArgs,

        /// Monitor the instances until they are running again
        #[arg(short = 'm', long, default_value_t = true, action = ArgAction::Set, num_args = 1)]
        monitor: bool,

        /// Interval in seconds at which to poll the scheduler
        #[arg(long, default_value_t = 5)]
        interval: u64,

        /// Seconds after which the monitor stops polling and the command fails
        #[arg(long, default_value_t = 120)]
        timeout: u64,
    },
}

//! drover - operator CLI for cluster scheduler maintenance.
//!
//! drover mutates job, task, and host state on a cluster scheduler (drain,
//! maintenance, kill, restart) and then polls the scheduler until the cluster
//! converges to the requested state, reporting which targets made it and
//! which did not.
//!
//! # Architecture
//!
//! - **Domain** (`domain`): models, errors, and the scheduler client port
//! - **Services** (`services`): the convergence polling engine
//! - **Infrastructure** (`infrastructure`): config loading, HTTP client
//! - **CLI** (`cli`): command-line surface and handlers

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, ConvergenceResult, DrainPolicy, InstanceStatus, JobKey, MaintenanceMode,
    MonitorConfig, Outcome, SlaPolicy,
};
pub use domain::ports::SchedulerClient;
pub use infrastructure::config::ConfigLoader;
pub use infrastructure::scheduler::HttpSchedulerClient;
pub use services::ConvergenceMonitor;

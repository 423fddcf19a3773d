//! Domain models.

pub mod config;
mod instance;
mod maintenance;
mod monitor;
mod sla;

pub use config::{Config, LoggingConfig, SchedulerConfig};
pub use instance::{InstanceStatus, JobKey};
pub use maintenance::MaintenanceMode;
pub use monitor::{ConvergenceResult, MonitorConfig, Outcome};
pub use sla::{DrainPolicy, SlaPolicy};

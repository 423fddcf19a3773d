//! Ports (capability interfaces) to external collaborators.

mod scheduler;

pub use scheduler::SchedulerClient;

//! Job and task-instance identifiers plus the instance state projection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fully qualified job identifier: environment, role, and job name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobKey {
    pub environment: String,
    pub role: String,
    pub name: String,
}

impl JobKey {
    pub fn new(
        environment: impl Into<String>,
        role: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            environment: environment.into(),
            role: role.into(),
            name: name.into(),
        }
    }

    /// Target identifier for a single instance of this job, used when
    /// instances are fed through the convergence monitor.
    pub fn instance_target(&self, instance: u32) -> String {
        format!("{self}/{instance}")
    }
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.environment, self.role, self.name)
    }
}

/// Coarse projection of a task instance's scheduler state.
///
/// The scheduler tracks a much finer state machine; the client only needs to
/// know whether an instance is waiting, live, or gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceStatus {
    /// Assigned or starting, not yet serving.
    Pending,
    /// Live and serving.
    Running,
    /// Finished, killed, failed, or garbage-collected.
    Terminal,
}

impl InstanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceStatus::Pending => "PENDING",
            InstanceStatus::Running => "RUNNING",
            InstanceStatus::Terminal => "TERMINAL",
        }
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_target_includes_job_key_and_number() {
        let key = JobKey::new("prod", "www-data", "hello");
        assert_eq!(key.instance_target(3), "prod/www-data/hello/3");
    }
}

//! Capability port for the cluster scheduler.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::errors::SchedulerError;
use crate::domain::models::{DrainPolicy, InstanceStatus, JobKey, MaintenanceMode};

/// Client port for the cluster scheduler's admin API.
///
/// Mutations are fire-and-forget: they return an acknowledgement, never the
/// converged outcome. Re-issuing a mutation for a target already in the
/// requested state is not an error. State queries are batched — one call
/// covers every target in a poll round.
#[async_trait]
pub trait SchedulerClient: Send + Sync {
    /// Request that `hosts` be drained (end state DRAINED).
    async fn drain_hosts(&self, hosts: &[String]) -> Result<(), SchedulerError>;

    /// Request an SLA-aware drain. The scheduler applies `policy.sla` as a
    /// fallback for jobs without their own SLA and escalates to a hard drain
    /// after `policy.escalation_timeout_secs`.
    async fn sla_drain_hosts(
        &self,
        hosts: &[String],
        policy: &DrainPolicy,
    ) -> Result<(), SchedulerError>;

    /// Mark `hosts` for maintenance (end state SCHEDULED).
    async fn start_maintenance(&self, hosts: &[String]) -> Result<(), SchedulerError>;

    /// Take `hosts` out of any maintenance state (end state NONE).
    async fn end_maintenance(&self, hosts: &[String]) -> Result<(), SchedulerError>;

    /// Batched maintenance-mode lookup. Hosts unknown to the scheduler may be
    /// absent from the returned map.
    async fn maintenance_status(
        &self,
        hosts: &[String],
    ) -> Result<HashMap<String, MaintenanceMode>, SchedulerError>;

    /// Kill specific instances of a job.
    async fn kill_instances(&self, job: &JobKey, instances: &[u32])
        -> Result<(), SchedulerError>;

    /// Kill every instance of a job.
    async fn kill_job(&self, job: &JobKey) -> Result<(), SchedulerError>;

    /// Restart every instance of a job.
    async fn restart_job(&self, job: &JobKey) -> Result<(), SchedulerError>;

    /// Instance numbers the scheduler currently considers active (pending or
    /// running) for `job`.
    async fn active_instances(&self, job: &JobKey) -> Result<Vec<u32>, SchedulerError>;

    /// Batched instance-state lookup. Instances the scheduler has
    /// garbage-collected may be absent from the returned map.
    async fn instance_status(
        &self,
        job: &JobKey,
        instances: &[u32],
    ) -> Result<HashMap<u32, InstanceStatus>, SchedulerError>;
}

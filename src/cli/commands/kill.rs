//! `drover kill` handlers.

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::commands::converge_instances;
use crate::domain::models::{InstanceStatus, JobKey};
use crate::domain::ports::SchedulerClient;

/// Kill specific instances of a job, optionally waiting for them to reach a
/// terminal state.
pub async fn instances(
    client: &dyn SchedulerClient,
    job: &JobKey,
    instances: &[u32],
    monitor: bool,
    interval: u64,
    timeout: u64,
    to_json: bool,
) -> Result<()> {
    info!(%job, ?instances, "killing instances");
    client
        .kill_instances(job, instances)
        .await
        .context("Failed to kill instances")?;

    if monitor {
        converge_instances(
            client,
            job,
            instances,
            &[InstanceStatus::Terminal],
            interval,
            timeout,
            to_json,
        )
        .await
    } else {
        Ok(())
    }
}

/// Kill every instance of a job, optionally waiting for all of them to reach
/// a terminal state.
pub async fn job(
    client: &dyn SchedulerClient,
    job: &JobKey,
    monitor: bool,
    interval: u64,
    timeout: u64,
    to_json: bool,
) -> Result<()> {
    // Snapshot the live set before the mutation so the monitor knows which
    // instances to watch.
    let active = client
        .active_instances(job)
        .await
        .context("Failed to list active instances")?;

    info!(%job, active = active.len(), "killing job");
    client.kill_job(job).await.context("Failed to kill job")?;

    if monitor {
        converge_instances(
            client,
            job,
            &active,
            &[InstanceStatus::Terminal],
            interval,
            timeout,
            to_json,
        )
        .await
    } else {
        Ok(())
    }
}

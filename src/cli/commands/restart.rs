//! `drover restart` handlers.

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::commands::converge_instances;
use crate::domain::models::{InstanceStatus, JobKey};
use crate::domain::ports::SchedulerClient;

/// Restart every instance of a job, optionally waiting for all of them to
/// come back up.
pub async fn job(
    client: &dyn SchedulerClient,
    job: &JobKey,
    monitor: bool,
    interval: u64,
    timeout: u64,
    to_json: bool,
) -> Result<()> {
    let active = client
        .active_instances(job)
        .await
        .context("Failed to list active instances")?;

    info!(%job, active = active.len(), "restarting job");
    client
        .restart_job(job)
        .await
        .context("Failed to restart job")?;

    if monitor {
        converge_instances(
            client,
            job,
            &active,
            &[InstanceStatus::Running],
            interval,
            timeout,
            to_json,
        )
        .await
    } else {
        Ok(())
    }
}

//! `drover monitor` handlers: watch state without mutating anything.

use anyhow::Result;
use tracing::info;

use crate::cli::commands::converge_hosts;
use crate::cli::targets;
use crate::cli::types::HostSourceArgs;
use crate::domain::models::MaintenanceMode;
use crate::domain::ports::SchedulerClient;

/// Watch hosts until each enters one of the named maintenance modes.
pub async fn hosts(
    client: &dyn SchedulerClient,
    source: &HostSourceArgs,
    statuses: &[String],
    interval: u64,
    timeout: u64,
    to_json: bool,
) -> Result<()> {
    let hosts = targets::resolve(source)?;
    let desired = statuses
        .iter()
        .map(|s| s.parse::<MaintenanceMode>())
        .collect::<Result<Vec<_>, _>>()?;

    info!(?hosts, ?desired, "monitoring host maintenance status");
    converge_hosts(client, &hosts, &desired, interval, timeout, to_json).await
}

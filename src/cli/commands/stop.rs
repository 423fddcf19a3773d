//! `drover stop` handlers.

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::commands::converge_hosts;
use crate::cli::targets;
use crate::cli::types::HostSourceArgs;
use crate::domain::models::MaintenanceMode;
use crate::domain::ports::SchedulerClient;

/// Take hosts out of maintenance and wait for them to return to NONE.
pub async fn drain(
    client: &dyn SchedulerClient,
    source: &HostSourceArgs,
    interval: u64,
    timeout: u64,
    to_json: bool,
) -> Result<()> {
    let hosts = targets::resolve(source)?;

    info!(?hosts, "setting hosts to NONE maintenance status");
    client
        .end_maintenance(&hosts)
        .await
        .context("Failed to end maintenance")?;

    converge_hosts(
        client,
        &hosts,
        &[MaintenanceMode::None],
        interval,
        timeout,
        to_json,
    )
    .await
}

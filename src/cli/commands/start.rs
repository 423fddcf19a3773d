//! `drover start` handlers: drain, SLA-aware drain, and maintenance.

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::commands::converge_hosts;
use crate::cli::targets;
use crate::cli::types::HostSourceArgs;
use crate::domain::models::{DrainPolicy, MaintenanceMode, SlaPolicy};
use crate::domain::ports::SchedulerClient;

/// Drain hosts and wait for them to reach DRAINED.
pub async fn drain(
    client: &dyn SchedulerClient,
    source: &HostSourceArgs,
    interval: u64,
    timeout: u64,
    to_json: bool,
) -> Result<()> {
    let hosts = targets::resolve(source)?;

    info!(?hosts, "setting hosts to DRAINING");
    client
        .drain_hosts(&hosts)
        .await
        .context("Failed to start draining")?;

    converge_hosts(
        client,
        &hosts,
        &[MaintenanceMode::Drained],
        interval,
        timeout,
        to_json,
    )
    .await
}

/// Drain hosts under an SLA fallback policy and wait for DRAINED.
#[allow(clippy::too_many_arguments)]
pub async fn sla_drain(
    client: &dyn SchedulerClient,
    source: &HostSourceArgs,
    count: Option<u64>,
    percentage: Option<f64>,
    duration: u64,
    sla_limit: u64,
    interval: u64,
    timeout: u64,
    to_json: bool,
) -> Result<()> {
    let hosts = targets::resolve(source)?;
    let sla = SlaPolicy::select(count, percentage, duration)?;
    let policy = DrainPolicy::new(sla, sla_limit);

    info!(?hosts, policy = ?policy.sla, "setting hosts to DRAINING with SLA fallback");
    client
        .sla_drain_hosts(&hosts, &policy)
        .await
        .context("Failed to start SLA-aware draining")?;

    converge_hosts(
        client,
        &hosts,
        &[MaintenanceMode::Drained],
        interval,
        timeout,
        to_json,
    )
    .await
}

/// Mark hosts for maintenance and wait for SCHEDULED.
pub async fn maintenance(
    client: &dyn SchedulerClient,
    source: &HostSourceArgs,
    interval: u64,
    timeout: u64,
    to_json: bool,
) -> Result<()> {
    let hosts = targets::resolve(source)?;

    info!(?hosts, "setting hosts to SCHEDULED maintenance");
    client
        .start_maintenance(&hosts)
        .await
        .context("Failed to start maintenance")?;

    converge_hosts(
        client,
        &hosts,
        &[MaintenanceMode::Scheduled],
        interval,
        timeout,
        to_json,
    )
    .await
}

//! Command handlers.
//!
//! Every mutation command follows the same shape: resolve targets, issue the
//! mutation once, then hand the target set to the convergence monitor and
//! report the partition. The two helpers here adapt the generic monitor to
//! the two target kinds (hosts and task instances).

pub mod kill;
pub mod monitor;
pub mod restart;
pub mod start;
pub mod stop;

use std::collections::HashMap;

use anyhow::Result;

use crate::cli::output;
use crate::domain::errors::ConvergenceIncomplete;
use crate::domain::models::{InstanceStatus, JobKey, MaintenanceMode, MonitorConfig};
use crate::domain::ports::SchedulerClient;
use crate::services::ConvergenceMonitor;

/// Monitor hosts until each reaches one of `desired` maintenance modes,
/// report the partition, and fail the command if any host is left over.
pub(crate) async fn converge_hosts(
    client: &dyn SchedulerClient,
    hosts: &[String],
    desired: &[MaintenanceMode],
    interval_secs: u64,
    timeout_secs: u64,
    to_json: bool,
) -> Result<()> {
    let config = MonitorConfig::from_secs(interval_secs, timeout_secs)?;
    let monitor = ConvergenceMonitor::new(config);

    let result = monitor
        .run(hosts, desired, |pending| async move {
            client.maintenance_status(&pending).await
        })
        .await?;

    // Report before failing: the partition is the actionable output.
    output::print_report(&result, to_json);
    if result.is_complete() {
        Ok(())
    } else {
        Err(ConvergenceIncomplete {
            non_converged: result.non_converged.len(),
            total: result.target_count(),
        }
        .into())
    }
}

/// Instance-level analogue of [`converge_hosts`]: monitor the given
/// instances of `job` until each reaches one of `desired` statuses.
pub(crate) async fn converge_instances(
    client: &dyn SchedulerClient,
    job: &JobKey,
    instances: &[u32],
    desired: &[InstanceStatus],
    interval_secs: u64,
    timeout_secs: u64,
    to_json: bool,
) -> Result<()> {
    let config = MonitorConfig::from_secs(interval_secs, timeout_secs)?;
    let monitor = ConvergenceMonitor::new(config);

    let targets: Vec<String> = instances.iter().map(|i| job.instance_target(*i)).collect();
    let by_target: HashMap<String, u32> = instances
        .iter()
        .map(|i| (job.instance_target(*i), *i))
        .collect();

    let result = monitor
        .run(&targets, desired, |pending| {
            let wanted: Vec<u32> = pending
                .iter()
                .filter_map(|t| by_target.get(t).copied())
                .collect();
            let job = job.clone();
            async move {
                let statuses = client.instance_status(&job, &wanted).await?;
                Ok(statuses
                    .into_iter()
                    .map(|(i, status)| (job.instance_target(i), status))
                    .collect())
            }
        })
        .await?;

    output::print_report(&result, to_json);
    if result.is_complete() {
        Ok(())
    } else {
        Err(ConvergenceIncomplete {
            non_converged: result.non_converged.len(),
            total: result.target_count(),
        }
        .into())
    }
}

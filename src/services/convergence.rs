//! Convergence monitor: poll the scheduler until every target reaches a
//! desired state or the deadline passes.
//!
//! One engine serves every mutation path. Host maintenance and task-instance
//! commands differ only in the state type and the query closure they hand in,
//! so the poll/classify/terminate loop is written once and parameterized over
//! `(targets, desired states, interval, timeout, query fn)`.

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;

use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::domain::errors::SchedulerError;
use crate::domain::models::{ConvergenceResult, MonitorConfig, Outcome};

/// Drives one poll loop to completion. Created fresh per command invocation.
pub struct ConvergenceMonitor {
    config: MonitorConfig,
}

impl ConvergenceMonitor {
    pub fn new(config: MonitorConfig) -> Self {
        if config.interval >= config.timeout {
            warn!(
                interval_secs = config.interval.as_secs(),
                timeout_secs = config.timeout.as_secs(),
                "poll interval is not smaller than the timeout; at most one round will run"
            );
        }
        Self { config }
    }

    /// Poll `query` until every target's state is in `desired` or the
    /// timeout elapses.
    ///
    /// Each round issues a single batched query covering all still-pending
    /// targets. A target reported in a desired state is never polled again.
    /// A target absent from a response stays pending and is retried next
    /// round; if it never reappears it ages out at the deadline as
    /// non-converged.
    ///
    /// An empty target set converges immediately, without a single query.
    /// A query error aborts the run; mutations are never re-issued from here.
    pub async fn run<S, Q, Fut>(
        &self,
        targets: &[String],
        desired: &[S],
        mut query: Q,
    ) -> Result<ConvergenceResult<S>, SchedulerError>
    where
        S: Clone + PartialEq + Debug,
        Q: FnMut(Vec<String>) -> Fut,
        Fut: Future<Output = Result<HashMap<String, S>, SchedulerError>>,
    {
        // State is per identifier, so duplicates collapse to one entry.
        let mut pending = dedup(targets);
        let mut converged: Vec<String> = Vec::new();
        let mut observed: HashMap<String, S> = HashMap::new();

        if pending.is_empty() {
            debug!("no targets to monitor; vacuously converged");
            return Ok(ConvergenceResult {
                desired: desired.to_vec(),
                converged,
                non_converged: pending,
                observed,
                outcome: Outcome::AllConverged,
            });
        }

        info!(
            targets = pending.len(),
            desired = ?desired,
            interval_secs = self.config.interval.as_secs(),
            timeout_secs = self.config.timeout.as_secs(),
            "monitoring state convergence"
        );

        let deadline = Instant::now() + self.config.timeout;
        let mut round: u32 = 0;

        let outcome = loop {
            round += 1;
            let states = query(pending.clone()).await?;

            let mut still_pending = Vec::with_capacity(pending.len());
            for target in pending {
                match states.get(&target) {
                    Some(state) if desired.contains(state) => {
                        observed.insert(target.clone(), state.clone());
                        converged.push(target);
                    }
                    Some(state) => {
                        observed.insert(target.clone(), state.clone());
                        still_pending.push(target);
                    }
                    // Not in this response; the scheduler may not have seen
                    // the target yet, or may have garbage-collected it.
                    None => still_pending.push(target),
                }
            }
            pending = still_pending;

            debug!(
                round,
                converged = converged.len(),
                pending = pending.len(),
                "poll round complete"
            );

            if pending.is_empty() {
                break Outcome::AllConverged;
            }
            if Instant::now() >= deadline {
                warn!(pending = pending.len(), "timed out waiting for convergence");
                break Outcome::TimedOut;
            }
            sleep(self.config.interval).await;
        };

        Ok(ConvergenceResult {
            desired: desired.to_vec(),
            converged,
            non_converged: pending,
            observed,
            outcome,
        })
    }
}

/// Drop duplicate targets, keeping first-seen order.
fn dedup(targets: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    targets
        .iter()
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::MaintenanceMode;

    #[tokio::test]
    async fn empty_target_set_never_queries() {
        use std::sync::atomic::{AtomicU32, Ordering};

        let monitor = ConvergenceMonitor::new(MonitorConfig::from_secs(1, 3).unwrap());
        let polls = AtomicU32::new(0);
        let result = monitor
            .run(&[], &[MaintenanceMode::Drained], |_hosts| {
                polls.fetch_add(1, Ordering::SeqCst);
                async { Ok(HashMap::new()) }
            })
            .await
            .unwrap();

        assert_eq!(polls.load(Ordering::SeqCst), 0);
        assert_eq!(result.outcome, Outcome::AllConverged);
        assert!(result.converged.is_empty());
        assert!(result.non_converged.is_empty());
    }

    #[tokio::test]
    async fn duplicate_targets_collapse() {
        let monitor = ConvergenceMonitor::new(MonitorConfig::from_secs(1, 3).unwrap());
        let targets = vec![
            "host-a".to_string(),
            "host-a".to_string(),
            "host-b".to_string(),
        ];
        let result = monitor
            .run(&targets, &[MaintenanceMode::Drained], |hosts| async move {
                Ok(hosts
                    .into_iter()
                    .map(|h| (h, MaintenanceMode::Drained))
                    .collect())
            })
            .await
            .unwrap();

        assert_eq!(result.converged, vec!["host-a", "host-b"]);
        assert_eq!(result.target_count(), 2);
    }
}

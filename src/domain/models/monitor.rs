//! Configuration and outcome types for the convergence monitor.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::errors::ConfigError;

/// Per-invocation polling configuration. Built fresh for every command;
/// nothing is shared across invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Time to sleep between poll rounds.
    pub interval: Duration,
    /// Total time budget before pending targets are declared non-converged.
    pub timeout: Duration,
}

impl MonitorConfig {
    /// Build from integral seconds, rejecting zero durations.
    pub fn from_secs(interval_secs: u64, timeout_secs: u64) -> Result<Self, ConfigError> {
        if interval_secs == 0 {
            return Err(ConfigError::ZeroDuration("interval"));
        }
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroDuration("timeout"));
        }
        Ok(Self {
            interval: Duration::from_secs(interval_secs),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// How a monitor run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every target reached a desired state before the deadline.
    AllConverged,
    /// The deadline passed with at least one target still pending.
    TimedOut,
}

/// Result of one monitor run over a set of targets.
///
/// Invariant: `converged` and `non_converged` are disjoint and together
/// contain every (deduplicated) input target.
#[derive(Debug, Clone)]
pub struct ConvergenceResult<S> {
    /// States that counted as converged for this run.
    pub desired: Vec<S>,
    /// Targets observed in a desired state, in input order.
    pub converged: Vec<String>,
    /// Targets still pending when the run ended, in input order.
    pub non_converged: Vec<String>,
    /// Last state observed per target; absent for targets the scheduler
    /// never reported.
    pub observed: HashMap<String, S>,
    pub outcome: Outcome,
}

impl<S> ConvergenceResult<S> {
    /// True when every target converged.
    pub fn is_complete(&self) -> bool {
        self.non_converged.is_empty()
    }

    /// Total number of distinct targets covered by this run.
    pub fn target_count(&self) -> usize {
        self.converged.len() + self.non_converged.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_is_rejected() {
        assert!(MonitorConfig::from_secs(0, 60).is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(MonitorConfig::from_secs(5, 0).is_err());
    }

    #[test]
    fn positive_durations_are_accepted() {
        let config = MonitorConfig::from_secs(5, 600).unwrap();
        assert_eq!(config.interval, Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(600));
    }
}

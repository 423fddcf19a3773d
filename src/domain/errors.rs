//! Domain errors for the drover client.

use thiserror::Error;

/// Failure to parse a state name supplied on the command line or returned by
/// the scheduler.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseStateError {
    #[error("unknown maintenance mode: {0} (expected one of NONE, SCHEDULED, DRAINING, DRAINED)")]
    UnknownMaintenanceMode(String),
}

/// Invalid SLA policy flag combination.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("exactly one of count or percentage must be set")]
    ExactlyOneRequired,
}

/// Invalid monitor configuration, caught before any network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be a positive duration")]
    ZeroDuration(&'static str),
}

/// Errors surfaced by the scheduler client port.
///
/// All variants are fatal to the issuing command: mutations are never retried
/// locally, and a failed state query aborts the monitor.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("scheduler unreachable: {0}")]
    Transport(String),

    #[error("scheduler rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("malformed scheduler response: {0}")]
    Decode(String),
}

/// Raised after a monitor run ends with pending targets. The partial result
/// has already been reported by the time this error propagates; it exists to
/// drive the non-zero exit code.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{non_converged} of {total} targets did not converge before the timeout")]
pub struct ConvergenceIncomplete {
    pub non_converged: usize,
    pub total: usize,
}

//! Host maintenance modes as reported by the scheduler.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::ParseStateError;

/// Maintenance mode of a worker host.
///
/// The scheduler owns the transitions between these modes; the client only
/// requests a change and observes the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceMode {
    /// Host is schedulable; no maintenance requested.
    None,
    /// Host is marked for maintenance and de-prioritized for new work.
    Scheduled,
    /// Tasks on the host are being killed and relocated.
    Draining,
    /// Host is empty and will not receive new work.
    Drained,
}

impl MaintenanceMode {
    /// All modes, in escalation order.
    pub const ALL: [MaintenanceMode; 4] = [
        MaintenanceMode::None,
        MaintenanceMode::Scheduled,
        MaintenanceMode::Draining,
        MaintenanceMode::Drained,
    ];

    /// Canonical upper-case name used on the wire and in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceMode::None => "NONE",
            MaintenanceMode::Scheduled => "SCHEDULED",
            MaintenanceMode::Draining => "DRAINING",
            MaintenanceMode::Drained => "DRAINED",
        }
    }
}

impl fmt::Display for MaintenanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaintenanceMode {
    type Err = ParseStateError;

    /// Case-insensitive parse; canonical form is upper-case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NONE" => Ok(MaintenanceMode::None),
            "SCHEDULED" => Ok(MaintenanceMode::Scheduled),
            "DRAINING" => Ok(MaintenanceMode::Draining),
            "DRAINED" => Ok(MaintenanceMode::Drained),
            _ => Err(ParseStateError::UnknownMaintenanceMode(s.to_string())),
        }
    }
}

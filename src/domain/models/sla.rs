//! SLA fallback policies for host draining.

use serde::{Deserialize, Serialize};

use crate::domain::errors::PolicyError;

/// Fallback SLA policy applied to jobs without one of their own while their
/// host drains. At most one variant per drain request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlaPolicy {
    /// At least `count` instances must stay RUNNING for `duration_secs`.
    Count { count: u64, duration_secs: u64 },
    /// At least `percentage` percent of instances must stay RUNNING for
    /// `duration_secs`.
    Percentage { percentage: f64, duration_secs: u64 },
}

impl SlaPolicy {
    /// Build a policy from the two mutually exclusive CLI flags.
    ///
    /// Exactly one of `count` / `percentage` must be supplied; both or
    /// neither is a configuration error caught before any network call.
    pub fn select(
        count: Option<u64>,
        percentage: Option<f64>,
        duration_secs: u64,
    ) -> Result<Self, PolicyError> {
        match (count, percentage) {
            (Some(count), None) => Ok(SlaPolicy::Count { count, duration_secs }),
            (None, Some(percentage)) => Ok(SlaPolicy::Percentage { percentage, duration_secs }),
            (Some(_), Some(_)) | (None, None) => Err(PolicyError::ExactlyOneRequired),
        }
    }
}

/// A drain request's full policy payload: the SLA fallback plus the deadline
/// after which the scheduler abandons SLA awareness and drains
/// unconditionally. The deadline is transmitted, never enforced client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrainPolicy {
    pub sla: SlaPolicy,
    pub escalation_timeout_secs: u64,
}

impl DrainPolicy {
    pub fn new(sla: SlaPolicy, escalation_timeout_secs: u64) -> Self {
        Self { sla, escalation_timeout_secs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_alone_builds_count_policy() {
        let policy = SlaPolicy::select(Some(5), None, 60).unwrap();
        assert_eq!(policy, SlaPolicy::Count { count: 5, duration_secs: 60 });
    }

    #[test]
    fn percentage_alone_builds_percentage_policy() {
        let policy = SlaPolicy::select(None, Some(80.0), 60).unwrap();
        assert_eq!(policy, SlaPolicy::Percentage { percentage: 80.0, duration_secs: 60 });
    }

    #[test]
    fn both_flags_are_rejected() {
        assert!(SlaPolicy::select(Some(5), Some(80.0), 60).is_err());
    }

    #[test]
    fn neither_flag_is_rejected() {
        assert!(SlaPolicy::select(None, None, 60).is_err());
    }

    #[test]
    fn policy_serializes_with_tag() {
        let policy = SlaPolicy::select(Some(2), None, 30).unwrap();
        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(json["type"], "count");
        assert_eq!(json["count"], 2);
        assert_eq!(json["duration_secs"], 30);
    }
}

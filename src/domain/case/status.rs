//! Case lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a case.
///
/// The state machine is linear: a case is created `Active` and ends
/// `Completed` when a solution is generated. `Completed` is terminal -
/// the transcript and solution become read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    /// Accepting user messages and soliciting AI follow-ups.
    Active,
    /// Terminal: solution generated, transcript read-only.
    Completed,
}

impl CaseStatus {
    /// Returns true if the case can still be mutated.
    pub fn is_mutable(&self) -> bool {
        matches!(self, CaseStatus::Active)
    }

    /// Checks whether a transition to the target status is allowed.
    pub fn can_transition_to(&self, target: &CaseStatus) -> bool {
        matches!((self, target), (CaseStatus::Active, CaseStatus::Completed))
    }

    /// Returns the canonical storage string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Active => "active",
            CaseStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(CaseStatus::Active),
            "completed" => Ok(CaseStatus::Completed),
            other => Err(format!("Invalid case status: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_is_mutable_completed_is_not() {
        assert!(CaseStatus::Active.is_mutable());
        assert!(!CaseStatus::Completed.is_mutable());
    }

    #[test]
    fn only_active_to_completed_is_allowed() {
        assert!(CaseStatus::Active.can_transition_to(&CaseStatus::Completed));
        assert!(!CaseStatus::Completed.can_transition_to(&CaseStatus::Active));
        assert!(!CaseStatus::Completed.can_transition_to(&CaseStatus::Completed));
        assert!(!CaseStatus::Active.can_transition_to(&CaseStatus::Active));
    }

    #[test]
    fn status_roundtrips_through_storage_string() {
        for status in [CaseStatus::Active, CaseStatus::Completed] {
            assert_eq!(status.as_str().parse::<CaseStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_rejects_unknown_string() {
        assert!("archived".parse::<CaseStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&CaseStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let json = serde_json::to_string(&CaseStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }
}

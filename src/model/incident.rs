//! Incident reports: structured records of anomalous events.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An immutable record of an incident encountered during a mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentReport {
    pub id: Uuid,
    pub occurred_at: Timestamp,
    pub location: String,
    pub category: IncidentCategory,
    pub description: String,
    pub action_taken: String,
    pub reported_by: String,
    pub reported_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentCategory {
    SecurityBreach,
    SuspiciousActivity,
    Emergency,
    Maintenance,
    Other,
}

impl IncidentCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SecurityBreach => "security-breach",
            Self::SuspiciousActivity => "suspicious-activity",
            Self::Emergency => "emergency",
            Self::Maintenance => "maintenance",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for IncidentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

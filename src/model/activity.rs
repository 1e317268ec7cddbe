//! Activity types: the append-only trail of a mission.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timestamped entry describing one event during a mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Uuid,
    pub at: Timestamp,
    pub description: String,
    pub kind: ActivityKind,
}

impl Activity {
    pub fn new(kind: ActivityKind, description: impl Into<String>, at: Timestamp) -> Self {
        Self {
            id: Uuid::now_v7(),
            at,
            description: description.into(),
            kind,
        }
    }
}

/// What kind of event an activity records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    MissionStart,
    MissionEnd,
    SiteArrival,
    SiteDeparture,
    Incident,
    Report,
    EarlyEnd,
}

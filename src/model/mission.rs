//! Mission types: the unit of work in fieldlog.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Activity, EarlyEnd, FinalReport, IncidentReport, SiteVisit};

/// One tracked field assignment with a planned start/end window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    /// Time-ordered identifier, derived at creation.
    pub id: Uuid,
    pub kind: MissionKind,
    pub name: String,

    /// Officer on duty when the mission started.
    #[serde(default)]
    pub officer: String,

    pub planned_start: Timestamp,
    pub planned_end: Timestamp,
    pub started_at: Timestamp,
    pub details: String,

    /// Stops planned up front. Only patrols carry these.
    #[serde(default)]
    pub planned_stops: Vec<String>,

    pub status: MissionStatus,

    /// Set when the officer justified ending ahead of schedule.
    #[serde(default)]
    pub early_end: Option<EarlyEnd>,

    /// The latest interim report, or the final one once completed.
    #[serde(default)]
    pub report: Option<FinalReport>,
}

impl Mission {
    /// When the mission was completed, if it has been.
    pub fn completed_at(&self) -> Option<Timestamp> {
        match self.status {
            MissionStatus::Active => None,
            MissionStatus::Completed { completed_at } => Some(completed_at),
        }
    }

    /// First eight characters of the id, for display.
    pub fn short_id(&self) -> String {
        self.id.to_string()[..8].to_string()
    }
}

/// The kind of mission, which decides whether stops are planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissionKind {
    /// A route of patrol stops.
    Patrol,

    /// A visit to a single client site.
    SiteVisit,

    /// Accompanying a person or consignment.
    Escort,
}

impl MissionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patrol => "patrol",
            Self::SiteVisit => "site-visit",
            Self::Escort => "escort",
        }
    }
}

impl fmt::Display for MissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a mission stands in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum MissionStatus {
    /// The mission is in progress.
    Active,

    /// The mission is over and archived.
    #[serde(rename_all = "camelCase")]
    Completed {
        /// The actual end time.
        completed_at: Timestamp,
    },
}

/// A completed mission with everything recorded while it ran.
///
/// Appended to the mission log on completion and never mutated after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionRecord {
    pub mission: Mission,
    #[serde(default)]
    pub patrol_stops: Vec<SiteVisit>,
    #[serde(default)]
    pub incident_reports: Vec<IncidentReport>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

//! Site visits: bounded on-location periods within a mission.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::IncidentReport;

/// A stop at a location. Open while `departed_at` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteVisit {
    pub location: String,
    pub details: String,
    pub arrived_at: Timestamp,
    #[serde(default)]
    pub departed_at: Option<Timestamp>,

    /// Events that happened while on this site.
    #[serde(default)]
    pub activities: Vec<SiteActivity>,
}

/// Something recorded against an open site visit.
///
/// Serialized as `{"type": ..., "data": ...}` so each entry is self-describing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum SiteActivity {
    /// An incident filed while on-site. A copy of the global incident entry.
    Incident(IncidentReport),
}

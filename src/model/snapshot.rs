//! The persisted form of the tracker's whole state.

use serde::{Deserialize, Serialize};

use super::{Activity, IncidentReport, Mission, MissionKind, MissionRecord, SiteVisit};

/// Everything the tracker owns, as written to the store after each mutation.
///
/// Every field defaults to its empty form, so partial or older snapshots load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    pub current_mission: Option<Mission>,
    pub current_activity: Vec<Activity>,
    pub patrol_stops: Vec<SiteVisit>,
    pub is_on_site: bool,
    pub current_site: Option<SiteVisit>,
    pub incident_reports: Vec<IncidentReport>,
    pub mission_logs: Vec<MissionRecord>,
    pub current_mission_type: Option<MissionKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_loads_as_empty_state() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn missing_fields_default_individually() {
        let json = r#"{"isOnSite": false, "currentMissionType": "patrol"}"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.current_mission_type, Some(MissionKind::Patrol));
        assert!(snapshot.current_mission.is_none());
        assert!(snapshot.mission_logs.is_empty());
    }

    #[test]
    fn uses_camel_case_keys() {
        let json = serde_json::to_value(Snapshot::default()).unwrap();
        for key in [
            "currentMission",
            "currentActivity",
            "patrolStops",
            "isOnSite",
            "currentSite",
            "incidentReports",
            "missionLogs",
            "currentMissionType",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}

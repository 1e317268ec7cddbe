//! Plain-text mission reports.
//!
//! Rendering is pure: the same mission and time zone always produce
//! the same text. Works for the live mission and for archived ones.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

use crate::model::{Activity, IncidentReport, Mission, MissionRecord, SiteVisit};

/// A mission together with everything recorded against it.
#[derive(Debug, Clone, Copy)]
pub struct MissionView<'a> {
    pub mission: &'a Mission,
    pub patrol_stops: &'a [SiteVisit],
    pub incidents: &'a [IncidentReport],
    pub activities: &'a [Activity],
}

impl<'a> From<&'a MissionRecord> for MissionView<'a> {
    fn from(record: &'a MissionRecord) -> Self {
        Self {
            mission: &record.mission,
            patrol_stops: &record.patrol_stops,
            incidents: &record.incident_reports,
            activities: &record.activities,
        }
    }
}

/// Renders a mission report, with times shown in `tz`.
pub fn render_report(view: &MissionView<'_>, tz: &TimeZone) -> String {
    Report { view, tz }.to_string()
}

/// Formats a timestamp the way reports show it.
pub fn format_time(ts: Timestamp, tz: &TimeZone) -> String {
    ts.to_zoned(tz.clone()).strftime("%Y-%m-%d %H:%M").to_string()
}

struct Report<'a, 'v> {
    view: &'a MissionView<'v>,
    tz: &'a TimeZone,
}

const RULE: &str = "--------------------";

impl fmt::Display for Report<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let MissionView {
            mission,
            patrol_stops,
            incidents,
            activities,
        } = *self.view;
        let time = |ts: Timestamp| format_time(ts, self.tz);

        writeln!(f, "FIELD OFFICER MISSION REPORT")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f)?;
        writeln!(f, "Mission Type: {}", mission.kind.as_str().to_uppercase())?;
        writeln!(f, "Mission Name: {}", mission.name)?;
        if !mission.officer.is_empty() {
            writeln!(f, "Officer: {}", mission.officer)?;
        }
        writeln!(f, "Start Time: {}", time(mission.started_at))?;
        writeln!(f, "Expected End: {}", time(mission.planned_end))?;
        if let Some(completed_at) = mission.completed_at() {
            writeln!(f, "Actual End: {}", time(completed_at))?;
        }
        if let Some(early) = &mission.early_end {
            let cover = match (&early.cover_name, early.has_cover) {
                (Some(name), true) => name.as_str(),
                (None, true) => "yes",
                (_, false) => "no",
            };
            writeln!(f, "Early End: {} (cover: {cover})", early.reason)?;
        }

        writeln!(f)?;
        writeln!(f, "MISSION DETAILS:")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "{}", mission.details)?;
        writeln!(f)?;

        if !patrol_stops.is_empty() {
            writeln!(f, "PATROL STOPS:")?;
            writeln!(f, "{RULE}")?;
            for (i, stop) in patrol_stops.iter().enumerate() {
                writeln!(f, "{}. {}", i + 1, stop.location)?;
                writeln!(f, "   Arrival: {}", time(stop.arrived_at))?;
                if let Some(departed_at) = stop.departed_at {
                    writeln!(f, "   Departure: {}", time(departed_at))?;
                }
                writeln!(f, "   Details: {}", stop.details)?;
                writeln!(f)?;
            }
        }

        if !incidents.is_empty() {
            writeln!(f, "INCIDENT REPORTS:")?;
            writeln!(f, "{RULE}")?;
            for (i, incident) in incidents.iter().enumerate() {
                writeln!(f, "{}. {}", i + 1, incident.category.as_str().to_uppercase())?;
                writeln!(f, "   Time: {}", time(incident.occurred_at))?;
                writeln!(f, "   Location: {}", incident.location)?;
                writeln!(f, "   Description: {}", incident.description)?;
                writeln!(f, "   Action Taken: {}", incident.action_taken)?;
                writeln!(f)?;
            }
        }

        writeln!(f, "ACTIVITY LOG:")?;
        writeln!(f, "{RULE}")?;
        for activity in activities {
            writeln!(f, "{} - {}", time(activity.at), activity.description)?;
        }

        if let Some(report) = &mission.report {
            writeln!(f)?;
            writeln!(f, "FINAL MISSION REPORT:")?;
            writeln!(f, "{RULE}")?;
            writeln!(f, "Summary: {}", report.summary)?;
            writeln!(f)?;
            writeln!(f, "Observations: {}", report.observations)?;
            writeln!(f)?;
            if let Some(issues) = &report.issues {
                writeln!(f, "Issues: {issues}")?;
                writeln!(f)?;
            }
            if let Some(recommendations) = &report.recommendations {
                writeln!(f, "Recommendations: {recommendations}")?;
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

//! The mission session tracker.
//!
//! Holds the single live mission and its trail, moves it through
//! idle → active → [on-site ⇄ off-site]* → completed → idle,
//! and writes a full snapshot to the store after every mutation.
//!
//! Operations take the current instant as an argument; the tracker
//! never reads the clock itself. Each mutating operation returns what it
//! recorded so a presentation layer can redraw from it.

use std::mem;

use jiff::{SignedDuration, Timestamp};
use uuid::Uuid;

use crate::model::{
    Activity, ActivityKind, EarlyEnd, FinalReport, IncidentCategory, IncidentReport, Mission,
    MissionKind, MissionRecord, MissionStatus, SiteActivity, SiteVisit, Snapshot,
};
use crate::report::MissionView;
use crate::storage::{self, KeyValueStore, StorageError};

/// Errors returned by tracker operations.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// The operation's precondition does not hold. Nothing changed.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// Ending now needs a justification first. Nothing changed.
    #[error(
        "mission is {minutes_remaining} minutes ahead of its planned end; \
         an early-end justification is required"
    )]
    EarlyEndRequired { minutes_remaining: i64 },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = core::result::Result<T, TrackerError>;

/// Policy knobs for the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSettings {
    /// Stamped on each new mission and as the reporter on incident reports.
    pub officer: String,

    /// Ending more than this many minutes early requires a justification.
    pub early_end_grace_minutes: i64,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            officer: "Current Officer".to_string(),
            early_end_grace_minutes: 15,
        }
    }
}

/// Input for starting a mission.
#[derive(Debug, Clone)]
pub struct MissionPlan {
    pub kind: MissionKind,
    pub name: String,
    pub planned_start: Timestamp,
    pub planned_end: Timestamp,
    pub details: String,

    /// Planned stops. Ignored unless `kind` is a patrol.
    pub stops: Vec<String>,
}

/// Input for going on-site.
#[derive(Debug, Clone)]
pub struct SiteArrival {
    pub location: String,
    pub details: String,
    pub arrived_at: Timestamp,
}

/// Input for filing an incident.
#[derive(Debug, Clone)]
pub struct IncidentInput {
    pub occurred_at: Timestamp,
    pub location: String,
    pub category: IncidentCategory,
    pub description: String,
    pub action_taken: String,
}

/// Input for an interim or final mission report.
#[derive(Debug, Clone)]
pub struct ReportInput {
    pub summary: String,
    pub observations: String,
    pub issues: Option<String>,
    pub recommendations: Option<String>,
}

impl ReportInput {
    fn submit(self, at: Timestamp) -> FinalReport {
        FinalReport {
            summary: self.summary,
            observations: self.observations,
            issues: self.issues.filter(|s| !s.is_empty()),
            recommendations: self.recommendations.filter(|s| !s.is_empty()),
            submitted_at: at,
        }
    }
}

/// What a submitted report did.
#[derive(Debug, Clone)]
pub enum ReportOutcome {
    /// Attached as an interim report; the mission is still active.
    Saved(Activity),

    /// Closed the mission, which is now archived.
    Completed(MissionRecord),
}

/// Tracks one field mission at a time, backed by a key-value store.
pub struct MissionTracker<S> {
    store: S,
    settings: TrackerSettings,
    current_mission: Option<Mission>,
    current_activity: Vec<Activity>,
    patrol_stops: Vec<SiteVisit>,
    current_site: Option<SiteVisit>,
    incident_reports: Vec<IncidentReport>,
    mission_logs: Vec<MissionRecord>,
    current_mission_type: Option<MissionKind>,
}

impl<S: KeyValueStore> MissionTracker<S> {
    /// Loads the tracker from whatever snapshot the store holds.
    pub fn load(store: S, settings: TrackerSettings) -> Result<Self> {
        let snapshot = storage::load_snapshot(&store)?;
        if snapshot.is_on_site != snapshot.current_site.is_some() {
            log::warn!(
                "snapshot on-site flag disagrees with current site; trusting the site record"
            );
        }
        Ok(Self {
            store,
            settings,
            current_mission: snapshot.current_mission,
            current_activity: snapshot.current_activity,
            patrol_stops: snapshot.patrol_stops,
            current_site: snapshot.current_site,
            incident_reports: snapshot.incident_reports,
            mission_logs: snapshot.mission_logs,
            current_mission_type: snapshot.current_mission_type,
        })
    }

    // ── Lifecycle ──

    /// Starts a new mission. Fails if one is already active.
    pub fn start_mission(&mut self, plan: MissionPlan, now: Timestamp) -> Result<Activity> {
        if self.current_mission.is_some() {
            return Err(TrackerError::InvalidState("a mission is already active"));
        }

        let planned_stops = match plan.kind {
            MissionKind::Patrol => plan
                .stops
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            MissionKind::SiteVisit | MissionKind::Escort => Vec::new(),
        };

        let mission = Mission {
            id: Uuid::now_v7(),
            kind: plan.kind,
            name: plan.name,
            officer: self.settings.officer.clone(),
            planned_start: plan.planned_start,
            planned_end: plan.planned_end,
            started_at: now,
            details: plan.details,
            planned_stops,
            status: MissionStatus::Active,
            early_end: None,
            report: None,
        };
        log::info!("starting {} mission {} ({})", mission.kind, mission.name, mission.id);

        let description = format!("Mission started: {}", mission.name);
        self.current_mission_type = Some(mission.kind);
        self.current_mission = Some(mission);
        let activity = self.record(ActivityKind::MissionStart, description, now);
        self.persist()?;
        Ok(activity)
    }

    /// Time left until the active mission's planned end, if one is active.
    pub fn time_remaining(&self, now: Timestamp) -> Option<SignedDuration> {
        self.current_mission
            .as_ref()
            .map(|m| m.planned_end.duration_since(now))
    }

    /// Whether ending the active mission at `now` needs a justification first.
    ///
    /// False when no mission is active or one has already been given.
    pub fn requires_early_end_justification(&self, now: Timestamp) -> bool {
        let Some(mission) = &self.current_mission else {
            return false;
        };
        let grace =
            SignedDuration::from_secs(self.settings.early_end_grace_minutes.saturating_mul(60));
        mission.early_end.is_none() && mission.planned_end.duration_since(now) > grace
    }

    /// Attaches an early-end justification to the active mission.
    ///
    /// The first half of ending a mission ahead of schedule. Fails when a
    /// justification is already attached or ending at `now` needs none.
    pub fn justify_early_end(&mut self, early_end: EarlyEnd, now: Timestamp) -> Result<Activity> {
        let Some(mission) = &self.current_mission else {
            return Err(TrackerError::InvalidState("no active mission"));
        };
        if mission.early_end.is_some() {
            return Err(TrackerError::InvalidState("early end already justified"));
        }
        if !self.requires_early_end_justification(now) {
            return Err(TrackerError::InvalidState("mission is not ending early"));
        }
        let Some(mission) = self.current_mission.as_mut() else {
            return Err(TrackerError::InvalidState("no active mission"));
        };

        let description = format!("Mission ended early: {}", early_end.reason);
        mission.early_end = Some(early_end);
        let activity = self.record(ActivityKind::EarlyEnd, description, now);
        self.persist()?;
        Ok(activity)
    }

    /// Completes the active mission with its final report and archives it.
    ///
    /// Fails with [`TrackerError::EarlyEndRequired`] when the planned end is
    /// further away than the grace period and no justification was given.
    pub fn end_mission(&mut self, report: ReportInput, now: Timestamp) -> Result<MissionRecord> {
        if self.current_mission.is_none() {
            return Err(TrackerError::InvalidState("no active mission"));
        }
        if self.requires_early_end_justification(now) {
            let minutes_remaining = self.time_remaining(now).map_or(0, |d| d.as_secs() / 60);
            return Err(TrackerError::EarlyEndRequired { minutes_remaining });
        }

        // A site left open at completion is closed at the end time.
        if let Some(mut site) = self.current_site.take() {
            site.departed_at = Some(now);
            let description = format!("Left site: {}", site.location);
            self.patrol_stops.push(site);
            self.record(ActivityKind::SiteDeparture, description, now);
        }
        self.record(ActivityKind::MissionEnd, "Mission completed", now);

        let Some(mut mission) = self.current_mission.take() else {
            return Err(TrackerError::InvalidState("no active mission"));
        };
        mission.status = MissionStatus::Completed { completed_at: now };
        mission.report = Some(report.submit(now));

        let record = MissionRecord {
            mission,
            patrol_stops: mem::take(&mut self.patrol_stops),
            incident_reports: mem::take(&mut self.incident_reports),
            activities: mem::take(&mut self.current_activity),
        };
        log::info!(
            "completed mission {} ({} stops, {} incidents)",
            record.mission.name,
            record.patrol_stops.len(),
            record.incident_reports.len()
        );
        self.mission_logs.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    // ── Site visits ──

    /// Opens a site visit. Fails without an active mission or when already on-site.
    pub fn go_on_site(&mut self, arrival: SiteArrival) -> Result<Activity> {
        if self.current_mission.is_none() {
            return Err(TrackerError::InvalidState("no active mission"));
        }
        if self.current_site.is_some() {
            return Err(TrackerError::InvalidState("already on-site"));
        }

        log::info!("arrived on-site at {}", arrival.location);
        let description = format!("Arrived on-site: {}", arrival.location);
        let at = arrival.arrived_at;
        self.current_site = Some(SiteVisit {
            location: arrival.location,
            details: arrival.details,
            arrived_at: arrival.arrived_at,
            departed_at: None,
            activities: Vec::new(),
        });
        let activity = self.record(ActivityKind::SiteArrival, description, at);
        self.persist()?;
        Ok(activity)
    }

    /// Closes the open site visit and appends it to the patrol stops.
    pub fn leave_site(&mut self, now: Timestamp) -> Result<Activity> {
        let mut site = self
            .current_site
            .take()
            .ok_or(TrackerError::InvalidState("not on-site"))?;

        log::info!("left site {}", site.location);
        site.departed_at = Some(now);
        let description = format!("Left site: {}", site.location);
        self.patrol_stops.push(site);
        let activity = self.record(ActivityKind::SiteDeparture, description, now);
        self.persist()?;
        Ok(activity)
    }

    // ── Incidents and reports ──

    /// Files an incident. Always permitted.
    ///
    /// When on-site, a copy is also nested into the open site visit.
    pub fn file_incident(&mut self, input: IncidentInput, now: Timestamp) -> Result<IncidentReport> {
        let incident = IncidentReport {
            id: Uuid::now_v7(),
            occurred_at: input.occurred_at,
            location: input.location,
            category: input.category,
            description: input.description,
            action_taken: input.action_taken,
            reported_by: self.settings.officer.clone(),
            reported_at: now,
        };
        log::info!("incident filed: {} at {}", incident.category, incident.location);

        self.incident_reports.push(incident.clone());
        if let Some(site) = &mut self.current_site {
            site.activities.push(SiteActivity::Incident(incident.clone()));
        }
        let description = format!(
            "Incident reported: {} at {}",
            incident.category, incident.location
        );
        self.record(ActivityKind::Incident, description, now);
        self.persist()?;
        Ok(incident)
    }

    /// Attaches an interim report to the active mission, replacing any earlier one.
    pub fn save_interim_report(&mut self, report: ReportInput, now: Timestamp) -> Result<Activity> {
        let mission = self
            .current_mission
            .as_mut()
            .ok_or(TrackerError::InvalidState("no active mission"))?;

        mission.report = Some(report.submit(now));
        let activity = self.record(ActivityKind::Report, "Mission report updated", now);
        self.persist()?;
        Ok(activity)
    }

    /// Submits a report: the final one when `ending`, otherwise an interim save.
    pub fn submit_report(
        &mut self,
        report: ReportInput,
        ending: bool,
        now: Timestamp,
    ) -> Result<ReportOutcome> {
        if ending {
            self.end_mission(report, now).map(ReportOutcome::Completed)
        } else {
            self.save_interim_report(report, now).map(ReportOutcome::Saved)
        }
    }

    // ── Views ──

    pub fn current_mission(&self) -> Option<&Mission> {
        self.current_mission.as_ref()
    }

    pub fn current_site(&self) -> Option<&SiteVisit> {
        self.current_site.as_ref()
    }

    pub fn is_on_site(&self) -> bool {
        self.current_site.is_some()
    }

    pub fn activities(&self) -> &[Activity] {
        &self.current_activity
    }

    pub fn patrol_stops(&self) -> &[SiteVisit] {
        &self.patrol_stops
    }

    pub fn incident_reports(&self) -> &[IncidentReport] {
        &self.incident_reports
    }

    pub fn mission_logs(&self) -> &[MissionRecord] {
        &self.mission_logs
    }

    pub fn current_mission_type(&self) -> Option<MissionKind> {
        self.current_mission_type
    }

    /// One-line status, as shown on the dashboard indicator.
    pub fn status_label(&self) -> &'static str {
        match (&self.current_mission, self.is_on_site()) {
            (None, _) => "No Active Mission",
            (Some(_), false) => "Mission Active",
            (Some(_), true) => "On-Site",
        }
    }

    /// The live mission with its trail, ready for rendering.
    ///
    /// Patrol stops are only shown while the mission is a patrol.
    pub fn live_view(&self) -> Option<MissionView<'_>> {
        self.current_mission.as_ref().map(|mission| MissionView {
            mission,
            patrol_stops: match mission.kind {
                MissionKind::Patrol => &self.patrol_stops,
                MissionKind::SiteVisit | MissionKind::Escort => &[],
            },
            incidents: &self.incident_reports,
            activities: &self.current_activity,
        })
    }

    /// The tracker's whole state, as it is persisted.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_mission: self.current_mission.clone(),
            current_activity: self.current_activity.clone(),
            patrol_stops: self.patrol_stops.clone(),
            is_on_site: self.is_on_site(),
            current_site: self.current_site.clone(),
            incident_reports: self.incident_reports.clone(),
            mission_logs: self.mission_logs.clone(),
            current_mission_type: self.current_mission_type,
        }
    }

    /// Gives back the store, consuming the tracker.
    pub fn into_store(self) -> S {
        self.store
    }

    fn record(
        &mut self,
        kind: ActivityKind,
        description: impl Into<String>,
        at: Timestamp,
    ) -> Activity {
        let activity = Activity::new(kind, description, at);
        self.current_activity.push(activity.clone());
        activity
    }

    fn persist(&mut self) -> Result<()> {
        let snapshot = self.snapshot();
        storage::save_snapshot(&mut self.store, &snapshot)?;
        Ok(())
    }
}

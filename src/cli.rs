//! CLI interface for fieldlog.
//!
//! Stands in for the form-driven UI: each subcommand supplies typed
//! input to one tracker operation, or prints a read-only view.
//! Every subcommand is non-interactive: arguments in, text out.

mod format;
mod mission;
mod report;
mod site;

use clap::{Parser, Subcommand, ValueEnum};
use jiff::{Timestamp, tz::TimeZone};

use crate::model::IncidentCategory;
use crate::storage::KeyValueStore;
use crate::tracker::{IncidentInput, MissionTracker};

use format::{format_activity, format_minutes, format_mission_line, parse_time};
use mission::MissionCommand;
use report::ReportCommand;
use site::SiteCommand;

/// fieldlog: log a field officer's missions.
#[derive(Debug, Parser)]
#[command(name = "fieldlog", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: a patrol
  1. fieldlog mission start --kind patrol --name Sweep-12 \
       --planned-start 2025-06-01T22:00 --planned-end 2025-06-02T06:00 \
       --details "North perimeter" --stop "Gate A" --stop "Loading dock"
  2. fieldlog site arrive --location "Gate A" --details "Locks and lights"
  3. fieldlog incident --category suspicious-activity \
       --description "Van idling" --action-taken "Logged plate"
  4. fieldlog site leave
  5. fieldlog mission end --summary "Quiet" --observations "All secure"

Review:
  fieldlog status
  fieldlog report show --out tonight.txt
  fieldlog logs"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show whether a mission is active and where the officer is.
    Status,

    /// Start or end a mission.
    Mission {
        #[command(subcommand)]
        command: MissionCommand,
    },

    /// Go on-site or leave the current site.
    Site {
        #[command(subcommand)]
        command: SiteCommand,
    },

    /// File an incident report.
    ///
    /// When on-site, the incident is also recorded against the open site visit.
    Incident {
        #[arg(long, value_enum)]
        category: CategoryArg,

        /// What happened.
        #[arg(long)]
        description: String,

        /// What was done about it.
        #[arg(long)]
        action_taken: String,

        /// Where it happened. Defaults to the current site.
        #[arg(long)]
        location: Option<String>,

        /// When it happened. Defaults to now.
        #[arg(long, value_parser = parse_time)]
        at: Option<Timestamp>,
    },

    /// Save or show mission reports.
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },

    /// Print the active mission's activity log.
    Activity,

    /// List completed missions.
    Logs,
}

/// CLI-facing incident category, mapped to the domain `IncidentCategory`.
#[derive(Debug, Clone, ValueEnum)]
pub enum CategoryArg {
    SecurityBreach,
    SuspiciousActivity,
    Emergency,
    Maintenance,
    Other,
}

impl CategoryArg {
    fn to_domain(&self) -> IncidentCategory {
        match self {
            Self::SecurityBreach => IncidentCategory::SecurityBreach,
            Self::SuspiciousActivity => IncidentCategory::SuspiciousActivity,
            Self::Emergency => IncidentCategory::Emergency,
            Self::Maintenance => IncidentCategory::Maintenance,
            Self::Other => IncidentCategory::Other,
        }
    }
}

/// Run a parsed command against the tracker, returning an error message on failure.
pub fn run<S: KeyValueStore>(cli: Cli, tracker: &mut MissionTracker<S>) -> Result<(), String> {
    let now = Timestamp::now();

    match cli.command {
        Command::Status => {
            cmd_status(tracker, now);
            Ok(())
        }
        Command::Mission { command } => mission::run(tracker, command, now),
        Command::Site { command } => site::run(tracker, command, now),
        Command::Incident {
            category,
            description,
            action_taken,
            location,
            at,
        } => {
            let location = location
                .or_else(|| tracker.current_site().map(|s| s.location.clone()))
                .ok_or("not on-site: pass --location")?;
            let input = IncidentInput {
                occurred_at: at.unwrap_or(now),
                location,
                category: category.to_domain(),
                description,
                action_taken,
            };
            cmd_incident(tracker, input, now)
        }
        Command::Report { command } => report::run(tracker, command, now),
        Command::Activity => {
            cmd_activity(tracker);
            Ok(())
        }
        Command::Logs => {
            cmd_logs(tracker);
            Ok(())
        }
    }
}

fn cmd_status<S: KeyValueStore>(tracker: &MissionTracker<S>, now: Timestamp) {
    println!("{}", tracker.status_label());

    if let Some(mission) = tracker.current_mission() {
        println!("{}  [{}]  {}", mission.short_id(), mission.kind, mission.name);
        if let Some(remaining) = tracker.time_remaining(now) {
            println!("Remaining: {}", format_minutes(remaining.as_secs() / 60));
        }
    }
    if let Some(site) = tracker.current_site() {
        println!("Site: {}", site.location);
    }
    println!(
        "Stops: {}  Incidents: {}",
        tracker.patrol_stops().len(),
        tracker.incident_reports().len()
    );
}

fn cmd_incident<S: KeyValueStore>(
    tracker: &mut MissionTracker<S>,
    input: IncidentInput,
    now: Timestamp,
) -> Result<(), String> {
    let incident = tracker
        .file_incident(input, now)
        .map_err(|e| format!("failed to file incident: {e}"))?;
    eprintln!(
        "Incident reported: {} at {}",
        incident.category, incident.location
    );
    Ok(())
}

fn cmd_activity<S: KeyValueStore>(tracker: &MissionTracker<S>) {
    let activities = tracker.activities();
    if activities.is_empty() {
        println!("No activities logged yet.");
        return;
    }

    let tz = TimeZone::system();
    for activity in activities {
        println!("{}", format_activity(activity, &tz));
    }
}

fn cmd_logs<S: KeyValueStore>(tracker: &MissionTracker<S>) {
    let logs = tracker.mission_logs();
    if logs.is_empty() {
        println!("No mission logs found.");
        return;
    }

    let tz = TimeZone::system();
    for record in logs {
        println!("{}", format_mission_line(record, &tz));
    }
}

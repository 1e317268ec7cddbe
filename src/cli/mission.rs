//! Mission lifecycle commands: start, end.

use clap::{Args, Subcommand, ValueEnum};
use jiff::Timestamp;

use crate::model::{EarlyEnd, MissionKind};
use crate::storage::KeyValueStore;
use crate::tracker::{MissionPlan, MissionTracker, ReportInput, ReportOutcome, TrackerError};

use super::format::{format_minutes, parse_time};

#[derive(Debug, Subcommand)]
pub enum MissionCommand {
    /// Start a new mission. Prints the mission ID.
    Start {
        /// What kind of mission this is.
        #[arg(long, value_enum)]
        kind: KindArg,

        /// Mission name or reference (e.g. "Sweep-12").
        #[arg(long)]
        name: String,

        /// Planned start: RFC 3339, or local `YYYY-MM-DDTHH:MM`.
        #[arg(long, value_parser = parse_time)]
        planned_start: Timestamp,

        /// Expected end: RFC 3339, or local `YYYY-MM-DDTHH:MM`.
        #[arg(long, value_parser = parse_time)]
        planned_end: Timestamp,

        /// Free-text mission details.
        #[arg(long)]
        details: String,

        /// A planned patrol stop. Repeat for each stop; ignored for other kinds.
        #[arg(long = "stop")]
        stops: Vec<String>,
    },

    /// End the active mission with its final report.
    ///
    /// Ending more than the grace period (15 minutes by default) before the
    /// planned end requires `--early-reason`.
    End {
        #[command(flatten)]
        report: ReportArgs,

        /// Why the mission is ending early.
        #[arg(long)]
        early_reason: Option<String>,

        /// A replacement has been arranged.
        #[arg(long, requires = "early_reason")]
        has_cover: bool,

        /// Who is covering.
        #[arg(long, requires = "has_cover")]
        cover_name: Option<String>,
    },
}

/// The fields of a mission report, shared by `mission end` and `report save`.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Mission summary.
    #[arg(long)]
    pub summary: String,

    /// Key observations.
    #[arg(long)]
    pub observations: String,

    /// Issues encountered.
    #[arg(long)]
    pub issues: Option<String>,

    /// Recommendations.
    #[arg(long)]
    pub recommendations: Option<String>,
}

impl ReportArgs {
    pub(super) fn into_input(self) -> ReportInput {
        ReportInput {
            summary: self.summary,
            observations: self.observations,
            issues: self.issues,
            recommendations: self.recommendations,
        }
    }
}

/// CLI-facing mission kind, mapped to the domain `MissionKind`.
#[derive(Debug, Clone, ValueEnum)]
pub enum KindArg {
    /// A route of patrol stops.
    Patrol,
    /// A visit to a single client site.
    SiteVisit,
    /// Accompanying a person or consignment.
    Escort,
}

impl KindArg {
    fn to_domain(&self) -> MissionKind {
        match self {
            Self::Patrol => MissionKind::Patrol,
            Self::SiteVisit => MissionKind::SiteVisit,
            Self::Escort => MissionKind::Escort,
        }
    }
}

pub(super) fn run<S: KeyValueStore>(
    tracker: &mut MissionTracker<S>,
    command: MissionCommand,
    now: Timestamp,
) -> Result<(), String> {
    match command {
        MissionCommand::Start {
            kind,
            name,
            planned_start,
            planned_end,
            details,
            stops,
        } => {
            let plan = MissionPlan {
                kind: kind.to_domain(),
                name,
                planned_start,
                planned_end,
                details,
                stops,
            };
            cmd_start(tracker, plan, now)
        }
        MissionCommand::End {
            report,
            early_reason,
            has_cover,
            cover_name,
        } => {
            let early_end = early_reason.map(|reason| EarlyEnd {
                reason,
                has_cover,
                cover_name,
            });
            cmd_end(tracker, report.into_input(), early_end, now)
        }
    }
}

fn cmd_start<S: KeyValueStore>(
    tracker: &mut MissionTracker<S>,
    plan: MissionPlan,
    now: Timestamp,
) -> Result<(), String> {
    if plan.planned_end <= plan.planned_start {
        eprintln!("Warning: planned end is not after planned start");
    }

    tracker
        .start_mission(plan, now)
        .map_err(|e| format!("failed to start mission: {e}"))?;

    if let Some(mission) = tracker.current_mission() {
        println!("{}", mission.id);
    }
    Ok(())
}

fn cmd_end<S: KeyValueStore>(
    tracker: &mut MissionTracker<S>,
    report: ReportInput,
    early_end: Option<EarlyEnd>,
    now: Timestamp,
) -> Result<(), String> {
    if let Some(early_end) = early_end {
        if tracker.requires_early_end_justification(now) {
            tracker
                .justify_early_end(early_end, now)
                .map_err(|e| format!("failed to record early end: {e}"))?;
        } else {
            eprintln!("Not ending early; ignoring --early-reason");
        }
    }

    match tracker.submit_report(report, true, now) {
        Ok(ReportOutcome::Completed(record)) => {
            eprintln!("Mission {} completed", record.mission.short_id());
            Ok(())
        }
        Ok(ReportOutcome::Saved(_)) => Err("mission is still active".to_string()),
        Err(TrackerError::EarlyEndRequired { minutes_remaining }) => Err(format!(
            "mission is planned to run another {}; \
             pass --early-reason <reason> (and --has-cover / --cover-name if cover is arranged)",
            format_minutes(minutes_remaining)
        )),
        Err(e) => Err(format!("failed to end mission: {e}")),
    }
}

//! Report commands: save an interim report, show a rendered one.

use std::fs;
use std::path::PathBuf;

use clap::Subcommand;
use jiff::{Timestamp, tz::TimeZone};

use crate::model::MissionRecord;
use crate::report::{MissionView, render_report};
use crate::storage::KeyValueStore;
use crate::tracker::MissionTracker;

use super::mission::ReportArgs;

#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Save an interim report on the active mission, replacing any earlier one.
    Save {
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Render a mission report as plain text.
    ///
    /// Shows the active mission unless `--mission` names an archived one.
    Show {
        /// Archived mission ID: full UUID or unambiguous prefix (e.g. `0199a`).
        #[arg(long)]
        mission: Option<String>,

        /// Write the report to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

pub(super) fn run<S: KeyValueStore>(
    tracker: &mut MissionTracker<S>,
    command: ReportCommand,
    now: Timestamp,
) -> Result<(), String> {
    match command {
        ReportCommand::Save { report } => {
            tracker
                .save_interim_report(report.into_input(), now)
                .map_err(|e| format!("failed to save report: {e}"))?;
            eprintln!("Mission report updated");
            Ok(())
        }
        ReportCommand::Show { mission, out } => {
            let tz = TimeZone::system();
            let text = match mission {
                Some(reference) => {
                    let record = resolve_mission(tracker.mission_logs(), &reference)?;
                    render_report(&MissionView::from(record), &tz)
                }
                None => {
                    let view = tracker.live_view().ok_or("no active mission to report")?;
                    render_report(&view, &tz)
                }
            };
            match out {
                Some(path) => {
                    fs::write(&path, &text)
                        .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
                    eprintln!("Report written → {}", path.display());
                }
                None => print!("{text}"),
            }
            Ok(())
        }
    }
}

/// Resolve a mission reference (full UUID or unambiguous prefix) to an archived mission.
pub(super) fn resolve_mission<'a>(
    logs: &'a [MissionRecord],
    reference: &str,
) -> Result<&'a MissionRecord, String> {
    let matches: Vec<&MissionRecord> = logs
        .iter()
        .filter(|r| r.mission.id.to_string().starts_with(reference))
        .collect();

    match matches.len() {
        0 => Err(format!("no logged mission matching '{reference}'")),
        1 => Ok(matches[0]),
        n => {
            let ids: Vec<String> = matches.iter().map(|r| r.mission.short_id()).collect();
            Err(format!(
                "'{reference}' is ambiguous: matches {n} missions: {}",
                ids.join(", ")
            ))
        }
    }
}

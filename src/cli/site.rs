//! Site visit commands: arrive, leave.

use clap::Subcommand;
use jiff::Timestamp;

use crate::storage::KeyValueStore;
use crate::tracker::{MissionTracker, SiteArrival};

use super::format::parse_time;

#[derive(Debug, Subcommand)]
pub enum SiteCommand {
    /// Go on-site at a location.
    Arrive {
        /// Where.
        #[arg(long)]
        location: String,

        /// Site details.
        #[arg(long)]
        details: String,

        /// Arrival time. Defaults to now.
        #[arg(long, value_parser = parse_time)]
        at: Option<Timestamp>,
    },

    /// Leave the current site.
    Leave,
}

pub(super) fn run<S: KeyValueStore>(
    tracker: &mut MissionTracker<S>,
    command: SiteCommand,
    now: Timestamp,
) -> Result<(), String> {
    match command {
        SiteCommand::Arrive {
            location,
            details,
            at,
        } => {
            let arrival = SiteArrival {
                location,
                details,
                arrived_at: at.unwrap_or(now),
            };
            tracker
                .go_on_site(arrival)
                .map_err(|e| format!("failed to go on-site: {e}"))?;
            if let Some(site) = tracker.current_site() {
                eprintln!("On-site: {}", site.location);
            }
            Ok(())
        }
        SiteCommand::Leave => {
            tracker
                .leave_site(now)
                .map_err(|e| format!("failed to leave site: {e}"))?;
            if let Some(stop) = tracker.patrol_stops().last() {
                eprintln!("Left site: {}", stop.location);
            }
            Ok(())
        }
    }
}

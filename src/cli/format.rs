//! Input parsing and output formatting for CLI display.

use jiff::{Timestamp, civil::DateTime, tz::TimeZone};

use crate::model::{Activity, MissionRecord};
use crate::report::format_time;

/// Parse a time argument in the system time zone.
///
/// Used as a clap value parser.
pub(super) fn parse_time(s: &str) -> Result<Timestamp, String> {
    parse_time_in(s, &TimeZone::system())
}

/// Parse an RFC 3339 instant, or a civil `YYYY-MM-DDTHH:MM[:SS]`
/// datetime interpreted in `tz`.
pub(super) fn parse_time_in(s: &str, tz: &TimeZone) -> Result<Timestamp, String> {
    if let Ok(ts) = s.parse::<Timestamp>() {
        return Ok(ts);
    }
    let civil = s
        .parse::<DateTime>()
        .map_err(|e| format!("invalid time '{s}': {e}"))?;
    civil
        .to_zoned(tz.clone())
        .map(|z| z.timestamp())
        .map_err(|e| format!("invalid time '{s}': {e}"))
}

/// One line of the activity log.
pub(super) fn format_activity(activity: &Activity, tz: &TimeZone) -> String {
    format!("{} - {}", format_time(activity.at, tz), activity.description)
}

/// One line of the mission log listing.
pub(super) fn format_mission_line(record: &MissionRecord, tz: &TimeZone) -> String {
    let mission = &record.mission;
    let ended = mission
        .completed_at()
        .map_or_else(|| "ongoing".to_string(), |t| format_time(t, tz));
    format!(
        "{}  [{}]  {}  {} → {}",
        mission.short_id(),
        mission.kind,
        mission.name,
        format_time(mission.started_at, tz),
        ended
    )
}

/// Whole minutes in a human-friendly form, e.g. `1h 5m`.
pub(super) fn format_minutes(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.abs();
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{sign}{m}m"),
        (h, 0) => format!("{sign}{h}h"),
        (h, m) => format!("{sign}{h}h {m}m"),
    }
}

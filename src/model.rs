//! Core data model for fieldlog.
//!
//! These types represent a field officer's working day:
//! missions, site visits, incidents, reports, and the activity trail.

mod activity;
mod incident;
mod mission;
mod report;
mod site;
mod snapshot;

pub use activity::{Activity, ActivityKind};
pub use incident::{IncidentCategory, IncidentReport};
pub use mission::{Mission, MissionKind, MissionRecord, MissionStatus};
pub use report::{EarlyEnd, FinalReport};
pub use site::{SiteActivity, SiteVisit};
pub use snapshot::Snapshot;

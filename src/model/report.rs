//! Mission reports and early-end justifications.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// The officer's written account of a mission.
///
/// Saved as an interim report while the mission runs,
/// or submitted as the closing artifact that completes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalReport {
    pub summary: String,
    pub observations: String,
    #[serde(default)]
    pub issues: Option<String>,
    #[serde(default)]
    pub recommendations: Option<String>,
    pub submitted_at: Timestamp,
}

/// Why a mission is ending ahead of its planned end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarlyEnd {
    pub reason: String,

    /// Whether a replacement has been arranged.
    pub has_cover: bool,

    #[serde(default)]
    pub cover_name: Option<String>,
}

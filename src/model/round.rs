use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::member::Tier;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pub id: String,
    pub checked_in_at: String,
    pub holes_played: u32,
    /// Present only when the collaborator exposes it on history records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    pub course_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub tier_required: Tier,
}

impl Round {
    #[must_use]
    pub fn checked_in(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.checked_in_at)
    }

    #[must_use]
    pub fn checked_in_date(&self) -> Option<NaiveDate> {
        self.checked_in().map(|ts| ts.date())
    }
}

/// Accepts RFC 3339 (normalised to UTC), naive ISO datetimes and bare dates.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

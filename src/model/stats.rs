//! Operator statistics rows and the numeric parsing boundary.
//!
//! The stats collaborator sends every count as a numeric string. All of them
//! pass through [`parse_count`] exactly once, on deserialization, so the
//! aggregation code only ever sees integers. Anything non-numeric is zero.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[must_use]
pub fn parse_count(raw: &str) -> u64 {
    let trimmed = raw.trim();
    trimmed
        .parse::<u64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().and_then(float_to_count))
        .unwrap_or(0)
}

fn float_to_count(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 {
        Some(value.trunc() as u64)
    } else {
        None
    }
}

fn count_from_value(value: Option<Value>) -> u64 {
    match value {
        Some(Value::String(s)) => parse_count(&s),
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().and_then(float_to_count))
            .unwrap_or(0),
        _ => 0,
    }
}

/// # Errors
///
/// Only fails when the input is not valid JSON at all.
pub fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(count_from_value(value))
}

/// # Errors
///
/// Only fails when the input is not valid JSON at all.
pub fn lenient_count_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(u32::try_from(count_from_value(value)).unwrap_or(u32::MAX))
}

/// Average ratings may arrive as a number, a numeric string or null.
///
/// # Errors
///
/// Only fails when the input is not valid JSON at all.
pub fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite()))
}

/// # Errors
///
/// Only fails when the input is not valid JSON at all.
pub fn lenient_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_rating(deserializer)?.unwrap_or(0.0))
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct OverviewStats {
    #[serde(default, deserialize_with = "lenient_count")]
    pub active_members: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_courses: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_rounds: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub rounds_this_month: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PopularCourse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub tier_required: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_rounds: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub unique_members: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MonthlyRounds {
    pub month: String,
    #[serde(default)]
    pub month_date: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub rounds: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TierBreakdown {
    pub tier: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub rounds: u64,
}

impl TierBreakdown {
    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.tier.eq_ignore_ascii_case("premium")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TopMember {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub health_plan: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_rounds: u64,
}

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Core,
    Premium,
}

impl Tier {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Core => "core",
            Tier::Premium => "premium",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Member {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub parpass_code: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub health_plan_name: String,
    pub tier: Tier,
    pub monthly_rounds: u32,
}

impl Member {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Usage {
    #[serde(deserialize_with = "crate::model::stats::lenient_count_u32")]
    pub rounds_used: u32,
}

impl Usage {
    /// Rounds left in the current period, never negative.
    #[must_use]
    pub fn rounds_remaining(&self, member: &Member) -> u32 {
        member.monthly_rounds.saturating_sub(self.rounds_used)
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::member::Tier;
use super::stats::{lenient_count, lenient_rating, lenient_score};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub zip: String,
    pub holes: u32,
    pub tier_required: Tier,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub average_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub review_count: u64,
}

impl Course {
    /// "City, ST 12345" as shown under the course name.
    #[must_use]
    pub fn location_line(&self) -> String {
        if self.zip.is_empty() {
            format!("{}, {}", self.city, self.state)
        } else {
            format!("{}, {} {}", self.city, self.state, self.zip)
        }
    }

    #[must_use]
    pub fn directions_url(&self) -> String {
        let destination = format!(
            "{}, {}, {} {}",
            self.name, self.city, self.state, self.zip
        );
        reqwest::Url::parse_with_params(
            "https://www.google.com/maps/dir/",
            &[("api", "1"), ("destination", destination.trim_end())],
        )
        .map(String::from)
        .unwrap_or_default()
    }

    #[must_use]
    pub fn with_rating(mut self, rating: &CourseRating) -> Self {
        self.average_rating = rating.average_rating;
        self.review_count = rating.review_count;
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct CourseRating {
    #[serde(default, deserialize_with = "lenient_rating")]
    pub average_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub review_count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecommendedCourse {
    #[serde(flatten)]
    pub course: Course,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_plays: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub unique_players: u64,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: f64,
    #[serde(default)]
    pub reason: String,
}

/// Course list filter. `All` sends no tier parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TierFilter {
    #[default]
    All,
    Only(Tier),
}

impl TierFilter {
    pub const CHOICES: [TierFilter; 3] = [
        TierFilter::All,
        TierFilter::Only(Tier::Core),
        TierFilter::Only(Tier::Premium),
    ];

    #[must_use]
    pub fn tier(self) -> Option<Tier> {
        match self {
            TierFilter::All => None,
            TierFilter::Only(tier) => Some(tier),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TierFilter::All => "all",
            TierFilter::Only(tier) => tier.as_str(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TierFilter::All => "All",
            TierFilter::Only(Tier::Core) => "Core",
            TierFilter::Only(Tier::Premium) => "Premium",
        }
    }
}

impl fmt::Display for TierFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TierFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(TierFilter::All),
            "core" => Ok(TierFilter::Only(Tier::Core)),
            "premium" => Ok(TierFilter::Only(Tier::Premium)),
            other => Err(format!("unknown tier filter '{other}'")),
        }
    }
}

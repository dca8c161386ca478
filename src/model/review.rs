use serde::{Deserialize, Serialize};

use crate::error::ParPassError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Review {
    pub id: String,
    /// Present only when the collaborator exposes review authorship by id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    pub member_first_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: String,
}

/// A star rating in `1..=5`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// # Errors
    ///
    /// Returns `ParPassError::InvalidRating` for a missing rating or anything
    /// outside `1..=5`.
    pub fn new(value: Option<u8>) -> Result<Self, ParPassError> {
        match value {
            Some(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(ParPassError::InvalidRating),
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ParPassError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(Some(value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Request body for creating or updating the member's review of a course.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub member_id: String,
    pub rating: Rating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl NewReview {
    /// Blank comments are sent as absent.
    #[must_use]
    pub fn new(member_id: &str, rating: Rating, comment: Option<&str>) -> Self {
        let comment = comment
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        Self {
            member_id: member_id.to_string(),
            rating,
            comment,
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParPassError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("{0}")]
    Rejected(String),
    #[error("rating must be between 1 and 5")]
    InvalidRating,
    #[error("no member is signed in")]
    SignedOut,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ParPassError {
    /// Not-found and transport failures are shown to the member the same way.
    #[must_use]
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Network(_) | Self::Decode(_))
    }
}

impl From<reqwest::Error> for ParPassError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.status() == Some(reqwest::StatusCode::NOT_FOUND) {
            Self::NotFound(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ParPassError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::ParPassApi;
use crate::error::ParPassError;
use crate::model::{
    Course, CourseRating, Member, MonthlyRounds, NewReview, OverviewStats, PopularCourse,
    RecommendedCourse, Review, Round, Tier, TierBreakdown, TopMember, Usage,
};

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_ML_API_URL: &str = "http://localhost:3002";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_url: String,
    pub ml_api_url: String,
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            ml_api_url: DEFAULT_ML_API_URL.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpParPassApi {
    client: Client,
    api_url: Url,
    ml_api_url: Url,
}

#[derive(Deserialize)]
struct RecommendationsEnvelope {
    recommendations: Vec<RecommendedCourse>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Serialize)]
struct FavoriteBody<'a> {
    course_id: &'a str,
}

#[derive(Serialize)]
struct CheckInBody<'a> {
    member_id: &'a str,
    course_id: &'a str,
    holes_played: u32,
}

impl HttpParPassApi {
    /// # Errors
    ///
    /// Will return `Err` if either base url does not parse or the http
    /// client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ParPassError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ParPassError::InvalidConfig(e.to_string()))?;
        Ok(Self {
            client,
            api_url: parse_base(&config.api_url)?,
            ml_api_url: parse_base(&config.ml_api_url)?,
        })
    }

    fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ParPassError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| ParPassError::InvalidConfig(format!("{base} cannot be a base url")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ParPassError> {
        debug!(%url, "GET");
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Ok(resp.json().await?)
    }

    async fn get_api<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ParPassError> {
        self.get_json(Self::endpoint(&self.api_url, segments)?).await
    }

    /// Turns a non-2xx response into `Rejected`, preferring the collaborator's
    /// `{"error": ...}` message over the status line.
    async fn rejection(resp: Response) -> ParPassError {
        let status = resp.status();
        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| status.to_string());
        ParPassError::Rejected(message)
    }

    async fn ml_recommendations(
        &self,
        member_id: &str,
    ) -> Result<Vec<RecommendedCourse>, ParPassError> {
        let url = Self::endpoint(&self.ml_api_url, &["recommendations", member_id])?;
        let envelope: RecommendationsEnvelope = self.get_json(url).await?;
        Ok(envelope.recommendations)
    }
}

fn parse_base(raw: &str) -> Result<Url, ParPassError> {
    Url::parse(raw.trim_end_matches('/'))
        .map_err(|e| ParPassError::InvalidConfig(format!("'{raw}': {e}")))
}

#[async_trait]
impl ParPassApi for HttpParPassApi {
    async fn courses(&self, tier: Option<Tier>) -> Result<Vec<Course>, ParPassError> {
        let mut url = Self::endpoint(&self.api_url, &["courses"])?;
        if let Some(tier) = tier {
            url.query_pairs_mut().append_pair("tier", tier.as_str());
        }
        self.get_json(url).await
    }

    async fn course(&self, course_id: &str) -> Result<Course, ParPassError> {
        self.get_api(&["courses", course_id]).await
    }

    async fn course_reviews(&self, course_id: &str) -> Result<Vec<Review>, ParPassError> {
        self.get_api(&["courses", course_id, "reviews"]).await
    }

    async fn course_rating(&self, course_id: &str) -> Result<CourseRating, ParPassError> {
        self.get_api(&["courses", course_id, "rating"]).await
    }

    async fn submit_review(
        &self,
        course_id: &str,
        review: &NewReview,
    ) -> Result<Review, ParPassError> {
        let url = Self::endpoint(&self.api_url, &["courses", course_id, "reviews"])?;
        let resp = self.client.post(url).json(review).send().await?;
        if !resp.status().is_success() {
            return Err(Self::rejection(resp).await);
        }
        Ok(resp.json().await?)
    }

    async fn member_by_code(&self, code: &str) -> Result<Member, ParPassError> {
        let url = Self::endpoint(&self.api_url, &["members", "code", code])?;
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(ParPassError::NotFound("Member not found".to_string()));
        }
        Ok(resp.json().await?)
    }

    async fn member_usage(&self, member_id: &str) -> Result<Usage, ParPassError> {
        self.get_api(&["members", member_id, "usage"]).await
    }

    async fn member_favorites(&self, member_id: &str) -> Result<Vec<Course>, ParPassError> {
        self.get_api(&["members", member_id, "favorites"]).await
    }

    async fn add_favorite(&self, member_id: &str, course_id: &str) -> Result<(), ParPassError> {
        let url = Self::endpoint(&self.api_url, &["members", member_id, "favorites"])?;
        let resp = self
            .client
            .post(url)
            .json(&FavoriteBody { course_id })
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::rejection(resp).await);
        }
        Ok(())
    }

    async fn remove_favorite(
        &self,
        member_id: &str,
        course_id: &str,
    ) -> Result<(), ParPassError> {
        let url = Self::endpoint(
            &self.api_url,
            &["members", member_id, "favorites", course_id],
        )?;
        let resp = self.client.delete(url).send().await?;
        if !resp.status().is_success() {
            return Err(Self::rejection(resp).await);
        }
        Ok(())
    }

    async fn member_history(&self, member_id: &str) -> Result<Vec<Round>, ParPassError> {
        self.get_api(&["members", member_id, "history"]).await
    }

    async fn check_in(
        &self,
        member_id: &str,
        course_id: &str,
        holes_played: u32,
    ) -> Result<(), ParPassError> {
        let url = Self::endpoint(&self.api_url, &["check-in"])?;
        let resp = self
            .client
            .post(url)
            .json(&CheckInBody {
                member_id,
                course_id,
                holes_played,
            })
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::rejection(resp).await);
        }
        Ok(())
    }

    async fn recommendations(
        &self,
        member_id: &str,
    ) -> Result<Vec<RecommendedCourse>, ParPassError> {
        match self.ml_recommendations(member_id).await {
            Ok(recommendations) => Ok(recommendations),
            Err(err) => {
                warn!(%err, "recommendation service unavailable, using api fallback");
                self.get_api(&["members", member_id, "recommendations"])
                    .await
            }
        }
    }

    async fn overview_stats(&self) -> Result<OverviewStats, ParPassError> {
        self.get_api(&["stats", "overview"]).await
    }

    async fn popular_courses(&self) -> Result<Vec<PopularCourse>, ParPassError> {
        self.get_api(&["stats", "popular-courses"]).await
    }

    async fn rounds_by_month(&self) -> Result<Vec<MonthlyRounds>, ParPassError> {
        self.get_api(&["stats", "rounds-by-month"]).await
    }

    async fn tier_breakdown(&self) -> Result<Vec<TierBreakdown>, ParPassError> {
        self.get_api(&["stats", "tier-breakdown"]).await
    }

    async fn top_members(&self) -> Result<Vec<TopMember>, ParPassError> {
        self.get_api(&["stats", "top-members"]).await
    }
}

pub mod client;

use async_trait::async_trait;

use crate::error::ParPassError;
use crate::model::{
    Course, CourseRating, Member, MonthlyRounds, NewReview, OverviewStats, PopularCourse,
    RecommendedCourse, Review, Round, Tier, TierBreakdown, TopMember, Usage,
};

pub use client::{ApiConfig, HttpParPassApi};

/// The ParPass REST collaborator. Everything the frontend shows comes
/// through here; nothing is cached between calls.
#[async_trait]
pub trait ParPassApi: Send + Sync {
    async fn courses(&self, tier: Option<Tier>) -> Result<Vec<Course>, ParPassError>;
    async fn course(&self, course_id: &str) -> Result<Course, ParPassError>;
    async fn course_reviews(&self, course_id: &str) -> Result<Vec<Review>, ParPassError>;
    async fn course_rating(&self, course_id: &str) -> Result<CourseRating, ParPassError>;
    async fn submit_review(
        &self,
        course_id: &str,
        review: &NewReview,
    ) -> Result<Review, ParPassError>;

    async fn member_by_code(&self, code: &str) -> Result<Member, ParPassError>;
    async fn member_usage(&self, member_id: &str) -> Result<Usage, ParPassError>;
    async fn member_favorites(&self, member_id: &str) -> Result<Vec<Course>, ParPassError>;
    async fn add_favorite(&self, member_id: &str, course_id: &str) -> Result<(), ParPassError>;
    async fn remove_favorite(&self, member_id: &str, course_id: &str)
    -> Result<(), ParPassError>;
    async fn member_history(&self, member_id: &str) -> Result<Vec<Round>, ParPassError>;
    async fn check_in(
        &self,
        member_id: &str,
        course_id: &str,
        holes_played: u32,
    ) -> Result<(), ParPassError>;

    /// Ranked suggestions for a member. Implementations are expected to
    /// tolerate an unavailable recommendation service.
    async fn recommendations(
        &self,
        member_id: &str,
    ) -> Result<Vec<RecommendedCourse>, ParPassError>;

    async fn overview_stats(&self) -> Result<OverviewStats, ParPassError>;
    async fn popular_courses(&self) -> Result<Vec<PopularCourse>, ParPassError>;
    async fn rounds_by_month(&self) -> Result<Vec<MonthlyRounds>, ParPassError>;
    async fn tier_breakdown(&self) -> Result<Vec<TierBreakdown>, ParPassError>;
    async fn top_members(&self) -> Result<Vec<TopMember>, ParPassError>;
}

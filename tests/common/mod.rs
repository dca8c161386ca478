#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use parpass::ParPassError;
use parpass::controller::api::ParPassApi;
use parpass::model::{
    Course, CourseRating, Member, MonthlyRounds, NewReview, OverviewStats, PopularCourse,
    RecommendedCourse, Review, Round, Tier, TierBreakdown, TopMember, Usage,
};

/// In-memory stand-in for the ParPass backend. Every call is recorded by
/// name; any name listed in `failing` answers with an error instead.
#[derive(Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

#[derive(Default)]
pub struct FakeState {
    pub members: Vec<Member>,
    pub rounds_used: HashMap<String, u32>,
    pub courses: Vec<Course>,
    pub reviews: HashMap<String, Vec<Review>>,
    pub favorites: HashMap<String, Vec<String>>,
    pub history: HashMap<String, Vec<Round>>,
    pub recommendations: Vec<RecommendedCourse>,
    pub overview: OverviewStats,
    pub popular: Vec<PopularCourse>,
    pub monthly: Vec<MonthlyRounds>,
    pub tiers: Vec<TierBreakdown>,
    pub top_members: Vec<TopMember>,
    pub failing: HashSet<&'static str>,
    pub calls: Vec<&'static str>,
}

impl FakeApi {
    pub fn seeded() -> Arc<Self> {
        let api = Self::default();
        {
            let mut state = api.state();
            state.members = vec![
                member("m1", "John", "Doe", "PP100001", Tier::Premium, 8),
                member("m2", "Jane", "Smith", "PP100002", Tier::Core, 4),
            ];
            state.rounds_used.insert("m1".into(), 3);
            state.rounds_used.insert("m2".into(), 4);
            state.courses = vec![
                course("c1", "Augusta National", "Augusta", "GA", Tier::Premium),
                course("c2", "Pebble Beach", "Pebble Beach", "CA", Tier::Core),
                course("c3", "Torrey Pines", "La Jolla", "CA", Tier::Core),
            ];
            state.reviews.insert(
                "c2".into(),
                vec![review("r1", Some("m2"), "Jane", 4, Some("Windy but stunning"))],
            );
            state.history.insert(
                "m1".into(),
                vec![round("h1", "2024-03-02T14:05:00Z", None, "Pebble Beach", 9)],
            );
            state.favorites.insert("m1".into(), vec!["c3".into()]);
        }
        Arc::new(api)
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn fail(&self, call: &'static str) {
        self.state().failing.insert(call);
    }

    pub fn recover(&self, call: &'static str) {
        self.state().failing.remove(call);
    }

    pub fn calls(&self, call: &str) -> usize {
        self.state().calls.iter().filter(|c| **c == call).count()
    }

    pub fn favorite_ids(&self, member_id: &str) -> Vec<String> {
        self.state()
            .favorites
            .get(member_id)
            .cloned()
            .unwrap_or_default()
    }

    fn enter(&self, call: &'static str) -> Result<MutexGuard<'_, FakeState>, ParPassError> {
        let mut state = self.state();
        state.calls.push(call);
        if state.failing.contains(call) {
            return Err(ParPassError::Network(format!("{call} unavailable")));
        }
        Ok(state)
    }
}

#[async_trait]
impl ParPassApi for FakeApi {
    async fn courses(&self, tier: Option<Tier>) -> Result<Vec<Course>, ParPassError> {
        let state = self.enter("courses")?;
        Ok(state
            .courses
            .iter()
            .filter(|c| tier.is_none_or(|t| c.tier_required == t))
            .cloned()
            .collect())
    }

    async fn course(&self, course_id: &str) -> Result<Course, ParPassError> {
        let state = self.enter("course")?;
        state
            .courses
            .iter()
            .find(|c| c.id == course_id)
            .cloned()
            .ok_or_else(|| ParPassError::NotFound(format!("course {course_id}")))
    }

    async fn course_reviews(&self, course_id: &str) -> Result<Vec<Review>, ParPassError> {
        let state = self.enter("course_reviews")?;
        Ok(state.reviews.get(course_id).cloned().unwrap_or_default())
    }

    async fn course_rating(&self, course_id: &str) -> Result<CourseRating, ParPassError> {
        let state = self.enter("course_rating")?;
        let reviews = state.reviews.get(course_id).cloned().unwrap_or_default();
        let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        Ok(CourseRating {
            average_rating: (!reviews.is_empty())
                .then(|| f64::from(total) / reviews.len() as f64),
            review_count: reviews.len() as u64,
        })
    }

    async fn submit_review(
        &self,
        course_id: &str,
        review: &NewReview,
    ) -> Result<Review, ParPassError> {
        let mut state = self.enter("submit_review")?;
        let first_name = state
            .members
            .iter()
            .find(|m| m.id == review.member_id)
            .map(|m| m.first_name.clone())
            .unwrap_or_default();
        let stored = Review {
            id: format!("r-{}-{course_id}", review.member_id),
            member_id: Some(review.member_id.clone()),
            member_first_name: first_name,
            rating: review.rating.value(),
            comment: review.comment.clone(),
            created_at: "2024-03-05T10:00:00Z".into(),
        };
        let reviews = state.reviews.entry(course_id.to_string()).or_default();
        reviews.retain(|r| r.member_id.as_deref() != Some(review.member_id.as_str()));
        reviews.insert(0, stored.clone());
        Ok(stored)
    }

    async fn member_by_code(&self, code: &str) -> Result<Member, ParPassError> {
        let state = self.enter("member_by_code")?;
        state
            .members
            .iter()
            .find(|m| m.parpass_code == code)
            .cloned()
            .ok_or_else(|| ParPassError::NotFound("Member not found".into()))
    }

    async fn member_usage(&self, member_id: &str) -> Result<Usage, ParPassError> {
        let state = self.enter("member_usage")?;
        Ok(Usage {
            rounds_used: state.rounds_used.get(member_id).copied().unwrap_or_default(),
        })
    }

    async fn member_favorites(&self, member_id: &str) -> Result<Vec<Course>, ParPassError> {
        let state = self.enter("member_favorites")?;
        let ids = state.favorites.get(member_id).cloned().unwrap_or_default();
        Ok(state
            .courses
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn add_favorite(&self, member_id: &str, course_id: &str) -> Result<(), ParPassError> {
        let mut state = self.enter("add_favorite")?;
        let ids = state.favorites.entry(member_id.to_string()).or_default();
        if !ids.iter().any(|id| id == course_id) {
            ids.push(course_id.to_string());
        }
        Ok(())
    }

    async fn remove_favorite(
        &self,
        member_id: &str,
        course_id: &str,
    ) -> Result<(), ParPassError> {
        let mut state = self.enter("remove_favorite")?;
        if let Some(ids) = state.favorites.get_mut(member_id) {
            ids.retain(|id| id != course_id);
        }
        Ok(())
    }

    async fn member_history(&self, member_id: &str) -> Result<Vec<Round>, ParPassError> {
        let state = self.enter("member_history")?;
        Ok(state.history.get(member_id).cloned().unwrap_or_default())
    }

    async fn check_in(
        &self,
        member_id: &str,
        course_id: &str,
        holes_played: u32,
    ) -> Result<(), ParPassError> {
        let mut state = self.enter("check_in")?;
        let used = state.rounds_used.get(member_id).copied().unwrap_or_default();
        let allowed = state
            .members
            .iter()
            .find(|m| m.id == member_id)
            .map_or(0, |m| m.monthly_rounds);
        if used >= allowed {
            return Err(ParPassError::Rejected("No rounds remaining this month".into()));
        }
        let course = state
            .courses
            .iter()
            .find(|c| c.id == course_id)
            .cloned()
            .ok_or_else(|| ParPassError::NotFound(format!("course {course_id}")))?;
        state.rounds_used.insert(member_id.to_string(), used + 1);
        let rounds = state.history.entry(member_id.to_string()).or_default();
        let id = format!("h{}", rounds.len() + 1);
        rounds.insert(
            0,
            round(&id, "2024-03-06T09:00:00Z", Some(&course.id), &course.name, holes_played),
        );
        Ok(())
    }

    async fn recommendations(
        &self,
        _member_id: &str,
    ) -> Result<Vec<RecommendedCourse>, ParPassError> {
        let state = self.enter("recommendations")?;
        Ok(state.recommendations.clone())
    }

    async fn overview_stats(&self) -> Result<OverviewStats, ParPassError> {
        let state = self.enter("overview_stats")?;
        Ok(state.overview.clone())
    }

    async fn popular_courses(&self) -> Result<Vec<PopularCourse>, ParPassError> {
        let state = self.enter("popular_courses")?;
        Ok(state.popular.clone())
    }

    async fn rounds_by_month(&self) -> Result<Vec<MonthlyRounds>, ParPassError> {
        let state = self.enter("rounds_by_month")?;
        Ok(state.monthly.clone())
    }

    async fn tier_breakdown(&self) -> Result<Vec<TierBreakdown>, ParPassError> {
        let state = self.enter("tier_breakdown")?;
        Ok(state.tiers.clone())
    }

    async fn top_members(&self) -> Result<Vec<TopMember>, ParPassError> {
        let state = self.enter("top_members")?;
        Ok(state.top_members.clone())
    }
}

pub fn member(
    id: &str,
    first_name: &str,
    last_name: &str,
    code: &str,
    tier: Tier,
    monthly_rounds: u32,
) -> Member {
    Member {
        id: id.into(),
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        parpass_code: code.into(),
        status: "active".into(),
        health_plan_name: "Blue Shield".into(),
        tier,
        monthly_rounds,
    }
}

pub fn course(id: &str, name: &str, city: &str, state: &str, tier: Tier) -> Course {
    Course {
        id: id.into(),
        name: name.into(),
        city: city.into(),
        state: state.into(),
        zip: "00000".into(),
        holes: 18,
        tier_required: tier,
        phone: "555-0100".into(),
        latitude: String::new(),
        longitude: String::new(),
        average_rating: None,
        review_count: 0,
    }
}

pub fn review(
    id: &str,
    member_id: Option<&str>,
    first_name: &str,
    rating: u8,
    comment: Option<&str>,
) -> Review {
    Review {
        id: id.into(),
        member_id: member_id.map(str::to_string),
        member_first_name: first_name.into(),
        rating,
        comment: comment.map(str::to_string),
        created_at: "2024-03-03T12:00:00Z".into(),
    }
}

pub fn round(
    id: &str,
    checked_in_at: &str,
    course_id: Option<&str>,
    course_name: &str,
    holes_played: u32,
) -> Round {
    Round {
        id: id.into(),
        checked_in_at: checked_in_at.into(),
        holes_played,
        course_id: course_id.map(str::to_string),
        course_name: course_name.into(),
        city: "Somewhere".into(),
        state: "CA".into(),
        tier_required: Tier::Core,
    }
}

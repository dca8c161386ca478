use futures::try_join;
use tracing::info;

use crate::controller::api::ParPassApi;
use crate::controller::session::SessionContext;
use crate::error::ParPassError;
use crate::model::{Course, CourseRating, Member, NewReview, Rating, Review, Round};

/// A round counts for a course by id when the history record carries one,
/// otherwise by course name.
#[must_use]
pub fn played_at(round: &Round, course: &Course) -> bool {
    match &round.course_id {
        Some(course_id) => *course_id == course.id,
        None => round.course_name == course.name,
    }
}

/// One completed round at the course is enough, whatever the holes played.
#[must_use]
pub fn has_played(history: &[Round], course: &Course) -> bool {
    history.iter().any(|round| played_at(round, course))
}

/// The member's own review, matched by member id when the review carries
/// one, otherwise by first name.
#[must_use]
pub fn find_member_review<'a>(reviews: &'a [Review], member: &Member) -> Option<&'a Review> {
    reviews.iter().find(|review| match &review.member_id {
        Some(member_id) => *member_id == member.id,
        None => review.member_first_name == member.first_name,
    })
}

/// Which of the five stars are lit for an average rating.
#[must_use]
pub fn star_row(average_rating: Option<f64>) -> [bool; 5] {
    let lit = average_rating.map_or(0.0, f64::round);
    std::array::from_fn(|i| (i + 1) as f64 <= lit)
}

#[must_use]
pub fn format_average(average_rating: Option<f64>) -> Option<String> {
    average_rating.map(|avg| format!("{avg:.1}"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseReviews {
    pub reviews: Vec<Review>,
    pub rating: CourseRating,
}

/// What the review form starts out with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub rating: Option<u8>,
    pub comment: String,
    pub is_update: bool,
}

impl ReviewDraft {
    #[must_use]
    pub fn from_existing(existing: Option<&Review>) -> Self {
        existing.map_or_else(Self::default, |review| Self {
            rating: Some(review.rating),
            comment: review.comment.clone().unwrap_or_default(),
            is_update: true,
        })
    }
}

/// Everything the course page needs about ratings and reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseReviewState {
    pub course: Course,
    pub reviews: Vec<Review>,
    pub rating: CourseRating,
    /// `None` when no member is signed in or the member has not played here.
    pub draft: Option<ReviewDraft>,
}

impl CourseReviewState {
    #[must_use]
    pub fn eligible(&self) -> bool {
        self.draft.is_some()
    }

    #[must_use]
    pub fn stars(&self) -> [bool; 5] {
        star_row(self.rating.average_rating)
    }

    /// Swap in freshly fetched reviews and rating wholesale.
    pub fn replace(&mut self, fresh: CourseReviews, member: Option<&Member>) {
        self.course = self.course.clone().with_rating(&fresh.rating);
        self.rating = fresh.rating;
        self.reviews = fresh.reviews;
        if self.draft.is_some() {
            let existing = member.and_then(|m| find_member_review(&self.reviews, m));
            self.draft = Some(ReviewDraft::from_existing(existing));
        }
    }
}

/// # Errors
///
/// Returns the first failing lookup.
pub async fn load_course_reviews(
    api: &dyn ParPassApi,
    course_id: &str,
) -> Result<CourseReviews, ParPassError> {
    let (reviews, rating) = try_join!(api.course_reviews(course_id), api.course_rating(course_id))?;
    Ok(CourseReviews { reviews, rating })
}

/// # Errors
///
/// Returns the first failing lookup.
pub async fn load_course_review_state(
    api: &dyn ParPassApi,
    session: &SessionContext,
    course_id: &str,
) -> Result<CourseReviewState, ParPassError> {
    let (course, fresh) = try_join!(api.course(course_id), load_course_reviews(api, course_id))?;
    let draft = match session.member() {
        Some(member) => {
            let history = api.member_history(&member.id).await?;
            has_played(&history, &course).then(|| {
                ReviewDraft::from_existing(find_member_review(&fresh.reviews, member))
            })
        }
        None => None,
    };
    Ok(CourseReviewState {
        course: course.with_rating(&fresh.rating),
        reviews: fresh.reviews,
        rating: fresh.rating,
        draft,
    })
}

/// Validate and submit the member's rating, then re-fetch reviews and the
/// aggregate rating.
///
/// # Errors
///
/// `InvalidRating` for a missing or out-of-range rating and `SignedOut`
/// without a member, both before any network call; otherwise the
/// collaborator's error.
pub async fn submit_review(
    api: &dyn ParPassApi,
    session: &SessionContext,
    course_id: &str,
    rating: Option<u8>,
    comment: Option<&str>,
) -> Result<CourseReviews, ParPassError> {
    let rating = Rating::new(rating)?;
    let member = session.member().ok_or(ParPassError::SignedOut)?;
    let review = NewReview::new(&member.id, rating, comment);
    api.submit_review(course_id, &review).await?;
    info!(member_id = %member.id, course_id, rating = rating.value(), "review submitted");
    load_course_reviews(api, course_id).await
}

use maud::{Markup, html};

use crate::controller::favorites::FavoriteSet;
use crate::controller::reviews::{CourseReviewState, ReviewDraft, format_average};
use crate::controller::session::{DEFAULT_HOLES, SessionContext};
use crate::model::{Course, Rating, TierFilter};
use crate::view::layout::{render_notice, render_page};
use crate::view::{star_icons, tier_badge};

fn favorite_button(course: &Course, favorite: bool, return_to: &str) -> Markup {
    html! {
        form class="favorite" method="post" action=(format!("/courses/{}/favorite", course.id)) {
            input type="hidden" name="return_to" value=(return_to);
            @if favorite {
                button type="submit" class="heart on" title="Remove from favorites" { "♥" }
            } @else {
                button type="submit" class="heart" title="Add to favorites" { "♡" }
            }
        }
    }
}

#[must_use]
pub fn render_course_card(course: &Course, favorites: Option<&FavoriteSet>, return_to: &str) -> Markup {
    html! {
        div class="course-card" {
            div class="course-info" {
                a class="course-name" href=(format!("/courses/{}", course.id)) { (course.name) }
                p class="location" { (course.location_line()) }
                p class="meta" {
                    span { "🏌️ " (course.holes) " holes" }
                    @if !course.phone.is_empty() {
                        span { "📞 " (course.phone) }
                    }
                }
            }
            (tier_badge(course.tier_required.as_str()))
            @if let Some(favorites) = favorites {
                (favorite_button(course, favorites.contains(&course.id), return_to))
            }
        }
    }
}

#[must_use]
pub fn render_course_list(
    session: &SessionContext,
    courses: &[Course],
    filter: TierFilter,
    favorites: Option<&FavoriteSet>,
) -> Markup {
    let return_to = format!("/courses?tier={filter}");
    let body = html! {
        h1 { "Courses" }
        div class="filters" {
            @for choice in TierFilter::CHOICES {
                @let class = if choice == filter { "filter active" } else { "filter" };
                a class=(class) href=(format!("/courses?tier={choice}")) { (choice.label()) }
            }
        }
        @if courses.is_empty() {
            p class="empty" { "No courses found." }
        }
        div class="course-list" {
            @for course in courses {
                (render_course_card(course, favorites, &return_to))
            }
        }
    };
    render_page("Courses", session, body)
}

#[must_use]
pub fn render_favorites(session: &SessionContext, favorites: &[Course], set: &FavoriteSet) -> Markup {
    let body = html! {
        h1 { "My Favorites" }
        @if favorites.is_empty() {
            (render_notice("You haven't favorited any courses yet.", "/courses", "Browse Courses"))
        } @else {
            div class="course-list" {
                @for course in favorites {
                    (render_course_card(course, Some(set), "/favorites"))
                }
            }
        }
    };
    render_page("Favorites", session, body)
}

fn render_review_form(course: &Course, draft: &ReviewDraft, error: Option<&str>) -> Markup {
    html! {
        form class="review-form" method="post" action=(format!("/courses/{}/reviews", course.id)) {
            h3 { @if draft.is_update { "Update your review" } @else { "Rate this course" } }
            fieldset class="rating" {
                @for value in Rating::MIN..=Rating::MAX {
                    label {
                        @if draft.rating == Some(value) {
                            input type="radio" name="rating" value=(value) checked;
                        } @else {
                            input type="radio" name="rating" value=(value);
                        }
                        (value)
                    }
                }
            }
            textarea name="comment" placeholder="Share your experience (optional)" { (draft.comment) }
            @if let Some(error) = error {
                p class="error" { (error) }
            }
            button type="submit" { @if draft.is_update { "Update Review" } @else { "Submit Review" } }
        }
    }
}

#[must_use]
pub fn render_course_detail(
    session: &SessionContext,
    state: &CourseReviewState,
    favorite: bool,
    review_error: Option<&str>,
) -> Markup {
    let course = &state.course;
    let return_to = format!("/courses/{}", course.id);
    let body = html! {
        a class="back" href="/courses" { "← Courses" }
        section class="course-detail" {
            div class="course-header" {
                h1 { (course.name) }
                (tier_badge(course.tier_required.as_str()))
                @if session.is_signed_in() {
                    (favorite_button(course, favorite, &return_to))
                }
            }
            p class="location" { (course.location_line()) }
            div class="rating-summary" {
                (star_icons(&state.stars()))
                @if let Some(avg) = format_average(state.rating.average_rating) {
                    span class="average" { (avg) }
                    span class="count" { "(" (state.rating.review_count) " reviews)" }
                } @else {
                    span class="count" { "No reviews yet" }
                }
            }
            div class="quick-stats" {
                div { span class="label" { "Holes" } span { (course.holes) } }
                @if !course.phone.is_empty() {
                    div { span class="label" { "Phone" } span { (course.phone) } }
                }
            }
            div class="actions" {
                a class="button" href=(course.directions_url()) target="_blank" rel="noopener noreferrer" { "Directions" }
                @if !course.phone.is_empty() {
                    a class="button" href=(format!("tel:{}", course.phone)) { "Call" }
                }
            }
            @if session.is_signed_in() {
                form class="check-in" method="post" action=(format!("/courses/{}/check-in", course.id)) {
                    select name="holes" {
                        option value=(DEFAULT_HOLES) selected { (DEFAULT_HOLES) " holes" }
                        option value="9" { "9 holes" }
                    }
                    button type="submit" { "Check In" }
                }
            }
            p class="tip" {
                "Show your ParPass code at the pro shop when you arrive. Your round will be automatically logged."
            }
        }
        section class="reviews" {
            h2 { "Reviews" }
            @if let Some(draft) = &state.draft {
                (render_review_form(course, draft, review_error))
            }
            @if state.reviews.is_empty() {
                p class="empty" { "Be the first to review this course." }
            }
            @for review in &state.reviews {
                article class="review" {
                    header {
                        strong { (review.member_first_name) }
                        (star_icons(&std::array::from_fn(|i| i < usize::from(review.rating))))
                    }
                    @if let Some(comment) = &review.comment {
                        p { (comment) }
                    }
                }
            }
        }
    };
    render_page(&course.name, session, body)
}

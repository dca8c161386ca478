use maud::{Markup, html};

use crate::controller::session::{SessionContext, SignedIn};
use crate::model::RecommendedCourse;
use crate::view::layout::render_page;

pub const INVALID_CODE_MESSAGE: &str = "Invalid ParPass code. Try PP100001";

#[must_use]
pub fn render_home(
    session: &SessionContext,
    recommendations: &[RecommendedCourse],
    error: Option<&str>,
) -> Markup {
    let body = match session.signed_in() {
        Some(signed_in) => render_member_card(signed_in, recommendations),
        None => render_sign_in(error),
    };
    render_page("Home", session, body)
}

fn render_sign_in(error: Option<&str>) -> Markup {
    html! {
        section class="sign-in" {
            h1 { "ParPass" }
            form method="post" action="/sign-in" {
                label for="code" { "Enter your ParPass code" }
                input id="code" name="code" type="text" placeholder="PP100001" maxlength="8" minlength="6" required;
                @if let Some(error) = error {
                    p class="error" { (error) }
                }
                button type="submit" { "Sign In" }
            }
            p class="hint" { "Demo codes: PP100001 - PP100010" }
        }
    }
}

fn render_member_card(signed_in: &SignedIn, recommendations: &[RecommendedCourse]) -> Markup {
    let member = &signed_in.member;
    html! {
        section class="member-card" {
            h2 { (member.full_name()) }
            span class=(format!("badge badge-{}", member.tier)) {
                (member.tier.as_str().to_uppercase()) " MEMBER"
            }
            div class="rounds-remaining" {
                span class="big-number" { (signed_in.rounds_remaining()) }
                p { (signed_in.usage.rounds_used) " of " (member.monthly_rounds) " used this month" }
            }
            div class="code" { (member.parpass_code) }
            form method="post" action="/sign-out" {
                button type="submit" class="link" { "Sign Out" }
            }
        }
        nav class="quick-actions" {
            a href="/courses" { "Find a Course" }
            a href="/favorites" { "Favorites" }
            a href="/history" { "History" }
        }
        @if !recommendations.is_empty() {
            section class="recommendations" {
                h3 { "Recommended for you" }
                ul {
                    @for rec in recommendations {
                        li {
                            a href=(format!("/courses/{}", rec.course.id)) { (rec.course.name) }
                            span class="location" { (rec.course.location_line()) }
                            @if !rec.reason.is_empty() {
                                p class="reason" { (rec.reason) }
                            }
                        }
                    }
                }
            }
        }
    }
}

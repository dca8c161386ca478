use maud::{Markup, html};

use crate::controller::history::{History, full_date, short_date};
use crate::controller::session::SessionContext;
use crate::view::layout::{render_notice, render_page};
use crate::view::tier_badge;

#[must_use]
pub fn render_history(session: &SessionContext, history: &History) -> Markup {
    let body = html! {
        h1 { "Round History" }
        @if history.total_rounds == 0 {
            (render_notice("No rounds played yet.", "/courses", "Find a Course"))
        } @else {
            div class="summary" {
                div { p class="big-number" { (history.total_rounds) } p { "Total Rounds" } }
                div { p class="big-number" { (history.courses_played) } p { "Courses Played" } }
            }
            @for group in &history.groups {
                section class="month-group" {
                    h2 { (group.label) }
                    @for round in &group.rounds {
                        div class="round" {
                            @if let Some((month, day)) = short_date(round) {
                                div class="date" {
                                    span class="month" { (month) }
                                    span class="day" { (day) }
                                }
                            }
                            div class="round-info" {
                                p class="course-name" { (round.course_name) }
                                p class="location" { (round.city) ", " (round.state) }
                                @if let Some(full) = full_date(round) {
                                    p class="full-date" { (full) }
                                }
                            }
                            (tier_badge(round.tier_required.as_str()))
                            span class="holes" { (round.holes_played) "h" }
                        }
                    }
                }
            }
        }
    };
    render_page("History", session, body)
}

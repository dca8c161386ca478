use maud::{Markup, html};

use crate::controller::session::SessionContext;
use crate::controller::stats::{Dashboard, DONUT_RADIUS, donut_circumference};
use crate::view::layout::render_page;
use crate::view::{fmt_percent, tier_badge};

/// Only the busiest few courses get a bar.
pub const POPULAR_COURSES_SHOWN: usize = 5;

const PREMIUM_COLOR: &str = "#8b5cf6";
const CORE_COLOR: &str = "#10b981";

fn stat_card(label: &str, value: u64) -> Markup {
    html! {
        div class="stat-card" {
            p class="label" { (label) }
            p class="big-number" { (value) }
        }
    }
}

#[must_use]
pub fn render_popular_courses(dashboard: &Dashboard) -> Markup {
    html! {
        section class="popular-courses" {
            h2 { "Popular Courses" }
            @for (idx, bar) in dashboard.popular.iter().take(POPULAR_COURSES_SHOWN).enumerate() {
                div class="bar-row" {
                    span class="rank" { (idx + 1) }
                    div class="bar-label" {
                        p class="course-name" { (bar.course.name) }
                        p class="location" { (bar.course.city) }
                    }
                    div class="bar-track" {
                        div class="bar-fill" style=(format!("width: {}%", fmt_percent(bar.width_percent))) {}
                    }
                    span class="bar-value" { (bar.course.total_rounds) }
                }
            }
        }
    }
}

#[must_use]
pub fn render_tier_donut(dashboard: &Dashboard) -> Markup {
    let circumference = donut_circumference();
    html! {
        section class="tier-breakdown" {
            h2 { "Rounds by Tier" }
            svg class="donut" viewBox="0 0 100 100" {
                @for arc in &dashboard.tiers {
                    circle
                        class="arc"
                        data-tier=(arc.tier)
                        cx="50" cy="50" r=(DONUT_RADIUS)
                        fill="none"
                        stroke=(if arc.premium { PREMIUM_COLOR } else { CORE_COLOR })
                        stroke-width="20"
                        stroke-dasharray=(format!("{} {}", fmt_percent(arc.dash_length), fmt_percent(circumference)))
                        stroke-dashoffset=(fmt_percent(-arc.start_offset)) {}
                }
            }
            ul class="legend" {
                @for arc in &dashboard.tiers {
                    li {
                        (tier_badge(&arc.tier))
                        span class="rounds" { (arc.rounds) " rounds" }
                        span class="percent" { (format!("{:.0}%", arc.percent())) }
                    }
                }
            }
        }
    }
}

fn render_monthly(dashboard: &Dashboard) -> Markup {
    html! {
        section class="monthly" {
            h2 { "Rounds by Month" }
            div class="columns" {
                @for bar in &dashboard.monthly {
                    div class="column" {
                        div class="column-fill" style=(format!("height: {}%", fmt_percent(bar.height_percent))) {}
                        span class="column-value" { (bar.month.rounds) }
                        span class="column-label" { (bar.month.month) }
                    }
                }
            }
        }
    }
}

fn render_top_members(dashboard: &Dashboard) -> Markup {
    html! {
        section class="top-members" {
            h2 { "Top Members" }
            table {
                thead {
                    tr { th { "Member" } th { "Health Plan" } th { "Tier" } th { "Rounds" } }
                }
                tbody {
                    @for member in &dashboard.top_members {
                        tr {
                            td { (member.first_name) " " (member.last_name) }
                            td { (member.health_plan) }
                            td { (tier_badge(&member.tier)) }
                            td { (member.total_rounds) }
                        }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_dashboard(session: &SessionContext, dashboard: &Dashboard) -> Markup {
    let overview = &dashboard.overview;
    let body = html! {
        h1 { "Operator Dashboard" }
        div class="overview" {
            (stat_card("Active Members", overview.active_members))
            (stat_card("Courses", overview.total_courses))
            (stat_card("Total Rounds", overview.total_rounds))
            (stat_card("Rounds This Month", overview.rounds_this_month))
        }
        div class="charts" {
            (render_popular_courses(dashboard))
            (render_tier_donut(dashboard))
        }
        (render_monthly(dashboard))
        (render_top_members(dashboard))
    };
    render_page("Dashboard", session, body)
}

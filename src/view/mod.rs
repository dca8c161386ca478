pub mod courses;
pub mod dashboard;
pub mod history;
pub mod home;
pub mod layout;

use maud::{Markup, html};

/// Percentages for inline styles: two decimals at most, no trailing zeros.
#[must_use]
pub fn fmt_percent(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if matches!(trimmed, "" | "-" | "-0") {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[must_use]
pub fn tier_badge(tier: &str) -> Markup {
    let class = if tier.eq_ignore_ascii_case("premium") {
        "badge badge-premium"
    } else {
        "badge badge-core"
    };
    html! {
        span class=(class) { (tier) }
    }
}

#[must_use]
pub fn star_icons(lit: &[bool; 5]) -> Markup {
    html! {
        span class="stars" {
            @for on in lit {
                @if *on {
                    span class="star lit" { "★" }
                } @else {
                    span class="star" { "☆" }
                }
            }
        }
    }
}

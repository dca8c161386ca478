use maud::{DOCTYPE, Markup, html};

use crate::controller::session::SessionContext;

pub const SITE_NAME: &str = "ParPass";

#[must_use]
pub fn render_page(title: &str, session: &SessionContext, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" href="/static/parpass.css";
                title { (title) " · " (SITE_NAME) }
            }
            body {
                header class="site-header" {
                    a class="brand" href="/" { (SITE_NAME) }
                    nav {
                        a href="/courses" { "Courses" }
                        @if session.is_signed_in() {
                            a href="/favorites" { "Favorites" }
                            a href="/history" { "History" }
                        }
                        a href="/dashboard" { "Dashboard" }
                    }
                }
                main { (body) }
            }
        }
    }
}

/// Empty or failed state with a single way forward.
#[must_use]
pub fn render_notice(message: &str, link_href: &str, link_text: &str) -> Markup {
    html! {
        div class="notice" {
            p { (message) }
            a class="button" href=(link_href) { (link_text) }
        }
    }
}

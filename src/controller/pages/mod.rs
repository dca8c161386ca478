pub mod credentials;
pub mod http_handlers;

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, web};
use maud::Markup;
use std::sync::Arc;

use crate::controller::api::ParPassApi;

pub use credentials::CookieCredentials;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn ParPassApi>,
}

impl AppState {
    #[must_use]
    pub fn new(api: Arc<dyn ParPassApi>) -> Self {
        Self { api }
    }
}

/// Member pages, the operator dashboard and a health check.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(http_handlers::index))
        .route("/sign-in", web::post().to(http_handlers::sign_in))
        .route("/sign-out", web::post().to(http_handlers::sign_out))
        .route("/courses", web::get().to(http_handlers::courses))
        .route("/courses/{id}", web::get().to(http_handlers::course_detail))
        .route(
            "/courses/{id}/favorite",
            web::post().to(http_handlers::toggle_course_favorite),
        )
        .route(
            "/courses/{id}/reviews",
            web::post().to(http_handlers::submit_course_review),
        )
        .route(
            "/courses/{id}/check-in",
            web::post().to(http_handlers::check_in),
        )
        .route("/favorites", web::get().to(http_handlers::favorites))
        .route("/history", web::get().to(http_handlers::history))
        .route("/dashboard", web::get().to(http_handlers::dashboard))
        .route("/health", web::get().to(HttpResponse::Ok));
}

pub(crate) fn html(status: StatusCode, markup: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}

pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Only same-site absolute paths are followed after a form post.
pub(crate) fn local_path(candidate: Option<&str>, fallback: &str) -> String {
    match candidate {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => fallback.to_string(),
    }
}

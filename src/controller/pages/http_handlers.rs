use actix_web::http::StatusCode;
use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::{debug, error, warn};

use super::{AppState, CookieCredentials, html, local_path, see_other};
use crate::controller::favorites::{FavoriteSet, load_favorites, toggle_favorite};
use crate::controller::history::summarize;
use crate::controller::reviews::{ReviewDraft, load_course_review_state, submit_review};
use crate::controller::session::{DEFAULT_HOLES, SessionContext};
use crate::controller::stats::load_dashboard;
use crate::error::ParPassError;
use crate::model::TierFilter;
use crate::view::courses::{render_course_detail, render_course_list, render_favorites};
use crate::view::dashboard::render_dashboard;
use crate::view::history::render_history;
use crate::view::home::{INVALID_CODE_MESSAGE, render_home};
use crate::view::layout::{render_notice, render_page};

#[derive(Debug, Deserialize)]
pub struct SignInForm {
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct CoursesQuery {
    pub tier: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReturnTo {
    pub return_to: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    pub rating: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckInForm {
    pub holes: Option<u32>,
}

async fn open_session(req: &HttpRequest, state: &AppState) -> (SessionContext, CookieCredentials) {
    let mut creds = CookieCredentials::from_request(req);
    let session = SessionContext::load(state.api.as_ref(), &mut creds).await;
    (session, creds)
}

fn failure_status(err: &ParPassError) -> StatusCode {
    match err {
        ParPassError::NotFound(_) => StatusCode::NOT_FOUND,
        ParPassError::InvalidRating | ParPassError::Rejected(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ParPassError::SignedOut => StatusCode::UNAUTHORIZED,
        _ => StatusCode::BAD_GATEWAY,
    }
}

fn failure_page(session: &SessionContext, title: &str, err: &ParPassError) -> HttpResponse {
    let message = match err {
        ParPassError::NotFound(_) => format!("{title} not found."),
        err if err.is_lookup_failure() => format!("Could not load {}.", title.to_lowercase()),
        other => other.to_string(),
    };
    html(
        failure_status(err),
        render_page(title, session, render_notice(&message, "/", "Home")),
    )
}

pub async fn index(req: HttpRequest, state: Data<AppState>) -> HttpResponse {
    let (session, creds) = open_session(&req, &state).await;
    let recommendations = match session.member() {
        Some(member) => state
            .api
            .recommendations(&member.id)
            .await
            .unwrap_or_else(|err| {
                warn!(%err, "recommendations unavailable");
                Vec::new()
            }),
        None => Vec::new(),
    };
    creds.apply(html(StatusCode::OK, render_home(&session, &recommendations, None)))
}

pub async fn sign_in(
    req: HttpRequest,
    state: Data<AppState>,
    form: web::Form<SignInForm>,
) -> HttpResponse {
    let mut creds = CookieCredentials::from_request(&req);
    let mut session = SessionContext::signed_out();
    let signed_in = session
        .sign_in(state.api.as_ref(), &mut creds, &form.code)
        .await
        .map(|_| ());
    match signed_in {
        Ok(()) => creds.apply(see_other("/")),
        Err(err) => {
            warn!(%err, "sign in failed");
            html(
                StatusCode::UNAUTHORIZED,
                render_home(&session, &[], Some(INVALID_CODE_MESSAGE)),
            )
        }
    }
}

pub async fn sign_out(req: HttpRequest) -> HttpResponse {
    let mut creds = CookieCredentials::from_request(&req);
    SessionContext::signed_out().sign_out(&mut creds);
    creds.apply(see_other("/"))
}

pub async fn courses(
    req: HttpRequest,
    state: Data<AppState>,
    query: web::Query<CoursesQuery>,
) -> HttpResponse {
    let (session, creds) = open_session(&req, &state).await;
    let filter = query
        .tier
        .as_deref()
        .unwrap_or_default()
        .parse::<TierFilter>()
        .unwrap_or_else(|err| {
            warn!(%err, "unknown tier filter, showing all");
            TierFilter::All
        });

    let courses = match state.api.courses(filter.tier()).await {
        Ok(courses) => courses,
        Err(err) => {
            error!(%err, "course list failed");
            return creds.apply(failure_page(&session, "Courses", &err));
        }
    };
    let favorites = favorites_or_none(&state, &session).await;
    creds.apply(html(
        StatusCode::OK,
        render_course_list(&session, &courses, filter, favorites.as_ref()),
    ))
}

async fn favorites_or_none(state: &AppState, session: &SessionContext) -> Option<FavoriteSet> {
    if !session.is_signed_in() {
        return None;
    }
    load_favorites(state.api.as_ref(), session)
        .await
        .map_err(|err| warn!(%err, "favorites unavailable"))
        .ok()
}

pub async fn course_detail(
    req: HttpRequest,
    state: Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let course_id = path.into_inner();
    let (session, creds) = open_session(&req, &state).await;
    let review_state =
        match load_course_review_state(state.api.as_ref(), &session, &course_id).await {
            Ok(review_state) => review_state,
            Err(err) => {
                error!(%err, %course_id, "course page failed");
                return creds.apply(failure_page(&session, "Course", &err));
            }
        };
    let favorite = favorites_or_none(&state, &session)
        .await
        .is_some_and(|set| set.contains(&course_id));
    creds.apply(html(
        StatusCode::OK,
        render_course_detail(&session, &review_state, favorite, None),
    ))
}

pub async fn toggle_course_favorite(
    req: HttpRequest,
    state: Data<AppState>,
    path: web::Path<String>,
    form: web::Form<ReturnTo>,
) -> HttpResponse {
    let course_id = path.into_inner();
    let back = local_path(form.return_to.as_deref(), &format!("/courses/{course_id}"));
    let (session, creds) = open_session(&req, &state).await;
    if let Some(mut favorites) = favorites_or_none(&state, &session).await {
        let outcome =
            toggle_favorite(state.api.as_ref(), &session, &mut favorites, &course_id).await;
        debug!(%course_id, ?outcome, "favorite toggled");
    }
    creds.apply(see_other(&back))
}

pub async fn submit_course_review(
    req: HttpRequest,
    state: Data<AppState>,
    path: web::Path<String>,
    form: web::Form<ReviewForm>,
) -> HttpResponse {
    let course_id = path.into_inner();
    let (session, creds) = open_session(&req, &state).await;
    let mut review_state =
        match load_course_review_state(state.api.as_ref(), &session, &course_id).await {
            Ok(review_state) => review_state,
            Err(err) => return creds.apply(failure_page(&session, "Course", &err)),
        };
    let favorite = favorites_or_none(&state, &session)
        .await
        .is_some_and(|set| set.contains(&course_id));

    if !review_state.eligible() {
        let notice = render_notice(
            "Only members who have played this course can review it.",
            &format!("/courses/{course_id}"),
            "Back to course",
        );
        return creds.apply(html(
            StatusCode::FORBIDDEN,
            render_page("Review", &session, notice),
        ));
    }

    let rating = form
        .rating
        .as_deref()
        .and_then(|raw| raw.trim().parse::<u8>().ok());
    let comment = form.comment.as_deref();
    match submit_review(state.api.as_ref(), &session, &course_id, rating, comment).await {
        Ok(fresh) => {
            review_state.replace(fresh, session.member());
            creds.apply(html(
                StatusCode::OK,
                render_course_detail(&session, &review_state, favorite, None),
            ))
        }
        Err(err) => {
            warn!(%err, %course_id, "review not saved");
            let is_update = review_state.draft.as_ref().is_some_and(|d| d.is_update);
            review_state.draft = Some(ReviewDraft {
                rating,
                comment: comment.unwrap_or_default().to_string(),
                is_update,
            });
            let message = err.to_string();
            creds.apply(html(
                failure_status(&err),
                render_course_detail(&session, &review_state, favorite, Some(&message)),
            ))
        }
    }
}

pub async fn check_in(
    req: HttpRequest,
    state: Data<AppState>,
    path: web::Path<String>,
    form: web::Form<CheckInForm>,
) -> HttpResponse {
    let course_id = path.into_inner();
    let (mut session, creds) = open_session(&req, &state).await;
    if !session.is_signed_in() {
        return creds.apply(see_other("/"));
    }
    let holes = form.holes.unwrap_or(DEFAULT_HOLES);
    match session.check_in(state.api.as_ref(), &course_id, holes).await {
        Ok(_) => creds.apply(see_other("/history")),
        Err(err) => {
            warn!(%err, %course_id, "check-in failed");
            creds.apply(failure_page(&session, "Check-in", &err))
        }
    }
}

pub async fn favorites(req: HttpRequest, state: Data<AppState>) -> HttpResponse {
    let (session, creds) = open_session(&req, &state).await;
    let Some(member) = session.member() else {
        let notice = render_notice("Please sign in first", "/", "Sign In");
        return creds.apply(html(
            StatusCode::UNAUTHORIZED,
            render_page("Favorites", &session, notice),
        ));
    };
    match state.api.member_favorites(&member.id).await {
        Ok(courses) => {
            let set = FavoriteSet::from_courses(&courses);
            creds.apply(html(
                StatusCode::OK,
                render_favorites(&session, &courses, &set),
            ))
        }
        Err(err) => {
            error!(%err, "favorites failed");
            let notice = render_notice("Could not load favorites", "/favorites", "Try again");
            creds.apply(html(
                failure_status(&err),
                render_page("Favorites", &session, notice),
            ))
        }
    }
}

pub async fn history(req: HttpRequest, state: Data<AppState>) -> HttpResponse {
    let (session, creds) = open_session(&req, &state).await;
    let Some(member) = session.member() else {
        let notice = render_notice("Please sign in first", "/", "Sign In");
        return creds.apply(html(
            StatusCode::UNAUTHORIZED,
            render_page("History", &session, notice),
        ));
    };
    match state.api.member_history(&member.id).await {
        Ok(rounds) => creds.apply(html(
            StatusCode::OK,
            render_history(&session, &summarize(&rounds)),
        )),
        Err(err) => {
            error!(%err, "history failed");
            creds.apply(failure_page(&session, "History", &err))
        }
    }
}

pub async fn dashboard(req: HttpRequest, state: Data<AppState>) -> HttpResponse {
    let (session, creds) = open_session(&req, &state).await;
    match load_dashboard(state.api.as_ref()).await {
        Ok(dashboard) => creds.apply(html(
            StatusCode::OK,
            render_dashboard(&session, &dashboard),
        )),
        Err(err) => {
            error!(%err, "dashboard failed");
            creds.apply(failure_page(&session, "Dashboard", &err))
        }
    }
}

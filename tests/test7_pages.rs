mod common;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::web::Data;
use actix_web::{App, test};
use std::sync::Arc;

use common::FakeApi;
use parpass::view::home::INVALID_CODE_MESSAGE;
use parpass::{AppState, configure};

macro_rules! app {
    ($api:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new(AppState::new($api.clone())))
                .configure(configure),
        )
        .await
    };
}

fn john() -> Cookie<'static> {
    Cookie::new("parpass_code", "PP100001")
}

fn location(resp: &ServiceResponse) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn credential_cookie(resp: &ServiceResponse) -> Option<String> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "parpass_code")
        .map(|c| c.value().to_string())
}

async fn body(resp: ServiceResponse) -> String {
    String::from_utf8_lossy(&test::read_body(resp).await).into_owned()
}

#[actix_web::test]
async fn signed_out_home_shows_the_sign_in_form() {
    let api: Arc<FakeApi> = FakeApi::seeded();
    let app = app!(api);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body(resp).await;
    assert!(html.contains(r#"action="/sign-in""#));
    assert_eq!(api.calls("recommendations"), 0);
}

#[actix_web::test]
async fn sign_in_sets_the_credential_cookie() {
    let api = FakeApi::seeded();
    let app = app!(api);

    let req = test::TestRequest::post()
        .uri("/sign-in")
        .set_form([("code", "pp100001")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/"));
    assert_eq!(credential_cookie(&resp).as_deref(), Some("PP100001"));
}

#[actix_web::test]
async fn bad_code_shows_the_hint_and_sets_nothing() {
    let api = FakeApi::seeded();
    let app = app!(api);

    let req = test::TestRequest::post()
        .uri("/sign-in")
        .set_form([("code", "PP999999")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(credential_cookie(&resp), None);
    assert!(body(resp).await.contains(INVALID_CODE_MESSAGE));
}

#[actix_web::test]
async fn member_home_shows_usage_even_without_recommendations() {
    let api = FakeApi::seeded();
    api.fail("recommendations");
    let app = app!(api);

    let req = test::TestRequest::get().uri("/").cookie(john()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body(resp).await;
    assert!(html.contains("John Doe"));
    assert!(html.contains("3 of 8 used this month"));
    assert!(html.contains(r#"href="/favorites""#));
}

#[actix_web::test]
async fn stale_cookie_is_removed() {
    let api = FakeApi::seeded();
    let app = app!(api);

    let req = test::TestRequest::get()
        .uri("/")
        .cookie(Cookie::new("parpass_code", "PP000000"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(credential_cookie(&resp).as_deref(), Some(""));
}

#[actix_web::test]
async fn sign_out_removes_the_cookie() {
    let api = FakeApi::seeded();
    let app = app!(api);

    let req = test::TestRequest::post().uri("/sign-out").cookie(john()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(credential_cookie(&resp).as_deref(), Some(""));
}

#[actix_web::test]
async fn course_list_honours_the_tier_filter() {
    let api = FakeApi::seeded();
    let app = app!(api);

    let req = test::TestRequest::get().uri("/courses?tier=core").to_request();
    let html = body(test::call_service(&app, req).await).await;
    assert!(html.contains("Pebble Beach"));
    assert!(html.contains("Torrey Pines"));
    assert!(!html.contains("Augusta National"));
    assert!(!html.contains(r#"class="favorite""#));

    let req = test::TestRequest::get().uri("/courses?tier=gold").to_request();
    let html = body(test::call_service(&app, req).await).await;
    assert!(html.contains("Augusta National"));
}

#[actix_web::test]
async fn favorite_toggle_redirects_back() {
    let api = FakeApi::seeded();
    let app = app!(api);

    let req = test::TestRequest::post()
        .uri("/courses/c1/favorite")
        .cookie(john())
        .set_form([("return_to", "/courses?tier=all")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/courses?tier=all"));
    assert_eq!(api.favorite_ids("m1"), vec!["c3", "c1"]);

    let req = test::TestRequest::post()
        .uri("/courses/c3/favorite")
        .cookie(john())
        .set_form([("return_to", "https://elsewhere.example")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(location(&resp).as_deref(), Some("/courses/c3"));
    assert_eq!(api.favorite_ids("m1"), vec!["c1"]);
}

#[actix_web::test]
async fn course_page_offers_review_only_after_a_round() {
    let api = FakeApi::seeded();
    let app = app!(api);

    let req = test::TestRequest::get().uri("/courses/c2").cookie(john()).to_request();
    let html = body(test::call_service(&app, req).await).await;
    assert!(html.contains(r#"class="review-form""#));
    assert!(html.contains("Windy but stunning"));
    assert!(html.contains("4.0"));

    let req = test::TestRequest::get().uri("/courses/c1").cookie(john()).to_request();
    let html = body(test::call_service(&app, req).await).await;
    assert!(!html.contains(r#"class="review-form""#));
    assert!(html.contains("https://www.google.com/maps/dir/?api=1"));
}

#[actix_web::test]
async fn review_post_is_refused_without_a_round() {
    let api = FakeApi::seeded();
    let app = app!(api);

    let req = test::TestRequest::post()
        .uri("/courses/c1/reviews")
        .cookie(john())
        .set_form([("rating", "5")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(api.calls("submit_review"), 0);
}

#[actix_web::test]
async fn review_without_rating_keeps_the_comment() {
    let api = FakeApi::seeded();
    let app = app!(api);

    let req = test::TestRequest::post()
        .uri("/courses/c2/reviews")
        .cookie(john())
        .set_form([("comment", "Fast greens")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body(resp).await;
    assert!(html.contains("rating must be between 1 and 5"));
    assert!(html.contains("Fast greens"));
    assert_eq!(api.calls("submit_review"), 0);
}

#[actix_web::test]
async fn review_submission_shows_fresh_reviews() {
    let api = FakeApi::seeded();
    let app = app!(api);

    let req = test::TestRequest::post()
        .uri("/courses/c2/reviews")
        .cookie(john())
        .set_form([("rating", "5"), ("comment", "Perfect day")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body(resp).await;
    assert!(html.contains("Perfect day"));
    assert!(html.contains("4.5"));
    assert!(html.contains("Update Review"));
    assert_eq!(api.calls("submit_review"), 1);
}

#[actix_web::test]
async fn check_in_lands_on_history() {
    let api = FakeApi::seeded();
    let app = app!(api);

    let req = test::TestRequest::post()
        .uri("/courses/c1/check-in")
        .cookie(john())
        .set_form([("holes", "9")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/history"));

    let req = test::TestRequest::get().uri("/history").cookie(john()).to_request();
    let html = body(test::call_service(&app, req).await).await;
    assert!(html.contains("Augusta National"));
    assert!(html.contains("9h"));
}

#[actix_web::test]
async fn refused_check_in_is_unprocessable() {
    let api = FakeApi::seeded();
    let app = app!(api);

    let req = test::TestRequest::post()
        .uri("/courses/c2/check-in")
        .cookie(Cookie::new("parpass_code", "PP100002"))
        .set_form([("holes", "18")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body(resp).await.contains("No rounds remaining this month"));
    assert_eq!(api.state().history.get("m2").map(Vec::len), None);
}

#[actix_web::test]
async fn member_pages_ask_visitors_to_sign_in() {
    let api = FakeApi::seeded();
    let app = app!(api);

    for uri in ["/favorites", "/history"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(body(resp).await.contains("Please sign in first"));
    }
}

#[actix_web::test]
async fn favorites_failure_is_reported() {
    let api = FakeApi::seeded();
    let app = app!(api);
    api.fail("member_favorites");

    let req = test::TestRequest::get().uri("/favorites").cookie(john()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert!(body(resp).await.contains("Could not load favorites"));
}

#[actix_web::test]
async fn missing_course_and_broken_dashboard() {
    let api = FakeApi::seeded();
    let app = app!(api);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/courses/zzz").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    api.fail("popular_courses");
    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/dashboard").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

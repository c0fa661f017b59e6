mod common;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{monday_at, source_with};
use http_body_util::BodyExt;
use rtimetable::core::{FixedClock, Locator, SchoolWeek};
use rtimetable::web::handlers::HealthStatus;
use rtimetable::web::router;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let locator = Locator::new(
        source_with(&[("Alice", "Y7"), ("Cara", "Y9"), ("<b>Eve</b>", "Y8")]),
        FixedClock(monday_at(9, 30)),
        SchoolWeek::default(),
    );
    router(Arc::new(locator))
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn test_health() {
    let resp = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(resp.status(), StatusCode::OK);

    let health: HealthStatus = serde_json::from_str(&body_string(resp).await).expect("json");
    assert_eq!(health.status, "ok");
    assert_eq!(health.service, "rtimetable");
    assert!(!health.timestamp.is_empty());
}

#[tokio::test]
async fn test_get_renders_defaults_only() {
    let resp = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_string(resp).await;
    assert!(html.contains("<option value=\"Monday\" selected>Monday</option>"));
    assert!(html.contains("<option value=\"Friday\">Friday</option>"));
    assert!(html.contains("<option value=\"09:00\">09:00</option>"));
    assert!(!html.contains("<table>"));
}

#[tokio::test]
async fn test_post_renders_pupil_sessions() {
    let resp = test_app()
        .oneshot(post_form("pupil_name=+Alice+&day=Monday"))
        .await
        .expect("response");
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_string(resp).await;
    assert!(html.contains("<tr class=\"current\"><td>Monday</td><td>Alice</td><td>Y7</td><td>Maths</td>"));
    assert!(!html.contains("Art"));
}

#[tokio::test]
async fn test_post_without_sessions_shows_error() {
    let resp = test_app()
        .oneshot(post_form("pupil_name=Cara&day=Monday"))
        .await
        .expect("response");

    let html = body_string(resp).await;
    assert!(html.contains("<p class=\"error\">No pupil sessions found on Monday.</p>"));
}

#[tokio::test]
async fn test_post_escapes_user_input() {
    let resp = test_app()
        .oneshot(post_form("pupil_name=%3Cb%3EEve%3C%2Fb%3E&day=Monday"))
        .await
        .expect("response");

    let html = body_string(resp).await;
    assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
    assert!(!html.contains("<b>Eve</b>"));
}

#[tokio::test]
async fn test_api_lookup_returns_outcome() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/lookup?name=Alice&day=Monday")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(resp.status(), StatusCode::OK);

    let json: serde_json::Value =
        serde_json::from_str(&body_string(resp).await).expect("json");
    assert_eq!(json["day"], "Monday");
    assert_eq!(json["results"][0]["subject"], "Maths");
    assert_eq!(json["results"][0]["current"], true);
    assert_eq!(json["time_options"], serde_json::json!(["09:00"]));
}

#[tokio::test]
async fn test_api_lookup_unknown_name_is_empty() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/lookup?name=Bob&day=Monday")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let json: serde_json::Value =
        serde_json::from_str(&body_string(resp).await).expect("json");
    assert_eq!(json["results"], serde_json::json!([]));
}

#[tokio::test]
async fn test_post_with_empty_day_keeps_it() {
    let resp = test_app()
        .oneshot(post_form("pupil_name=Alice&day="))
        .await
        .expect("response");

    let html = body_string(resp).await;
    assert!(html.contains("<option value=\"\" selected></option>"));
    assert!(html.contains("<p class=\"error\">No pupil sessions found on .</p>"));
}

//! Static pages, health probe and fallback routing.
//!
//! Run with: `cargo test -p scenelens-api --test pages_test`

mod helpers;

use axum::http::StatusCode;
use helpers::{frieren_match, setup_test_app, setup_test_app_with_config, MockLookup};

#[tokio::test]
async fn test_index_page() {
    let app = setup_test_app(MockLookup::matching(frieren_match())).await;

    let response = app.client().get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("name=\"animeImage\""));
    assert!(html.contains("name=\"imageUrl\""));
}

#[tokio::test]
async fn test_about_page() {
    let app = setup_test_app(MockLookup::matching(frieren_match())).await;

    let response = app.client().get("/about").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("<h1>About</h1>"));
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_app(MockLookup::matching(frieren_match())).await;

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_unknown_route_renders_404_view() {
    let app = setup_test_app(MockLookup::matching(frieren_match())).await;

    let response = app.client().get("/does/not/exist").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page Not Found"));
    assert_eq!(app.lookup.call_count(), 0);
}

#[tokio::test]
async fn test_wrong_method_renders_error_view() {
    let app = setup_test_app(MockLookup::matching(frieren_match())).await;

    for path in ["/upload", "/search-url"] {
        let response = app.client().get(path).await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "GET {}", path);
        let html = response.text();
        assert!(html.contains("Page Not Found"), "GET {}", path);
        assert!(html.contains("Back to search"), "GET {}", path);
    }

    let response = app.client().post("/about").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page Not Found"));
    assert_eq!(app.lookup.call_count(), 0);
}

#[tokio::test]
async fn test_error_detail_shown_outside_production() {
    let app = setup_test_app(MockLookup::matching(frieren_match())).await;

    let response = app.client().get("/no-such-page").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let html = response.text();
    assert!(html.contains("error-debug"));
    assert!(html.contains("/no-such-page"));
}

#[tokio::test]
async fn test_error_detail_hidden_in_production() {
    let app = setup_test_app_with_config(
        MockLookup::matching(frieren_match()),
        &[("ENVIRONMENT", "production")],
    )
    .await;

    let response = app.client().get("/no-such-page").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let html = response.text();
    assert!(html.contains("Page Not Found"));
    assert!(!html.contains("error-debug"));
    assert!(!html.contains("/no-such-page"));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let app = setup_test_app(MockLookup::matching(frieren_match())).await;

    let response = app.client().get("/static/styles.css").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("margin"));
}

#[tokio::test]
async fn test_security_headers_present() {
    let app = setup_test_app(MockLookup::matching(frieren_match())).await;

    let response = app.client().get("/").await;

    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
}

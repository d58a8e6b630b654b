//! Router-level tests: health check, OpenAPI document, unknown routes.

mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    common::assert_ok(&response);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let app = TestApp::new();

    let response = app.get("/api-docs/openapi.json").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["info"]["title"], "Color Comfort API");
    for path in ["/api/contrast", "/api/comfort", "/api/grid"] {
        assert!(json["paths"].get(path).is_some(), "Missing path {path}");
    }
    assert!(json["paths"]["/api/grid"].get("get").is_some());
    assert!(json["paths"]["/api/grid"].get("post").is_some());
    assert!(json["components"]["schemas"].get("ComfortResponse").is_some());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/unknown").await;

    common::assert_status(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let app = TestApp::new();

    let response = app.post_json("/api/contrast", "{}").await;

    common::assert_status(&response, StatusCode::METHOD_NOT_ALLOWED);
}

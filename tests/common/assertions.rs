//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a JSON error with the given status and return its message
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) -> String {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected.as_u16(),
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
    json["error"]
        .as_str()
        .expect("Expected error message")
        .to_string()
}

/// Assert a float is within `tolerance` of `expected`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Assert comfort response is well-formed and return its score
pub fn assert_valid_comfort(json: &serde_json::Value) -> u64 {
    let score = json["score"].as_u64().expect("Expected numeric score");
    assert!(score <= 100, "Score out of range: {score}");
    assert!(
        ["optimal", "ok", "harsh"].contains(&json["label"].as_str().unwrap_or_default()),
        "Unexpected label {:?}",
        json["label"]
    );

    let factors = json["factors"].as_array().expect("Expected factors array");
    assert_eq!(factors.len(), 6);

    let mut total = 0.0;
    for factor in factors {
        let key = factor["key"].as_str().expect("Expected factor key");
        let penalty = factor["penalty"].as_f64().expect("Expected penalty");
        assert!(penalty <= 0.0, "{key} penalty is positive: {penalty}");
        assert_eq!(json["reasons"][key].as_f64(), Some(penalty), "reasons.{key}");
        total += penalty;
    }

    let expected = (100.0 + total).clamp(0.0, 100.0).round() as u64;
    assert_eq!(score, expected, "Score does not match breakdown");
    score
}

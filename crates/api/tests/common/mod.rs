//! Common test utilities for integration tests.

// Allow dead code in this module - these are helper utilities that may not be used
// by all integration tests but are intentionally available for future use.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use quince_rsvp_api::{app::create_app, config::Config};

/// Test configuration built from embedded defaults.
pub fn test_config() -> Config {
    Config::load_for_test(&[]).expect("test config should build")
}

/// Test configuration with overrides.
pub fn test_config_with(overrides: &[(&str, &str)]) -> Config {
    Config::load_for_test(overrides).expect("test config should build")
}

/// Create a test application router.
pub fn create_test_app(config: Config) -> Router {
    create_app(config)
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}

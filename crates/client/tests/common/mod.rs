//! Common test utilities for integration tests.
//!
//! Shared helper functions and re-exports for testing the New Relic client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//! - Test clients point both base URLs at the mock server (`/v2/` and `/infra/v2/`)
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::path::Path;

#[allow(unused_imports)]
pub use newrelic_client::endpoints;
#[allow(unused_imports)]
pub use newrelic_client::{ClientError, ErrorKind, NewRelicClient};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use serde_json::{Value, json};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// API key used by every test client.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key";

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
#[allow(dead_code)]
pub fn load_fixture(fixture_path: &str) -> Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// REST API base URL served by the mock server.
#[allow(dead_code)]
pub fn base_url(server: &MockServer) -> String {
    format!("{}/v2/", server.uri())
}

/// Client whose base URLs both point at `server`.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> NewRelicClient {
    NewRelicClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(base_url(server))
        .infra_base_url(format!("{}/infra/v2/", server.uri()))
        .build()
        .expect("test client should build")
}

/// Requests received by `server` with the given HTTP method.
#[allow(dead_code)]
pub async fn requests_with_method(server: &MockServer, http_method: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.as_str() == http_method)
        .collect()
}

/// Decode a recorded request body as JSON.
#[allow(dead_code)]
pub fn body_json(request: &Request) -> Value {
    serde_json::from_slice(&request.body).expect("request body should be JSON")
}

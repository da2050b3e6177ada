//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports for testing the Splunk client against a
//! `wiremock` server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here poll every few milliseconds so timeout tests stay fast
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

use std::time::Duration;

#[allow(unused_imports)]
pub use splunk_mcp_client::testing::{load_fixture, load_fixture_text};

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use splunk_mcp_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use splunk_mcp_client::{PollPolicy, SplunkClient};
use splunk_mcp_config::Credentials;
use wiremock::matchers::{method, path};

/// Session key served by [`mount_login`].
#[allow(dead_code)]
pub const TEST_SESSION_KEY: &str = "192fd3e46a31246da7ea7f109e7f95fd7f2a9f0d1e8b3c4a5f6e7d8c9b0a1f2e";

/// Poll interval used by [`test_client`].
#[allow(dead_code)]
pub const FAST_POLL: Duration = Duration::from_millis(2);

/// Client pointed at `server` with the default 30-check budget and a fast interval.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> SplunkClient {
    test_client_with_policy(server, PollPolicy::new(FAST_POLL, 30))
}

#[allow(dead_code)]
pub fn test_client_with_policy(server: &MockServer, policy: PollPolicy) -> SplunkClient {
    SplunkClient::builder()
        .base_url(server.uri())
        .credentials(Credentials::new("admin", "changeme"))
        .poll_policy(policy)
        .build()
        .expect("test client should build")
}

/// Answer every login with the `auth/login_success.json` fixture.
#[allow(dead_code)]
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("auth/login_success.json")),
        )
        .mount(server)
        .await;
}

/// `Authorization` header value expected on calls made with [`TEST_SESSION_KEY`].
#[allow(dead_code)]
pub fn splunk_auth() -> String {
    format!("Splunk {}", TEST_SESSION_KEY)
}

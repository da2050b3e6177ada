//! Authentication endpoint.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::endpoints::send_request_text;
use crate::error::{ClientError, Result};

/// Login to Splunk with username and password, returning the session key.
///
/// Every failure, including an unreachable backend, is reported as
/// [`ClientError::Authentication`].
pub async fn login(client: &Client, base_url: &str, username: &str, password: &str) -> Result<String> {
    debug!("Logging in to Splunk as {}", username);

    let url = format!("{}/services/auth/login", base_url);
    let builder = client
        .post(&url)
        .form(&[("username", username), ("password", password)])
        .query(&[("output_mode", "json")]);

    let body = send_request_text(builder)
        .await
        .map_err(|e| ClientError::Authentication(e.to_string()))?;

    let resp: Value = serde_json::from_str(&body).map_err(|e| {
        ClientError::Authentication(format!("Unreadable login response: {}", e))
    })?;

    session_key(&resp)
        .map(|s| s.to_string())
        .ok_or_else(|| ClientError::Authentication("Missing sessionKey in response".to_string()))
}

/// `sessionKey` may sit at the top level or inside the first entry's content.
fn session_key(resp: &Value) -> Option<&str> {
    resp.get("sessionKey")
        .and_then(Value::as_str)
        .or_else(|| resp.get("entry")?.get(0)?.get("content")?.get("sessionKey")?.as_str())
        .filter(|s| !s.is_empty())
}

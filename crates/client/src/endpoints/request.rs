//! Single-attempt HTTP dispatch shared by every endpoint.
//!
//! Responsibilities:
//! - Send a prepared `reqwest::RequestBuilder` exactly once.
//! - Turn non-2xx answers into a [`RequestFailure`] whose message prefers the
//!   Splunk `messages[]` body over raw text.
//!
//! Does NOT handle:
//! - Retries. A failed request is reported to the caller immediately.
//! - Mapping to [`crate::ClientError`]; each protocol stage decides which kind
//!   a transport problem becomes.

use reqwest::{RequestBuilder, Response};
use thiserror::Error;
use tracing::debug;

use crate::models::SplunkMessages;

/// Header carrying the Splunk request id, echoed into error messages when present.
const REQUEST_ID_HEADER: &str = "X-Splunk-Request-Id";

/// Why a request did not produce a usable response.
#[derive(Error, Debug)]
pub enum RequestFailure {
    /// Connection, TLS, timeout or body-read failure.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP {status} from {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    Status {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },
}

/// Value for the `Authorization` header of an authenticated call.
pub fn splunk_authorization(token: &str) -> String {
    format!("Splunk {token}")
}

/// Send a request once and return the response if its status is 2xx.
pub async fn send_request(builder: RequestBuilder) -> Result<Response, RequestFailure> {
    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<SplunkMessages>(&body) {
        Ok(m) if !m.messages.is_empty() => m.summary(),
        _ => body,
    };

    debug!(status, url = %url, "Request returned non-success status");

    Err(RequestFailure::Status {
        status,
        url,
        message,
        request_id,
    })
}

/// Send a request and read the whole body as text.
pub async fn send_request_text(builder: RequestBuilder) -> Result<String, RequestFailure> {
    let response = send_request(builder).await?;
    Ok(response.text().await?)
}

//! Client-level session helpers.
//!
//! # What this module handles:
//! - The login exchange that precedes every high-level call
//! - The connection test report
//!
//! # What this module does NOT handle:
//! - Token storage (handled by [`crate::auth::SessionManager`])
//! - The login HTTP request (handled by [`crate::endpoints::login`])
//!
//! # Invariants
//! - `ensure_authenticated` always performs a fresh login; a stored token is
//!   never reused, so a stale key cannot cause a failure mid-run.

use secrecy::{ExposeSecret, SecretString};
use splunk_mcp_config::{Endpoint, Scheme, constants::TOKEN_PREVIEW_CHARS};
use tracing::{debug, warn};

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;

/// Outcome of a successful connection test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionReport {
    pub endpoint: Endpoint,
    pub username: String,
    /// First characters of the session key followed by `...`.
    pub token_preview: String,
}

impl ConnectionReport {
    pub fn scheme(&self) -> Scheme {
        self.endpoint.scheme
    }
}

impl SplunkClient {
    /// Log in and return the newly issued session key.
    ///
    /// The key is also stored in the session manager, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::Authentication`] if the login exchange
    /// fails for any reason, including an unreachable backend.
    pub async fn ensure_authenticated(&self) -> Result<SecretString> {
        let token = endpoints::login(
            &self.http,
            &self.base_url,
            self.session_manager.username(),
            self.session_manager.password(),
        )
        .await
        .inspect_err(|e| warn!("Login to {} failed: {}", self.endpoint, e))?;

        debug!("Authenticated as {}", self.session_manager.username());
        self.session_manager.set_session_token(token.clone());
        Ok(SecretString::new(token.into()))
    }

    /// Log in and describe the connection.
    pub async fn test_connection(&self) -> Result<ConnectionReport> {
        let token = self.ensure_authenticated().await?;
        Ok(ConnectionReport {
            endpoint: self.endpoint.clone(),
            username: self.session_manager.username().to_string(),
            token_preview: token_preview(token.expose_secret()),
        })
    }
}

fn token_preview(token: &str) -> String {
    let head: String = token.chars().take(TOKEN_PREVIEW_CHARS).collect();
    format!("{}...", head)
}

//! Credentials and session token storage.
//!
//! Responsibilities:
//! - Hold the username/password used for every login exchange.
//! - Keep the most recently issued session key.
//!
//! Does NOT handle:
//! - The login HTTP call itself (see [`crate::endpoints::login`]).
//! - Expiry tracking. Callers re-authenticate instead of trusting a stored key.
//!
//! Invariants:
//! - Secrets are only reachable through `ExposeSecret`; `Debug` output is redacted.
//! - The token lock is held only for a read or an assignment, never across `.await`.
//! - Concurrent writers are last-writer-wins.

use std::sync::{Mutex, MutexGuard};

use secrecy::{ExposeSecret, SecretString};
use splunk_mcp_config::Credentials;

/// Manages the Splunk session key for one set of credentials.
#[derive(Debug)]
pub struct SessionManager {
    credentials: Credentials,
    session_token: Mutex<Option<SecretString>>,
}

impl SessionManager {
    /// Create a session manager with no token yet.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            session_token: Mutex::new(None),
        }
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    pub(crate) fn password(&self) -> &str {
        self.credentials.password.expose_secret()
    }

    /// Store a freshly issued session key, replacing any previous one.
    pub fn set_session_token(&self, token: String) {
        *self.lock() = Some(SecretString::new(token.into()));
    }

    /// Copy of the most recently stored session key, if any.
    pub fn session_token(&self) -> Option<SecretString> {
        self.lock().clone()
    }

    pub fn has_session(&self) -> bool {
        self.lock().is_some()
    }

    // A poisoned lock still holds a valid Option; keep using it.
    fn lock(&self) -> MutexGuard<'_, Option<SecretString>> {
        self.session_token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

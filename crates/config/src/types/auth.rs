//! Credential types for Splunk authentication.
//!
//! Responsibilities:
//! - Hold the username/password pair used for every login exchange.
//!
//! Does NOT handle:
//! - The login exchange itself or token storage (see client crate).
//!
//! Invariants:
//! - The password is a `SecretString`; `Debug` output redacts it.

use secrecy::SecretString;

use crate::constants::{DEFAULT_PASSWORD, DEFAULT_USERNAME};

/// Username and password used to obtain a session token.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    /// Create credentials from a username and a plain password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into().into()),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

//! Connection configuration types for the Splunk management endpoint.
//!
//! Responsibilities:
//! - Define the endpoint scheme, host, and port.
//! - Render the endpoint as a normalized base URL.
//! - Define the main `Config` structure combining connection and credentials.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `Endpoint::base_url()` never ends with a slash.
//! - Default values come from `constants`, not magic numbers.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{DEFAULT_HOST, DEFAULT_SPLUNK_PORT, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::Credentials;

/// Transport scheme of the management endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            other => Err(format!("unsupported scheme '{}' (expected http or https)", other)),
        }
    }
}

/// Location of the Splunk management API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(scheme: Scheme, host: impl Into<String>, port: u16) -> Self {
        Self {
            scheme,
            host: host.into(),
            port,
        }
    }

    /// Base URL for REST calls, e.g. `http://localhost:8089`.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}",
            self.scheme,
            self.host.trim_end_matches('/'),
            self.port
        )
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(Scheme::default(), DEFAULT_HOST, DEFAULT_SPLUNK_PORT)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Connection settings for the Splunk server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub endpoint: Endpoint,
    /// Skip TLS verification (self-signed management certificates).
    pub skip_verify: bool,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub credentials: Credentials,
}

impl Config {
    /// Create a config for the given endpoint and credentials with default
    /// connection settings.
    pub fn new(endpoint: Endpoint, credentials: Credentials) -> Self {
        Self {
            connection: ConnectionConfig {
                endpoint,
                ..Default::default()
            },
            credentials,
        }
    }

    /// Base URL of the configured endpoint.
    pub fn base_url(&self) -> String {
        self.connection.endpoint.base_url()
    }
}

//! Client builder for constructing [`SplunkClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`SplunkClient`] methods)
//! - Reading configuration from the environment (see `splunk_mcp_config::ConfigLoader`)
//!
//! # Invariants
//! - `base_url` and `credentials` must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::str::FromStr;
use std::time::Duration;

use reqwest::Url;
use splunk_mcp_config::{
    Config, Credentials, Endpoint, Scheme,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_RESULTS_PAGE_SIZE, DEFAULT_TIMEOUT_SECS},
};

use crate::auth::SessionManager;
use crate::client::SplunkClient;
use crate::endpoints::PollPolicy;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`SplunkClient`].
///
/// # Example
///
/// ```rust,ignore
/// use splunk_mcp_client::{PollPolicy, SplunkClient};
/// use splunk_mcp_config::Credentials;
///
/// let client = SplunkClient::builder()
///     .base_url("https://localhost:8089".to_string())
///     .credentials(Credentials::new("admin", "changeme"))
///     .timeout(Duration::from_secs(60))
///     .poll_policy(PollPolicy::new(Duration::from_millis(500), 60))
///     .build()?;
/// ```
pub struct SplunkClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    skip_verify: bool,
    timeout: Duration,
    poll_policy: PollPolicy,
    results_page_size: u64,
}

impl Default for SplunkClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            poll_policy: PollPolicy::default(),
            results_page_size: DEFAULT_RESULTS_PAGE_SIZE,
        }
    }
}

impl SplunkClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Splunk management port, e.g. `https://localhost:8089`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the username/password used for every login.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// Splunk management ports commonly serve self-signed certificates.
    /// This only affects HTTPS connections.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the per-request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the status polling policy. Default is 30 checks, one second apart.
    pub fn poll_policy(mut self, policy: PollPolicy) -> Self {
        self.poll_policy = policy;
        self
    }

    /// Set the `count` requested when fetching results. Default is 100.
    pub fn results_page_size(mut self, count: u64) -> Self {
        self.results_page_size = count.max(1);
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.base_url());
        self.credentials = Some(config.credentials.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://localhost:8089/"` -> `"https://localhost:8089"`
    /// - `"https://example.com:8089//"` -> `"https://example.com:8089"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Split a base URL into scheme, host and port.
    fn parse_endpoint(base_url: &str) -> Result<Endpoint> {
        let url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let scheme = Scheme::from_str(url.scheme()).map_err(ClientError::InvalidUrl)?;
        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ClientError::InvalidUrl(format!("{}: missing host", base_url)))?;
        let port = url
            .port_or_known_default()
            .ok_or_else(|| ClientError::InvalidUrl(format!("{}: missing port", base_url)))?;
        Ok(Endpoint::new(scheme, host, port))
    }

    /// Build the [`SplunkClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or unusable,
    /// or if `credentials` were not provided.
    pub fn build(self) -> Result<SplunkClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);
        let endpoint = Self::parse_endpoint(&base_url)?;

        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::InvalidUrl("credentials are required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if endpoint.scheme == Scheme::Https {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(SplunkClient {
            http,
            base_url,
            endpoint,
            session_manager: SessionManager::new(credentials),
            poll_policy: self.poll_policy,
            results_page_size: self.results_page_size,
        })
    }
}

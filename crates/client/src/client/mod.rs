//! Main Splunk client and its API methods.
//!
//! This module provides the [`SplunkClient`] used by the tool server. It owns
//! the HTTP connection pool, the endpoint, and the session manager.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login and connection test
//! - `search`: The submit / poll / fetch stages and the `run` orchestrator
//! - `indexes`: Index listing
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Session token storage (delegated to [`crate::auth::SessionManager`])
//!
//! # Invariants
//! - All methods take `&self`; a client can be shared behind an `Arc` and
//!   used by concurrent searches.
//! - Every high-level call authenticates first and uses the token returned by
//!   its own login.

pub mod builder;
mod indexes;
mod search;
mod session;

pub use session::ConnectionReport;

use splunk_mcp_config::Endpoint;

use crate::auth::SessionManager;
use crate::endpoints::PollPolicy;

/// Splunk management API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use splunk_mcp_client::SplunkClient;
/// use splunk_mcp_config::Credentials;
///
/// let client = SplunkClient::builder()
///     .base_url("https://localhost:8089".to_string())
///     .credentials(Credentials::new("admin", "changeme"))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) endpoint: Endpoint,
    pub(crate) session_manager: SessionManager,
    pub(crate) poll_policy: PollPolicy,
    pub(crate) results_page_size: u64,
}

impl SplunkClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Scheme, host and port this client talks to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn poll_policy(&self) -> PollPolicy {
        self.poll_policy
    }

    pub fn session_manager(&self) -> &SessionManager {
        &self.session_manager
    }
}

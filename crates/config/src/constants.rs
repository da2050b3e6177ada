//! Centralized constants for the Splunk MCP workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default username used when none is configured.
pub const DEFAULT_USERNAME: &str = "admin";

/// Default password used when none is configured.
///
/// Development-only; real deployments set `SPLUNK_PASSWORD`.
pub const DEFAULT_PASSWORD: &str = "Password1";

/// Default scheme for the management endpoint.
pub const DEFAULT_SCHEME: &str = "http";

/// Default management host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default Splunk management port.
pub const DEFAULT_SPLUNK_PORT: u16 = 8089;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Search & Polling Defaults
// =============================================================================

/// Default earliest time bound for searches.
pub const DEFAULT_EARLIEST_TIME: &str = "-24h";

/// Default latest time bound for searches.
pub const DEFAULT_LATEST_TIME: &str = "now";

/// Default maximum number of results a search job keeps.
pub const DEFAULT_MAX_COUNT: u64 = 100;

/// Interval between job status checks in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Number of status checks before a job is declared timed out.
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 30;

/// Number of rows requested from the results endpoint (first page only).
pub const DEFAULT_RESULTS_PAGE_SIZE: u64 = 100;

/// Number of characters of the session token shown in connection reports.
pub const TOKEN_PREVIEW_CHARS: usize = 20;

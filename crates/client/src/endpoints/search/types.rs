//! Search types and options.
//!
//! # What this module handles:
//! - Search job creation options
//! - The status-polling policy (interval and attempt budget)
//!
//! # What this module does NOT handle:
//! - Search execution logic
//! - Result parsing

use std::time::Duration;

use splunk_mcp_config::constants::{DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_MS};

use crate::models::SearchRequest;

/// Options for creating a search job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateJobOptions {
    /// Earliest time for search (e.g., "-24h", "2024-01-01T00:00:00").
    pub earliest_time: Option<String>,
    /// Latest time for search (e.g., "now").
    pub latest_time: Option<String>,
    /// Maximum number of results the job retains.
    pub max_count: Option<u64>,
}

impl From<&SearchRequest> for CreateJobOptions {
    fn from(request: &SearchRequest) -> Self {
        Self {
            earliest_time: Some(request.earliest_time().to_string()),
            latest_time: Some(request.latest_time().to_string()),
            max_count: Some(request.max_count()),
        }
    }
}

/// How often and how many times to check a job's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl PollPolicy {
    /// Build a policy; a zero budget is raised to one check.
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts: max_attempts.max(1),
        }
    }
}

impl Default for PollPolicy {
    /// One check per second, thirty checks.
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            DEFAULT_MAX_POLL_ATTEMPTS,
        )
    }
}

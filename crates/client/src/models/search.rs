//! Search request, job and result models.
//!
//! # What this module handles:
//! - Validated search parameters ([`SearchRequest`])
//! - The in-flight job handle ([`Job`])
//! - The normalized outcome of a run ([`SearchResult`])
//!
//! # Invariants
//! - A `SearchRequest` always has a non-blank query and `max_count >= 1`.
//! - `SearchResult::row_count == SearchResult::rows.len()`.

use serde::Serialize;
use serde_json::{Map, Value};
use splunk_mcp_config::constants::{DEFAULT_EARLIEST_TIME, DEFAULT_LATEST_TIME, DEFAULT_MAX_COUNT};

use crate::error::{ClientError, Result};

/// One result row: field name to value, as returned by the backend.
pub type Row = Map<String, Value>;

/// Parameters for a single search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    earliest_time: String,
    latest_time: String,
    max_count: u64,
}

impl SearchRequest {
    /// Build a request with default time bounds (`-24h` to `now`) and 100 rows.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] when the query is empty after trimming.
    pub fn new(query: impl Into<String>) -> Result<Self> {
        Self::with_options(query, None, None, None)
    }

    /// Build a request, falling back to defaults for any `None` option.
    ///
    /// Blank time bounds are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] when the query is blank or
    /// `max_count` is zero.
    pub fn with_options(
        query: impl Into<String>,
        earliest_time: Option<String>,
        latest_time: Option<String>,
        max_count: Option<u64>,
    ) -> Result<Self> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "query must not be empty".to_string(),
            ));
        }

        let max_count = max_count.unwrap_or(DEFAULT_MAX_COUNT);
        if max_count == 0 {
            return Err(ClientError::InvalidRequest(
                "count must be at least 1".to_string(),
            ));
        }

        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        Ok(Self {
            query,
            earliest_time: non_blank(earliest_time)
                .unwrap_or_else(|| DEFAULT_EARLIEST_TIME.to_string()),
            latest_time: non_blank(latest_time).unwrap_or_else(|| DEFAULT_LATEST_TIME.to_string()),
            max_count,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn earliest_time(&self) -> &str {
        &self.earliest_time
    }

    pub fn latest_time(&self) -> &str {
        &self.latest_time
    }

    pub fn max_count(&self) -> u64 {
        self.max_count
    }
}

/// A submitted search job being polled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub sid: String,
    pub done: bool,
    /// Number of status checks performed so far.
    pub attempt: u32,
}

impl Job {
    pub fn new(sid: impl Into<String>) -> Self {
        Self {
            sid: sid.into(),
            done: false,
            attempt: 0,
        }
    }
}

/// Rows fetched for a completed job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub rows: Vec<Row>,
    pub job_id: String,
    pub row_count: usize,
}

impl SearchResult {
    pub fn new(job_id: impl Into<String>, rows: Vec<Row>) -> Self {
        let row_count = rows.len();
        Self {
            rows,
            job_id: job_id.into(),
            row_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

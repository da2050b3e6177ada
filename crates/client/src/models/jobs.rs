//! Search job status model.
//!
//! # What this module handles:
//! - The `entry[0].content` object of `GET /services/search/jobs/{sid}`
//!
//! # What this module does NOT handle:
//! - Locating the content object inside the envelope (see [`crate::endpoints::search`])

use serde::Deserialize;

/// Status of a dispatched search job.
///
/// Only `isDone` drives the protocol; the other fields are informational and
/// tolerate absence.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct JobStatus {
    #[serde(
        rename = "isDone",
        default,
        deserialize_with = "crate::serde_helpers::bool_from_any"
    )]
    pub is_done: bool,
    #[serde(rename = "dispatchState", default)]
    pub dispatch_state: Option<String>,
    #[serde(rename = "doneProgress", default)]
    pub done_progress: Option<f64>,
    #[serde(
        rename = "resultCount",
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub result_count: Option<u64>,
}

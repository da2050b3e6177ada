//! Search job endpoints.
//!
//! This module provides low-level HTTP endpoints for Splunk search operations.
//!
//! # What this module handles:
//! - Search job creation, status, and results
//! - Decoding the sid from JSON or XML creation responses
//!
//! # What this module does NOT handle:
//! - Running a whole search (see [`crate::client::search`])

pub mod jobs;
pub mod sid;
pub mod types;

pub use jobs::{
    create_job, get_job_status, get_results, parse_job_status, parse_results, search_command,
    wait_for_job,
};
pub use sid::{WireFormat, decode_json_sid, decode_xml_sid, extract_sid};
pub use types::{CreateJobOptions, PollPolicy};

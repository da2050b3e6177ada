//! Search job operations.
//!
//! This module provides endpoints for creating, polling and reading search jobs.
//!
//! # What this module handles:
//! - Creating search jobs (sid decoding lives in [`super::sid`])
//! - Getting job status
//! - Waiting for job completion under a [`PollPolicy`]
//! - Retrieving search results
//!
//! # What this module does NOT handle:
//! - Authentication (callers pass a token obtained from [`crate::endpoints::login`])
//! - Composing the stages into one run (see [`crate::client::search`])
//!
//! # Invariants
//! - Status checks never exceed `policy.max_attempts`.
//! - No sleep follows the final status check.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::endpoints::{encode_path_segment, send_request_text, splunk_authorization};
use crate::error::{ClientError, Result};
use crate::models::{Job, JobStatus, Row};
use crate::redact_query;

use super::sid::extract_sid;
use super::types::{CreateJobOptions, PollPolicy};

/// Prefix `query` with the `search` command.
pub fn search_command(query: &str) -> String {
    format!("search {}", query)
}

/// Create a new search job and return its sid.
///
/// The creation body may be JSON or XML; both are accepted.
pub async fn create_job(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    query: &str,
    options: &CreateJobOptions,
) -> Result<String> {
    debug!("Creating search job: {}", redact_query(query));

    let url = format!("{}/services/search/jobs", base_url);

    let mut form_data: Vec<(&str, String)> = vec![("search", search_command(query))];

    if let Some(earliest) = &options.earliest_time {
        form_data.push(("earliest_time", earliest.clone()));
    }
    if let Some(latest) = &options.latest_time {
        form_data.push(("latest_time", latest.clone()));
    }
    // `max_count` caps what the job retains; the results page size is set at fetch time.
    if let Some(max_count) = options.max_count {
        form_data.push(("max_count", max_count.to_string()));
    }
    // The creation body may still come back as XML; `extract_sid` sniffs it.
    form_data.push(("output_mode", "json".to_string()));

    let builder = client
        .post(&url)
        .header("Authorization", splunk_authorization(auth_token))
        .form(&form_data);

    let body = send_request_text(builder).await.map_err(|e| {
        warn!("Search job creation failed: {}", e);
        ClientError::Submission(e.to_string())
    })?;

    let sid = extract_sid(&body)?;
    info!(sid = %sid, "Search job created");
    Ok(sid)
}

/// Get the status of a search job.
pub async fn get_job_status(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    sid: &str,
) -> Result<JobStatus> {
    debug!("Getting status for job: {}", sid);

    let url = format!("{}/services/search/jobs/{}", base_url, encode_path_segment(sid));
    let builder = client
        .get(&url)
        .header("Authorization", splunk_authorization(auth_token))
        .query(&[("output_mode", "json")]);

    let body = send_request_text(builder)
        .await
        .map_err(|e| ClientError::Transport(e.to_string()))?;

    parse_job_status(sid, &body)
}

/// Decode `entry[0].content` of a status body.
pub fn parse_job_status(sid: &str, body: &str) -> Result<JobStatus> {
    let poll_parse = |message: String| ClientError::PollParse {
        sid: sid.to_string(),
        message,
    };

    let resp: Value = serde_json::from_str(body)
        .map_err(|e| poll_parse(format!("Failed to parse job status: {}", e)))?;

    let content = resp
        .get("entry")
        .and_then(|entry| entry.get(0))
        .and_then(|first| first.get("content"))
        .filter(|content| content.is_object())
        .ok_or_else(|| poll_parse("Missing entry[0].content in response".to_string()))?;

    serde_json::from_value(content.clone())
        .map_err(|e| poll_parse(format!("Failed to parse job status: {}", e)))
}

/// Wait for a search job to complete.
///
/// Checks status up to `policy.max_attempts` times, sleeping `policy.interval`
/// between checks. Returns the finished [`Job`] or
/// [`ClientError::PollTimeout`] once the budget is spent.
pub async fn wait_for_job(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    sid: &str,
    policy: &PollPolicy,
) -> Result<Job> {
    let mut job = Job::new(sid);

    while job.attempt < policy.max_attempts {
        job.attempt += 1;
        let status = get_job_status(client, base_url, auth_token, &job.sid).await?;

        if status.is_done {
            job.done = true;
            info!(sid = %job.sid, attempts = job.attempt, "Search job completed");
            return Ok(job);
        }

        debug!(
            sid = %job.sid,
            attempt = job.attempt,
            dispatch_state = status.dispatch_state.as_deref().unwrap_or("unknown"),
            "Search job not done yet"
        );

        if job.attempt < policy.max_attempts {
            tokio::time::sleep(policy.interval).await;
        }
    }

    warn!(sid = %job.sid, attempts = job.attempt, "Search job timed out");
    Err(ClientError::PollTimeout {
        sid: job.sid,
        attempts: job.attempt,
    })
}

/// Get the first page of results from a completed search job.
pub async fn get_results(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    sid: &str,
    count: u64,
) -> Result<Vec<Row>> {
    debug!("Getting results for job: {}", sid);

    let url = format!(
        "{}/services/search/jobs/{}/results",
        base_url,
        encode_path_segment(sid)
    );
    let count = count.to_string();
    let builder = client
        .get(&url)
        .header("Authorization", splunk_authorization(auth_token))
        .query(&[("output_mode", "json"), ("count", count.as_str())]);

    let body = send_request_text(builder)
        .await
        .map_err(|e| ClientError::Transport(e.to_string()))?;

    parse_results(&body)
}

/// Decode a results body into rows.
///
/// Accepts a top-level array or an object with a `results` array. An empty
/// body or an object without `results` yields no rows.
pub fn parse_results(body: &str) -> Result<Vec<Row>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let json: Value = serde_json::from_str(body).map_err(|e| {
        ClientError::ResultParse(format!("Failed to parse search results response: {}", e))
    })?;

    let rows = match json {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match map.remove("results") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(rows)) => rows,
            Some(other) => {
                return Err(ClientError::ResultParse(format!(
                    "Expected 'results' to be an array, got {}",
                    json_type(&other)
                )));
            }
        },
        other => {
            return Err(ClientError::ResultParse(format!(
                "Expected an object or array, got {}",
                json_type(&other)
            )));
        }
    };

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| match row {
            Value::Object(map) => Ok(map),
            other => Err(ClientError::ResultParse(format!(
                "Result row {} is {}, not an object",
                i,
                json_type(&other)
            ))),
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

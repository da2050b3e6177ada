//! Search-related API methods for [`SplunkClient`].
//!
//! # What this module handles:
//! - The three job stages (`submit`, `poll_until_done`, `fetch`)
//! - `run`, which composes login and the three stages
//!
//! # What this module does NOT handle:
//! - Low-level search endpoint HTTP calls (in [`crate::endpoints::search`])
//!
//! # Invariants
//! - Results are only fetched for a job whose status reported done.
//! - The first failing stage ends the run; its error kind is returned unchanged.

use secrecy::ExposeSecret;
use tracing::info;

use crate::client::SplunkClient;
use crate::endpoints::{self, CreateJobOptions};
use crate::error::Result;
use crate::models::{Job, SearchRequest, SearchResult};
use crate::redact_query;

impl SplunkClient {
    /// Create a search job for `request` and return its sid.
    pub async fn submit(&self, token: &str, request: &SearchRequest) -> Result<String> {
        let options = CreateJobOptions::from(request);
        endpoints::create_job(&self.http, &self.base_url, token, request.query(), &options).await
    }

    /// Check the job's status under the client's poll policy until it is done.
    pub async fn poll_until_done(&self, sid: &str, token: &str) -> Result<Job> {
        endpoints::wait_for_job(&self.http, &self.base_url, token, sid, &self.poll_policy).await
    }

    /// Fetch the first page of results for a finished job.
    pub async fn fetch(&self, sid: &str, token: &str) -> Result<SearchResult> {
        let rows =
            endpoints::get_results(&self.http, &self.base_url, token, sid, self.results_page_size)
                .await?;
        Ok(SearchResult::new(sid, rows))
    }

    /// Run a search end to end: login, submit, poll, fetch.
    pub async fn run(&self, request: &SearchRequest) -> Result<SearchResult> {
        info!("Running search {}", redact_query(request.query()));

        let token = self.ensure_authenticated().await?;
        let token = token.expose_secret();

        let sid = self.submit(token, request).await?;
        let job = self.poll_until_done(&sid, token).await?;
        let result = self.fetch(&job.sid, token).await?;

        info!(sid = %result.job_id, rows = result.row_count, "Search finished");
        Ok(result)
    }
}

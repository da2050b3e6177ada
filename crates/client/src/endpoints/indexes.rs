//! Index listing endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{send_request_text, splunk_authorization};
use crate::error::{ClientError, Result};
use crate::models::{Index, IndexContent, SplunkResponse};

/// List every index visible to the token's user.
pub async fn list_indexes(client: &Client, base_url: &str, auth_token: &str) -> Result<Vec<Index>> {
    debug!("Listing indexes");

    let url = format!("{}/services/data/indexes", base_url);
    let builder = client
        .get(&url)
        .header("Authorization", splunk_authorization(auth_token))
        .query(&[("output_mode", "json"), ("count", "0")]);

    let body = send_request_text(builder)
        .await
        .map_err(|e| ClientError::Transport(e.to_string()))?;

    parse_indexes(&body)
}

/// Decode an index listing body.
pub fn parse_indexes(body: &str) -> Result<Vec<Index>> {
    let resp: SplunkResponse<IndexContent> = serde_json::from_str(body)
        .map_err(|e| ClientError::ResultParse(format!("Failed to parse index list: {}", e)))?;

    Ok(resp
        .entry
        .into_iter()
        .filter(|e| !e.name.is_empty())
        .map(|e| Index {
            name: e.name,
            total_event_count: e.content.total_event_count,
            current_db_size_mb: e.content.current_db_size_mb,
        })
        .collect())
}

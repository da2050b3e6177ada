//! MCP tool service for Splunk search.
//!
//! Provides `SplunkToolService` with three tools:
//! - `splunk_search`: run a search job to completion and render its rows
//! - `splunk_test`: log in and report the connection details
//! - `splunk_indexes`: list the indexes visible to the configured user
//!
//! Backend failures are returned as tool errors (`is_error = true`) and never
//! end the server.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use splunk_mcp_client::{SearchRequest, SplunkClient, redact_query};
use tracing::{info, warn};

use crate::format;

/// Request parameters for the `splunk_search` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SearchArgs {
    #[schemars(description = "Splunk search query (SPL)")]
    pub query: String,

    #[schemars(description = "Earliest time for search (default: -24h)")]
    #[serde(default)]
    pub earliest_time: Option<String>,

    #[schemars(description = "Latest time for search (default: now)")]
    #[serde(default)]
    pub latest_time: Option<String>,

    #[schemars(description = "Maximum number of results (default: 100)")]
    #[serde(default)]
    pub count: Option<u64>,
}

impl SearchArgs {
    fn to_request(&self) -> splunk_mcp_client::Result<SearchRequest> {
        SearchRequest::with_options(
            self.query.clone(),
            self.earliest_time.clone(),
            self.latest_time.clone(),
            self.count,
        )
    }
}

/// Tool text paired with whether it reports a failure.
type ToolText = std::result::Result<String, String>;

fn into_call_result(text: ToolText) -> CallToolResult {
    match text {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(text) => CallToolResult::error(vec![Content::text(text)]),
    }
}

/// MCP server handler backed by one shared [`SplunkClient`].
#[derive(Clone)]
pub struct SplunkToolService {
    client: Arc<SplunkClient>,
    tool_router: ToolRouter<SplunkToolService>,
}

#[tool_router]
impl SplunkToolService {
    pub fn new(client: Arc<SplunkClient>) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Search Splunk logs and data")]
    async fn splunk_search(
        &self,
        Parameters(args): Parameters<SearchArgs>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        Ok(into_call_result(self.search_text(&args).await))
    }

    #[tool(description = "Test Splunk connection and authentication")]
    async fn splunk_test(&self) -> Result<CallToolResult, rmcp::ErrorData> {
        Ok(into_call_result(self.test_text().await))
    }

    #[tool(description = "List available Splunk indexes")]
    async fn splunk_indexes(&self) -> Result<CallToolResult, rmcp::ErrorData> {
        Ok(into_call_result(self.indexes_text().await))
    }
}

impl SplunkToolService {
    async fn search_text(&self, args: &SearchArgs) -> ToolText {
        info!("splunk_search called with query {}", redact_query(&args.query));

        let request = args
            .to_request()
            .map_err(|e| format::render_search_error(&e))?;

        match self.client.run(&request).await {
            Ok(result) => {
                info!(
                    "Search job {} returned {} rows",
                    result.job_id, result.row_count
                );
                Ok(format::render_search(&args.query, &result))
            }
            Err(e) => {
                warn!("splunk_search failed ({}): {}", e.kind(), e);
                Err(format::render_search_error(&e))
            }
        }
    }

    async fn test_text(&self) -> ToolText {
        match self.client.test_connection().await {
            Ok(report) => Ok(format::render_connection(&report)),
            Err(e) => {
                warn!("splunk_test failed: {}", e);
                Err(format::render_connection_failure(
                    self.client.endpoint(),
                    self.client.session_manager().username(),
                    &e,
                ))
            }
        }
    }

    async fn indexes_text(&self) -> ToolText {
        match self.client.list_indexes().await {
            Ok(indexes) => Ok(format::render_indexes(&indexes)),
            Err(e) => {
                warn!("splunk_indexes failed ({}): {}", e.kind(), e);
                Err(format::render_error(&e))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for SplunkToolService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "splunk-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(format!(
                "Splunk search server for {}.\n\n\
                 Available tools:\n\
                 - splunk_search: Run an SPL query and return its results.\n\
                 - splunk_test: Check that the configured credentials can log in.\n\
                 - splunk_indexes: List the indexes the configured user can see.",
                self.client.endpoint()
            )),
            ..Default::default()
        }
    }
}

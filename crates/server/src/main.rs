//! Splunk MCP server - exposes Splunk search as MCP tools over stdio.
//!
//! Responsibilities:
//! - Load configuration from `.env`, the environment, and command-line flags.
//! - Build the shared search client and serve the tool set on stdin/stdout.
//!
//! Does NOT handle:
//! - The Splunk REST protocol (see `crates/client`).
//! - Tool output formatting (see `format`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values reach clap's env fallbacks.
//! - Logs go to stderr; stdout carries only the JSON-RPC stream.

mod args;
mod format;
mod tools;

use std::sync::Arc;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use rmcp::ServiceExt;
use splunk_mcp_client::SplunkClient;
use splunk_mcp_config::ConfigLoader;
use tools::SplunkToolService;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_ansi(false).with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load environment")?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = cli
        .apply_overrides(loader.from_env().context("Invalid SPLUNK_* environment")?)
        .build()
        .context("Invalid configuration")?;

    let client = SplunkClient::builder()
        .from_config(&config)
        .poll_policy(cli.poll_policy())
        .build()
        .context("Failed to build Splunk client")?;

    tracing::info!(
        "Serving Splunk tools for {} as {}",
        config.connection.endpoint,
        config.credentials.username
    );

    let service = SplunkToolService::new(Arc::new(client));
    let server = service
        .serve(rmcp::transport::io::stdio())
        .await
        .context("Failed to start MCP server")?;

    server.waiting().await.context("MCP server error")?;

    tracing::info!("MCP server shutting down");
    Ok(())
}

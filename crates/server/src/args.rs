//! Command-line arguments for the MCP server.
//!
//! Responsibilities:
//! - Define the flags that override the `SPLUNK_*` environment.
//! - Fold parsed flags into a [`ConfigLoader`] and a [`PollPolicy`].
//!
//! Non-responsibilities:
//! - Does not read `.env` files (see `main`).
//! - Does not validate hosts or ports beyond clap's type parsing.

use std::time::Duration;

use clap::Parser;
use splunk_mcp_client::PollPolicy;
use splunk_mcp_config::constants::{DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_MS};
use splunk_mcp_config::{ConfigLoader, Scheme};

#[derive(Parser, Debug)]
#[command(name = "splunk-mcp")]
#[command(about = "MCP server exposing Splunk search over stdio", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Username for session authentication
    #[arg(short, long, env = "SPLUNK_USERNAME")]
    pub username: Option<String>,

    /// Password for session authentication
    #[arg(short, long, env = "SPLUNK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Connection scheme (http or https)
    #[arg(long, env = "SPLUNK_SCHEME")]
    pub scheme: Option<Scheme>,

    /// Splunk management host
    #[arg(long, env = "SPLUNK_HOST")]
    pub host: Option<String>,

    /// Splunk management port
    #[arg(long, env = "SPLUNK_PORT")]
    pub port: Option<u16>,

    /// Skip TLS certificate verification (for self-signed certificates).
    ///
    /// `SPLUNK_SKIP_VERIFY` is read by the config loader, not here.
    #[arg(long)]
    pub skip_verify: bool,

    /// Request timeout in seconds (`SPLUNK_TIMEOUT` is read by the config loader)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Delay between job status checks, in milliseconds
    #[arg(long, env = "SPLUNK_POLL_INTERVAL_MS", default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    pub poll_interval_ms: u64,

    /// Status checks before a search job is abandoned
    #[arg(long, env = "SPLUNK_MAX_POLL_ATTEMPTS", default_value_t = DEFAULT_MAX_POLL_ATTEMPTS)]
    pub max_poll_attempts: u32,

    /// Emit logs as JSON lines instead of plain text
    #[arg(long, env = "SPLUNK_MCP_LOG_JSON")]
    pub log_json: bool,
}

impl Cli {
    /// Apply every flag that was given on top of `loader`.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> ConfigLoader {
        if let Some(username) = &self.username {
            loader = loader.with_username(username.clone());
        }
        if let Some(password) = &self.password {
            loader = loader.with_password(password.clone());
        }
        if let Some(scheme) = self.scheme {
            loader = loader.with_scheme(scheme);
        }
        if let Some(host) = &self.host {
            loader = loader.with_host(host.clone());
        }
        if let Some(port) = self.port {
            loader = loader.with_port(port);
        }
        if self.skip_verify {
            loader = loader.with_skip_verify(true);
        }
        if let Some(secs) = self.timeout {
            loader = loader.with_timeout(Duration::from_secs(secs));
        }
        loader
    }

    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy::new(
            Duration::from_millis(self.poll_interval_ms),
            self.max_poll_attempts,
        )
    }
}

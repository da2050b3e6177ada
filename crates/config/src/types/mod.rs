//! Configuration type definitions for the Splunk MCP server.
//!
//! Responsibilities:
//! - Define the management endpoint (scheme, host, port) and its base URL form.
//! - Define login credentials with secret-safe password storage.
//! - Combine both into the `Config` handed to the client builder.
//!
//! Does NOT handle:
//! - Loading values from the environment (see `loader` module).
//! - Network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - Passwords use `secrecy::SecretString` and never appear in `Debug` output.
//! - `Config::default()` targets `http://localhost:8089` as `admin`.

mod auth;
mod connection;

pub use auth::Credentials;
pub use connection::{Config, ConnectionConfig, Endpoint, Scheme};

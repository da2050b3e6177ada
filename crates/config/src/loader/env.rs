//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse the `SPLUNK_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return ConfigError::InvalidValue naming the variable.

use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::Scheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse an environment value, mapping failures to `InvalidValue`.
fn parse_env<T: FromStr>(var: &str, value: &str, message: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: message.to_string(),
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(username) = env_var_or_none("SPLUNK_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("SPLUNK_PASSWORD") {
        loader.set_password(Some(password));
    }
    if let Some(scheme) = env_var_or_none("SPLUNK_SCHEME") {
        let scheme = scheme
            .parse::<Scheme>()
            .map_err(|message| ConfigError::InvalidValue {
                var: "SPLUNK_SCHEME".to_string(),
                message,
            })?;
        loader.set_scheme(Some(scheme));
    }
    if let Some(host) = env_var_or_none("SPLUNK_HOST") {
        loader.set_host(Some(host));
    }
    if let Some(port) = env_var_or_none("SPLUNK_PORT") {
        let port: u16 = parse_env("SPLUNK_PORT", &port, "must be a port number (1-65535)")?;
        loader.set_port(Some(port));
    }
    if let Some(skip) = env_var_or_none("SPLUNK_SKIP_VERIFY") {
        let skip: bool = parse_env("SPLUNK_SKIP_VERIFY", &skip, "must be true or false")?;
        loader.set_skip_verify(Some(skip));
    }
    if let Some(timeout) = env_var_or_none("SPLUNK_TIMEOUT") {
        let secs: u64 = parse_env("SPLUNK_TIMEOUT", &timeout, "must be a number")?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    Ok(())
}

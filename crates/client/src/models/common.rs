//! Envelope types shared by the Splunk management API responses.
//!
//! Covers the `entry[]` wrapper used by status and listing endpoints and the
//! `messages[]` body Splunk attaches to error responses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a message in a Splunk error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MessageType {
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "WARN")]
    Warn,
    #[serde(rename = "INFO")]
    Info,
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// `{"entry": [...]}` wrapper.
#[derive(Debug, Deserialize, Clone)]
pub struct SplunkResponse<T> {
    #[serde(default = "Vec::new")]
    pub entry: Vec<Entry<T>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Entry<T> {
    #[serde(default)]
    pub name: String,
    pub content: T,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SplunkMessage {
    #[serde(rename = "type", default)]
    pub message_type: MessageType,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SplunkMessages {
    pub messages: Vec<SplunkMessage>,
}

impl SplunkMessages {
    /// Join every message as `TYPE: text`, separated by `; `.
    pub fn summary(&self) -> String {
        self.messages
            .iter()
            .map(|msg| format!("{}: {}", msg.message_type, msg.text))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

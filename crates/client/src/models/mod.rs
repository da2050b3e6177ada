//! Data models for Splunk API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here.

pub mod common;
pub mod indexes;
pub mod jobs;
pub mod search;

pub use common::{Entry, MessageType, SplunkMessage, SplunkMessages, SplunkResponse};
pub use indexes::{Index, IndexContent};
pub use jobs::JobStatus;
pub use search::{Job, Row, SearchRequest, SearchResult};

//! REST API endpoint implementations.
//!
//! Free functions taking `(client, base_url, auth_token, ...)`; none of them
//! hold state.

mod auth;
mod indexes;
mod request;
pub mod search;
pub mod url_encoding;

pub use auth::login;
pub use indexes::{list_indexes, parse_indexes};
pub use request::{RequestFailure, send_request, send_request_text, splunk_authorization};
pub use search::{
    CreateJobOptions, PollPolicy, WireFormat, create_job, get_job_status, get_results,
    wait_for_job,
};
pub use url_encoding::encode_path_segment;

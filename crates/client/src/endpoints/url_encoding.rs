//! Percent-encoding for job ids placed in URL paths.
//!
//! Search ids are opaque strings chosen by the backend. Scheduled and
//! real-time searches produce ids such as `scheduler__admin__search__RMD5_at_1700000000_42`
//! or `rt_1700000000.7`, but nothing stops a proxy or a future version from
//! returning characters with URL meaning. Each sid is therefore encoded as a
//! single path segment before it is spliced into `/services/search/jobs/{sid}`.
//!
//! # Example
//!
//! ```
//! use splunk_mcp_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("a/b"), "a%2Fb");
//! assert_eq!(encode_path_segment("1700000000.42"), "1700000000.42");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Bytes that must not appear raw inside one path segment.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a job id (or any other value) for use as one path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

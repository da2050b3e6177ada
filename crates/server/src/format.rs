//! Plain-text rendering of tool results.
//!
//! Responsibilities:
//! - Turn search results, connection reports, and index lists into the text
//!   blocks returned to the MCP caller.
//! - Render failures with enough context for the caller to act on them.
//!
//! Does NOT handle:
//! - Deciding whether a result is an error (see `tools`).
//!
//! Invariants:
//! - At most [`MAX_DISPLAYED_ROWS`] rows are rendered; the rest are counted.
//! - Splunk bucket bookkeeping fields (`_bkt`, `_cd`) and empty values are
//!   never rendered.

use std::fmt::Write;

use serde_json::Value;
use splunk_mcp_client::{ClientError, ConnectionReport, Index, Row, SearchResult};
use splunk_mcp_config::Endpoint;

/// Rows shown in full before the remainder is summarized.
pub const MAX_DISPLAYED_ROWS: usize = 10;

const HIDDEN_FIELDS: [&str; 2] = ["_bkt", "_cd"];

pub fn render_search(query: &str, result: &SearchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Splunk Search Results for: {}", query);
    let _ = writeln!(out, "Job SID: {}", result.job_id);
    let _ = writeln!(out, "Result Count: {}", result.row_count);
    out.push('\n');

    if result.is_empty() {
        let _ = writeln!(out, "No results found for query: {}", query);
        return out;
    }

    for (index, row) in result.rows.iter().take(MAX_DISPLAYED_ROWS).enumerate() {
        let _ = writeln!(out, "Result {}:", index + 1);
        render_row(&mut out, row);
        out.push('\n');
    }

    if result.rows.len() > MAX_DISPLAYED_ROWS {
        let _ = writeln!(
            out,
            "... and {} more results",
            result.rows.len() - MAX_DISPLAYED_ROWS
        );
    }
    out
}

fn render_row(out: &mut String, row: &Row) {
    for (key, value) in row {
        if HIDDEN_FIELDS.contains(&key.as_str()) {
            continue;
        }
        if let Some(text) = display_value(value) {
            let _ = writeln!(out, "  {}: {}", key, text);
        }
    }
}

/// Text for a field value, or `None` when the value is empty.
///
/// Multivalue fields are joined with commas.
fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

pub fn render_search_error(err: &ClientError) -> String {
    format!(
        "Search Error: {}\n\n\
         Troubleshooting tips:\n\
         - Check if the index exists\n\
         - Verify search syntax\n\
         - Ensure time range contains data\n\
         - Check Splunk permissions",
        err
    )
}

pub fn render_connection(report: &ConnectionReport) -> String {
    format!(
        "Splunk Connection Test Results:\n\
         ✅ Login successful\n\
         ✅ Session key obtained: {}\n\
         ✅ Host: {}\n\
         ✅ Username: {}\n\
         ✅ Scheme: {}\n\
         \n\
         Connection is working properly!",
        report.token_preview,
        report.endpoint,
        report.username,
        report.scheme()
    )
}

pub fn render_connection_failure(endpoint: &Endpoint, username: &str, err: &ClientError) -> String {
    format!(
        "Splunk Connection Test Failed:\n\
         ❌ Error: {}\n\
         ❌ Host: {}\n\
         ❌ Username: {}\n\
         ❌ Scheme: {}\n\
         \n\
         Please check your Splunk configuration and credentials.",
        err, endpoint, username, endpoint.scheme
    )
}

pub fn render_indexes(indexes: &[Index]) -> String {
    let names: Vec<&str> = indexes.iter().map(|index| index.name.as_str()).collect();
    format!("Available Splunk Indexes:\n{}", names.join("\n"))
}

pub fn render_error(err: &ClientError) -> String {
    format!("Error: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use splunk_mcp_config::Scheme;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => panic!("row fixtures must be objects"),
        }
    }

    #[test]
    fn test_render_search_hides_bucket_fields_and_empty_values() {
        let result = SearchResult::new(
            "1700000000.42",
            vec![row(json!({
                "_bkt": "main~12~ABC",
                "_cd": "12:345",
                "host": "web-01",
                "status": "",
                "bytes": 0,
                "tag": ["web", "prod"],
            }))],
        );

        let text = render_search("index=main", &result);

        assert!(text.starts_with(
            "Splunk Search Results for: index=main\nJob SID: 1700000000.42\nResult Count: 1\n\n"
        ));
        assert!(text.contains("Result 1:\n"));
        assert!(text.contains("  host: web-01\n"));
        assert!(text.contains("  tag: web,prod\n"));
        assert!(!text.contains("_bkt"));
        assert!(!text.contains("_cd"));
        assert!(!text.contains("status"));
        assert!(!text.contains("bytes"));
    }

    #[test]
    fn test_render_search_truncates_after_ten_rows() {
        let rows = (0..13).map(|i| row(json!({ "n": i + 1 }))).collect();
        let result = SearchResult::new("sid", rows);

        let text = render_search("q", &result);

        assert!(text.contains("Result 10:\n  n: 10\n"));
        assert!(!text.contains("Result 11:"));
        assert!(text.ends_with("... and 3 more results\n"));
    }

    #[test]
    fn test_render_empty_search() {
        let result = SearchResult::new("sid", Vec::new());
        let text = render_search("index=nothing", &result);

        assert!(text.contains("Result Count: 0\n"));
        assert!(text.ends_with("No results found for query: index=nothing\n"));
    }

    #[test]
    fn test_render_search_error_names_stage() {
        let err = ClientError::PollTimeout {
            sid: "abc".to_string(),
            attempts: 30,
        };
        let text = render_search_error(&err);

        assert!(text.starts_with(
            "Search Error: Search job abc did not complete after 30 status checks\n\n"
        ));
        assert!(text.ends_with("- Check Splunk permissions"));
    }

    #[test]
    fn test_render_connection() {
        let report = ConnectionReport {
            endpoint: Endpoint::new(Scheme::Https, "splunk.local", 8089),
            username: "admin".to_string(),
            token_preview: "0123456789abcdefghij...".to_string(),
        };

        let text = render_connection(&report);

        assert!(text.contains("Session key obtained: 0123456789abcdefghij...\n"));
        assert!(text.contains("Host: splunk.local:8089\n"));
        assert!(text.contains("Username: admin\n"));
        assert!(text.contains("Scheme: https\n"));
    }

    #[test]
    fn test_render_connection_failure() {
        let endpoint = Endpoint::new(Scheme::Http, "localhost", 8089);
        let err = ClientError::Authentication("HTTP 401".to_string());

        let text = render_connection_failure(&endpoint, "admin", &err);

        assert!(text.contains("Error: Authentication failed: HTTP 401\n"));
        assert!(text.contains("Host: localhost:8089\n"));
        assert!(text.ends_with("Please check your Splunk configuration and credentials."));
    }

    #[test]
    fn test_render_indexes() {
        let indexes = vec![
            Index {
                name: "_internal".to_string(),
                total_event_count: None,
                current_db_size_mb: None,
            },
            Index {
                name: "main".to_string(),
                total_event_count: Some(10),
                current_db_size_mb: Some(1),
            },
        ];

        assert_eq!(
            render_indexes(&indexes),
            "Available Splunk Indexes:\n_internal\nmain"
        );
    }
}

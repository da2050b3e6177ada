//! Testing utilities for Splunk client tests.
//!
//! Helpers for loading response fixtures. Available when running tests or when
//! the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use splunk_mcp_client::testing::{load_fixture, load_fixture_text};
//!
//! let status = load_fixture("search/job_status_done.json");
//! let created = load_fixture_text("search/create_job.xml");
//! ```

use std::path::{Path, PathBuf};

fn fixture_path(fixture_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a fixture file verbatim (for XML or deliberately malformed bodies).
///
/// # Panics
/// If the fixture file cannot be read.
pub fn load_fixture_text(fixture_path_in_dir: &str) -> String {
    let full_path = fixture_path(fixture_path_in_dir);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path_in_dir: &str) -> serde_json::Value {
    let content = load_fixture_text(fixture_path_in_dir);
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

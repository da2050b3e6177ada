//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and defaults.
//! - Test environment variable handling and precedence.
//! - Test validation of endpoint and timeout values.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every `SPLUNK_*` variable the loader reads, cleared for isolation.
pub const CLEARED_ENV: [(&str, Option<&str>); 7] = [
    ("SPLUNK_USERNAME", None),
    ("SPLUNK_PASSWORD", None),
    ("SPLUNK_SCHEME", None),
    ("SPLUNK_HOST", None),
    ("SPLUNK_PORT", None),
    ("SPLUNK_SKIP_VERIFY", None),
    ("SPLUNK_TIMEOUT", None),
];

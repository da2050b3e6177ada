//! Index listing model.

use serde::{Deserialize, Serialize};

/// Content of one `entry[]` element from `GET /services/data/indexes`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct IndexContent {
    #[serde(
        rename = "totalEventCount",
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub total_event_count: Option<u64>,
    #[serde(
        rename = "currentDBSizeMB",
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub current_db_size_mb: Option<u64>,
    #[serde(default)]
    pub disabled: Option<bool>,
}

/// An index visible to the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Index {
    pub name: String,
    pub total_event_count: Option<u64>,
    pub current_db_size_mb: Option<u64>,
}

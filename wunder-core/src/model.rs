use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One complete fetch result: a timestamp plus the two raw API payloads.
///
/// Produced exactly once per (non-cached) run and serialized opaquely into
/// the cache file. The payloads stay untyped nested maps; only the display
/// layer picks fields out of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// When this report was fetched.
    pub datetime: DateTime<Utc>,
    pub conditions: serde_json::Value,
    pub forecast: serde_json::Value,
}

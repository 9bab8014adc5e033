// Aggregate run statistics

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Counters and timing for one run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub suites: usize,
    pub tests: usize,
    pub passes: usize,
    pub pending: usize,
    pub failures: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    pub duration: u64,
}

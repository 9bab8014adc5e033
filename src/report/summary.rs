// Final summary shapes - the serialized output of one run

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::format::{clean, error_json};
use crate::state::{RunLog, RunStats, TestHandle, TestRecord};

/// Formatted test record as it appears in the summary
#[derive(Debug, Clone, Serialize)]
pub struct TestRecordJson {
    pub title: String,
    #[serde(rename = "fullTitle")]
    pub full_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    pub err: Map<String, Value>,
    pub code: String,
}

impl TestRecordJson {
    /// Format one record
    ///
    /// Field defects stay local to the record: a missing body formats as an
    /// empty code string, an unserializable error as an empty object.
    pub fn from_record(record: &TestRecord) -> Self {
        let err = match record.err.as_ref() {
            Some(props) => error_json(props).unwrap_or_else(|err| {
                warn!("dropping unserializable error on '{}': {}", record.full_title, err);
                Map::new()
            }),
            None => Map::new(),
        };

        Self {
            title: record.title.clone(),
            full_title: record.full_title.clone(),
            duration: record.duration_ms,
            err,
            code: record.body.as_deref().map(clean).unwrap_or_default(),
        }
    }
}

/// Final aggregated report for one complete run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub stats: RunStats,
    pub tests: Vec<TestRecordJson>,
    pub pending: Vec<TestRecordJson>,
    pub failures: Vec<TestRecordJson>,
    pub passes: Vec<TestRecordJson>,
}

impl RunSummary {
    /// Build the summary from an accumulated run log
    pub fn from_log(log: &RunLog) -> Self {
        Self {
            stats: log.stats().clone(),
            tests: format_list(log.tests()),
            pending: format_list(log.pending()),
            failures: format_list(log.failures()),
            passes: format_list(log.passes()),
        }
    }
}

fn format_list(records: &[TestHandle]) -> Vec<TestRecordJson> {
    records
        .iter()
        .map(|handle| TestRecordJson::from_record(&handle.borrow()))
        .collect()
}

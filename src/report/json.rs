// JSON reporter - collects lifecycle events and emits one summary

use anyhow::Result;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::warn;

use super::RunListener;
use super::sink::{FileSink, RunSink, StdoutSink};
use super::summary::RunSummary;
use crate::state::{RunLog, SuiteRecord, TestHandle};

/// JSON reporter
///
/// Accumulates one run's lifecycle events and, when the run finishes, builds
/// the summary and hands it to the sink exactly once. The sink is a plain
/// construction parameter; nothing is shared between reporter instances.
pub struct JsonReporter {
    log: RunLog,
    sink: Box<dyn RunSink>,
    emitted: bool,
}

impl JsonReporter {
    /// Create a reporter writing indented JSON to standard output
    pub fn new() -> Self {
        Self::with_sink(StdoutSink)
    }

    /// Create a reporter with a caller-supplied sink
    pub fn with_sink<S: RunSink + 'static>(sink: S) -> Self {
        Self {
            log: RunLog::new(),
            sink: Box::new(sink),
            emitted: false,
        }
    }

    /// Create a reporter writing the summary to a file
    pub fn to_file(output_path: impl Into<PathBuf>) -> Self {
        Self::with_sink(FileSink::new(output_path))
    }

    /// Get the accumulated run log
    pub fn log(&self) -> &RunLog {
        &self.log
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RunListener for JsonReporter {
    fn on_run_begin(&mut self) {
        self.log.begin();
    }

    fn on_suite_begin(&mut self, suite: &SuiteRecord) {
        self.log.enter_suite(suite);
    }

    fn on_test_end(&mut self, test: &TestHandle) {
        self.log.record_test(test);
    }

    fn on_test_pass(&mut self, test: &TestHandle) {
        self.log.record_pass(test);
    }

    fn on_test_fail(&mut self, test: &TestHandle, err: &Map<String, Value>) {
        self.log.record_fail(test, err);
    }

    fn on_test_pending(&mut self, test: &TestHandle) {
        self.log.record_pending(test);
    }

    fn on_run_end(&mut self) -> Result<()> {
        if self.emitted {
            warn!("run already completed; ignoring duplicate completion");
            return Ok(());
        }

        self.log.finish();
        let summary = RunSummary::from_log(&self.log);
        // The sink is never invoked twice, even when accept fails.
        self.emitted = true;
        self.sink.accept(&summary)
    }
}

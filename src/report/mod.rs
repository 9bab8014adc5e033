// Report module - run lifecycle contract and reporters

pub mod json;
pub mod sink;
pub mod summary;

use crate::event::RunEvent;
use crate::state::{SuiteRecord, TestHandle};
use anyhow::Result;
use serde_json::{Map, Value};

pub use json::JsonReporter;
pub use sink::{FileSink, RunSink, StdoutSink};
pub use summary::{RunSummary, TestRecordJson};

/// Run lifecycle listener
///
/// Every notification except run completion has a default no-op body, so a
/// listener may handle any subset. The host dispatches notifications
/// synchronously and in-order; handlers run to completion before the next
/// notification fires.
pub trait RunListener {
    /// Called when the run starts
    fn on_run_begin(&mut self) {}

    /// Called when a suite is entered
    fn on_suite_begin(&mut self, _suite: &SuiteRecord) {}

    /// Called when a test finishes, regardless of outcome
    fn on_test_end(&mut self, _test: &TestHandle) {}

    /// Called when a test passes
    fn on_test_pass(&mut self, _test: &TestHandle) {}

    /// Called when a test fails
    fn on_test_fail(&mut self, _test: &TestHandle, _err: &Map<String, Value>) {}

    /// Called when a test is skipped as pending
    fn on_test_pending(&mut self, _test: &TestHandle) {}

    /// Called when the entire run finishes
    fn on_run_end(&mut self) -> Result<()>;

    /// Dispatch a single event to the matching handler
    fn apply(&mut self, event: &RunEvent) -> Result<()> {
        match event {
            RunEvent::RunBegin => self.on_run_begin(),
            RunEvent::SuiteBegin { suite } => self.on_suite_begin(suite),
            RunEvent::TestEnd { test } => self.on_test_end(test),
            RunEvent::TestPass { test } => self.on_test_pass(test),
            RunEvent::TestFail { test, err } => self.on_test_fail(test, err),
            RunEvent::TestPending { test } => self.on_test_pending(test),
            RunEvent::RunEnd => return self.on_run_end(),
        }
        Ok(())
    }
}

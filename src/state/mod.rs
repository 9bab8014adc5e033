// State module - per-run result accumulation
// Counters and the four ordered category lists for one run

pub mod record;
pub mod stats;

pub use record::{DEFAULT_SLOW_MS, Speed, SuiteRecord, TestHandle, TestRecord};
pub use stats::RunStats;

use std::rc::Rc;

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::warn;

/// Accumulated results for one run
///
/// Holds shared handles, not copies: a test recorded in the full list and in
/// a category list is the same record, so a failure attached after the fact
/// is visible through both.
#[derive(Debug, Default)]
pub struct RunLog {
    stats: RunStats,
    tests: Vec<TestHandle>,
    pending: Vec<TestHandle>,
    failures: Vec<TestHandle>,
    passes: Vec<TestHandle>,
}

impl RunLog {
    /// Create an empty run log
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the run start time
    pub fn begin(&mut self) {
        self.stats.start = Some(Utc::now());
    }

    /// Count a suite, unless it is the implicit root container
    pub fn enter_suite(&mut self, suite: &SuiteRecord) {
        if !suite.root {
            self.stats.suites += 1;
        }
    }

    /// Record a finished test, regardless of outcome
    pub fn record_test(&mut self, test: &TestHandle) {
        self.tests.push(Rc::clone(test));
        self.stats.tests += 1;
    }

    /// Record a pass and attach the speed class to the record
    pub fn record_pass(&mut self, test: &TestHandle) {
        {
            let mut record = test.borrow_mut();
            let duration = record.duration_ms.unwrap_or(0);
            record.speed = Some(Speed::classify(duration, record.slow_ms));
        }
        self.passes.push(Rc::clone(test));
        self.stats.passes += 1;
    }

    /// Record a failure and attach the raw error properties to the record
    pub fn record_fail(&mut self, test: &TestHandle, err: &Map<String, Value>) {
        test.borrow_mut().err = Some(err.clone());
        self.failures.push(Rc::clone(test));
        self.stats.failures += 1;
    }

    /// Record a pending test
    pub fn record_pending(&mut self, test: &TestHandle) {
        self.pending.push(Rc::clone(test));
        self.stats.pending += 1;
    }

    /// Mark the run end time and compute the elapsed duration
    pub fn finish(&mut self) {
        let end = Utc::now();
        let start = match self.stats.start {
            Some(start) => start,
            None => {
                warn!("run finished without a recorded start; duration will be zero");
                end
            }
        };
        self.stats.start = Some(start);
        self.stats.end = Some(end);
        self.stats.duration = (end - start).num_milliseconds().max(0) as u64;
    }

    /// Get the aggregate statistics
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Get all finished tests
    pub fn tests(&self) -> &[TestHandle] {
        &self.tests
    }

    /// Get pending tests
    pub fn pending(&self) -> &[TestHandle] {
        &self.pending
    }

    /// Get failing tests
    pub fn failures(&self) -> &[TestHandle] {
        &self.failures
    }

    /// Get passing tests
    pub fn passes(&self) -> &[TestHandle] {
        &self.passes
    }

    /// Get total finished tests
    pub fn total(&self) -> usize {
        self.stats.tests
    }

    /// Check if no test failed
    pub fn all_passed(&self) -> bool {
        self.stats.failures == 0
    }
}

// Run lifecycle events
// The pump-style equivalent of the RunListener trait, for hosts that
// forward an ordered event stream instead of calling handlers directly.

use crate::report::RunListener;
use crate::state::{SuiteRecord, TestHandle};
use anyhow::Result;
use serde_json::{Map, Value};

/// Lifecycle notifications emitted by a test runner
#[derive(Debug, Clone)]
pub enum RunEvent {
    /// The run started
    RunBegin,
    /// A suite was entered
    SuiteBegin { suite: SuiteRecord },
    /// A test finished, regardless of outcome
    TestEnd { test: TestHandle },
    /// A test passed
    TestPass { test: TestHandle },
    /// A test failed with the given error properties
    TestFail {
        test: TestHandle,
        err: Map<String, Value>,
    },
    /// A test was skipped as pending
    TestPending { test: TestHandle },
    /// The run finished
    RunEnd,
}

/// Feed an ordered event sequence into a listener
pub fn replay<L: RunListener + ?Sized>(listener: &mut L, events: &[RunEvent]) -> Result<()> {
    for event in events {
        listener.apply(event)?;
    }
    Ok(())
}

// Test and suite records observed from the host runner

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use serde_json::{Map, Value};

/// Slow threshold applied when the host does not configure one, in milliseconds
pub const DEFAULT_SLOW_MS: u64 = 75;

/// Shared handle to a test record
///
/// The run is single-threaded and dispatched in-order, so the reporter can
/// share records with the host without locking. The reporter mutates a record
/// in exactly two cases: attaching a late-arriving failure and attaching the
/// computed speed class.
pub type TestHandle = Rc<RefCell<TestRecord>>;

/// One observed test
#[derive(Debug, Clone)]
pub struct TestRecord {
    /// Own title, without ancestor context
    pub title: String,
    /// Fully qualified title as composed by the host
    pub full_title: String,
    /// Measured duration, absent if the test never ran
    pub duration_ms: Option<u64>,
    /// Configured slow threshold
    pub slow_ms: u64,
    /// Source text of the test body, if the host exposes it
    pub body: Option<String>,
    /// Raw error properties attached on failure
    pub err: Option<Map<String, Value>>,
    /// Speed class attached on pass
    pub speed: Option<Speed>,
}

impl TestRecord {
    /// Create a record with the default slow threshold
    pub fn new(title: impl Into<String>, full_title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            full_title: full_title.into(),
            duration_ms: None,
            slow_ms: DEFAULT_SLOW_MS,
            body: None,
            err: None,
            speed: None,
        }
    }

    /// Set the measured duration
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Set the slow threshold
    pub fn with_slow(mut self, slow_ms: u64) -> Self {
        self.slow_ms = slow_ms;
        self
    }

    /// Set the source text of the test body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Wrap the record into a shared handle
    pub fn into_handle(self) -> TestHandle {
        Rc::new(RefCell::new(self))
    }
}

/// One observed suite
#[derive(Debug, Clone)]
pub struct SuiteRecord {
    pub title: String,
    pub root: bool,
}

impl SuiteRecord {
    /// Create a named suite
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            root: false,
        }
    }

    /// The implicit root container, which is never counted
    pub fn root() -> Self {
        Self {
            title: String::new(),
            root: true,
        }
    }
}

/// Speed class of a passing test relative to its slow threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Fast,
    Medium,
    Slow,
}

impl Speed {
    /// Classify a duration against a slow threshold
    pub fn classify(duration_ms: u64, slow_ms: u64) -> Self {
        if duration_ms > slow_ms {
            Self::Slow
        } else if duration_ms > slow_ms / 2 {
            Self::Medium
        } else {
            Self::Fast
        }
    }
}

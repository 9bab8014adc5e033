pub mod event;
pub mod format;
pub mod logging;
pub mod report;
pub mod state;

pub use event::{RunEvent, replay};
pub use report::{JsonReporter, RunListener, RunSink, RunSummary};
pub use state::{RunLog, Speed, SuiteRecord, TestHandle, TestRecord};

// Sinks - where a finished run summary goes

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use super::RunSummary;

/// Receiver for the finished summary
///
/// Invoked exactly once per run. A failure propagates to the host untouched.
pub trait RunSink {
    fn accept(&mut self, summary: &RunSummary) -> Result<()>;
}

impl<F> RunSink for F
where
    F: FnMut(&RunSummary) -> Result<()>,
{
    fn accept(&mut self, summary: &RunSummary) -> Result<()> {
        self(summary)
    }
}

/// Default sink: indented JSON on standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl RunSink for StdoutSink {
    fn accept(&mut self, summary: &RunSummary) -> Result<()> {
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, summary)
            .context("Failed to serialize run summary to JSON")?;
        writeln!(stdout)?;
        Ok(())
    }
}

/// File sink: indented JSON written to a caller-given path
pub struct FileSink {
    output_path: PathBuf,
}

impl FileSink {
    /// Create a sink writing to the given path
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

impl RunSink for FileSink {
    fn accept(&mut self, summary: &RunSummary) -> Result<()> {
        let file = File::create(&self.output_path).with_context(|| {
            format!(
                "Failed to create JSON report file: {}",
                self.output_path.display()
            )
        })?;

        serde_json::to_writer_pretty(file, summary)
            .context("Failed to serialize run summary to JSON")?;

        Ok(())
    }
}

//! Destinations for result records
//!
//! Every successful operator invocation produces one `result: <value>` record.
//! Where that record ends up is decided by the `ResultSink` handed to the
//! registry at construction time.

use polish_types::Number;
use std::io::{self, Write};
use tracing::{info, warn};

/// Receives one record per successful operator invocation.
pub trait ResultSink: Send + Sync {
    /// Records the value produced by `operator`.
    fn record(&self, operator: &str, value: &Number);
}

/// Emits each record as a `tracing` INFO event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ResultSink for TracingSink {
    fn record(&self, operator: &str, value: &Number) {
        info!(operator, %value, "result: {}", value);
    }
}

/// Prints each record to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ResultSink for StdoutSink {
    fn record(&self, operator: &str, value: &Number) {
        if let Err(err) = write_record(&mut io::stdout().lock(), value) {
            warn!(operator, %value, error = %err, "Failed to write result record");
        }
    }
}

fn write_record(out: &mut impl Write, value: &Number) -> io::Result<()> {
    writeln!(out, "result: {value}")?;
    out.flush()
}

//! Append-only CSV trial trace.
//!
//! One row per measured trial, written in execution order:
//!
//! ```text
//! structure,operation,trial,time_ms,checksum
//! array,random_access,1,12.34,1048576
//! ```
//!
//! A trace is only valid if [`TraceWriter::finish`] ran; a partial file from
//! an aborted run must not be interpreted downstream.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const TRACE_HEADER: &str = "structure,operation,trial,time_ms,checksum";

/// One trial's worth of trace output.
#[derive(Debug, Clone)]
pub struct TraceRow<'a> {
    pub structure: &'a str,
    pub operation: &'a str,
    /// 1-based trial index.
    pub trial: usize,
    pub time_ms: f64,
    pub checksum: i64,
}

pub struct TraceWriter {
    writer: BufWriter<File>,
}

impl TraceWriter {
    /// Create (truncating) the trace file and write the fixed header.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        let mut writer = BufWriter::with_capacity(64 * 1024, file);
        writeln!(writer, "{TRACE_HEADER}")?;
        Ok(Self { writer })
    }

    pub fn record(&mut self, row: &TraceRow<'_>) -> io::Result<()> {
        writeln!(
            self.writer,
            "{},{},{},{:.2},{}",
            row.structure, row.operation, row.trial, row.time_ms, row.checksum
        )
    }

    /// Flush and close the sink. Consumes the writer so nothing can append
    /// after the trace is sealed.
    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

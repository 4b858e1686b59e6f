//! Batch driver: one independent request per control-file line.
//!
//! Each non-blank line holds the same flag grammar as a single run (without
//! a program name). A failing line is handed to the caller's reporter, which
//! writes it to the output stream, and the driver moves on; only a control
//! file that cannot be opened or has no lines at all is an error for the
//! batch.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::counter::run_request;
use crate::error::MadError;
use crate::options::Request;
use crate::Result;

/// A control-file line that did not produce a report.
#[derive(Debug)]
pub struct LineFailure {
    /// 1-based line number in the control file
    pub line: usize,
    /// What went wrong
    pub error: MadError,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Non-blank lines processed
    pub requests: usize,
    /// Lines that failed validation or analysis
    pub failures: Vec<LineFailure>,
}

impl BatchSummary {
    /// Lines whose request ran to completion.
    pub fn succeeded(&self) -> usize {
        self.requests - self.failures.len()
    }
}

/// Split a control-file line into flag tokens.
pub fn tokenize_line(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Plain `ERROR: <message>` line, the default batch reporter.
pub fn write_error<W: Write>(out: &mut W, err: &MadError) -> io::Result<()> {
    writeln!(out, "ERROR: {err}")
}

/// Run every request in the control file at `path`.
///
/// Reports go to `out`; each failing line is passed to `report` with the
/// same writer, so reports and errors stay in line order.
pub fn run_batch<W, F>(path: &Path, out: &mut W, mut report: F) -> Result<BatchSummary>
where
    W: Write,
    F: FnMut(&mut W, &MadError) -> io::Result<()>,
{
    let file = File::open(path).map_err(|source| MadError::CantOpenBatchFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let mut summary = BatchSummary::default();
    let mut raw = Vec::new();
    let mut line_no = 0;

    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&raw);
        let tokens = tokenize_line(&line);
        if tokens.is_empty() {
            continue;
        }
        summary.requests += 1;

        let outcome = Request::parse(&tokens).and_then(|request| run_request(&request, out));
        if let Err(error) = outcome {
            if error.is_validation() {
                log::warn!("batch line {line_no} rejected: {error}");
            } else {
                log::warn!("batch line {line_no} failed: {error}");
            }
            report(out, &error)?;
            summary.failures.push(LineFailure {
                line: line_no,
                error,
            });
        }
    }

    if line_no == 0 {
        return Err(MadError::BatchFileEmpty(path.to_path_buf()));
    }

    log::info!(
        "batch {}: {} requests, {} failed",
        path.display(),
        summary.requests,
        summary.failures.len()
    );
    Ok(summary)
}

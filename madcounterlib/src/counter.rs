//! High-level single-request API.
//!
//! Runs one validated [`Request`] end to end: open and check the input, open
//! the output sink, compute the requested artifacts, render the report.
//! All file handles are dropped before returning, on success or error.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::analysis::{open_input, Analysis};
use crate::error::MadError;
use crate::options::Request;
use crate::report::render;
use crate::Result;

/// Run `request`, writing the report to its output file or to `stdout`.
///
/// Nothing is written until the input has been opened and found non-empty
/// and the output file (if any) has been created.
///
/// # Example
///
/// ```rust
/// use madcounterlib::{run_request, AnalysisKind, Request};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let input = dir.path().join("in.txt");
/// fs::write(&input, "hello world hello\n").unwrap();
///
/// let request = Request::new(&input).with(AnalysisKind::LongestWord);
/// let mut out = Vec::new();
/// run_request(&request, &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Longest Word is 5 characters long:\n\thello\n\tworld\n"
/// );
/// ```
pub fn run_request<W: Write>(request: &Request, stdout: &mut W) -> Result<()> {
    log::info!(
        "analyzing {} ({} sections)",
        request.input.display(),
        request.kinds().len()
    );

    let mut input = open_input(&request.input)?;

    match &request.output {
        Some(path) => {
            let mut sink = create_output(path)?;
            let analysis = Analysis::compute(&mut input, request)?;
            render(&mut sink, request, &analysis)?;
            sink.flush()?;
        }
        None => {
            let analysis = Analysis::compute(&mut input, request)?;
            render(stdout, request, &analysis)?;
            stdout.flush()?;
        }
    }

    log::info!("finished {}", request.input.display());
    Ok(())
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| MadError::CantOpenOutputFile {
            path: path.to_path_buf(),
            source,
        })
}

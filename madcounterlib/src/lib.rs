//! # madcounterlib
//!
//! Character, word and line statistics for plain-text files.
//!
//! ## Overview
//!
//! For one input file the library can report:
//!
//! - **Characters**: count and first byte offset of every ASCII value present
//! - **Words**: frequency and first appearance of every whitespace-delimited word
//! - **Lines**: frequency and first appearance of every distinct line
//! - **Longest word / line**: the maximum length and every token of that length
//!
//! Words and lines are kept in ascending byte-wise order, so reports list them
//! alphabetically. Report sections come out in the order they were requested.
//!
//! ## Limitations
//!
//! Character analysis covers the 7-bit range only. A byte above 127 stops it
//! with [`MadError::NonAsciiByte`]. Word and line analysis treat tokens as raw
//! bytes and accept any input.
//!
//! ## Example
//!
//! ```rust
//! use madcounterlib::{run_request, AnalysisKind, Request};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let input = dir.path().join("notes.txt");
//! fs::write(&input, "hello world hello\n").unwrap();
//!
//! // Same as `-f notes.txt -w`
//! let request = Request::parse(["-f", input.to_str().unwrap(), "-w"]).unwrap();
//!
//! let mut out = Vec::new();
//! run_request(&request, &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Total Number of Words: 3\n\
//!      Total Unique Words: 2\n\
//!      \n\
//!      Word: hello, Freq: 2, Initial Position: 0\n\
//!      Word: world, Freq: 1, Initial Position: 1\n"
//! );
//! ```

pub mod analysis;
pub mod batch;
pub mod counter;
pub mod error;
pub mod longest;
pub mod options;
pub mod report;
pub mod tally;
pub mod tokens;

pub use analysis::{analyze, open_input, Analysis};
pub use batch::{run_batch, tokenize_line, write_error, BatchSummary, LineFailure};
pub use counter::run_request;
pub use error::{MadError, USAGE};
pub use longest::{longest, Longest};
pub use options::{AnalysisKind, Request};
pub use report::render;
pub use tally::{CharCount, CharTally};
pub use tokens::{
    LineCollection, Lines, TokenCollection, TokenEntry, TokenKind, WordCollection, Words,
};

/// Result type for madcounterlib operations
pub type Result<T> = std::result::Result<T, MadError>;

//! Error types for madcounterlib
//!
//! The `Display` text of every variant is the message shown to users; the
//! CLI prefixes it with `ERROR: `. Underlying I/O errors are kept as sources
//! so they can be logged without changing that text.

use std::path::PathBuf;
use thiserror::Error;

/// Usage text printed when too few arguments are supplied.
pub const USAGE: &str = "USAGE:\n\tmadcounter -f <input file> -o <output file> -c -w -l -Lw -Ll\n\t\tOR\n\tmadcounter -B <batch file>";

/// Errors that can occur while validating or running an analysis request
#[derive(Error, Debug)]
pub enum MadError {
    /// Too few arguments to form any request
    #[error("{}", USAGE)]
    Usage,

    /// A token that is neither a known flag nor a path argument
    #[error("Invalid Flag Types")]
    InvalidFlag(String),

    /// `-f` missing, or not followed by a path
    #[error("No Input File Provided")]
    NoInputFile,

    /// Input file could not be opened
    #[error("Can't open input file")]
    CantOpenInputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file has zero bytes
    #[error("Input File Empty")]
    InputFileEmpty(PathBuf),

    /// `-o` not followed by a path
    #[error("No Output File Provided")]
    NoOutputFile,

    /// Output file could not be created
    #[error("Can't open output file")]
    CantOpenOutputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Batch control file could not be opened
    #[error("Can't open batch file")]
    CantOpenBatchFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Batch control file has no lines at all
    #[error("Batch File Empty")]
    BatchFileEmpty(PathBuf),

    /// Character analysis only covers the 7-bit range
    #[error("Input contains non-ASCII byte 0x{value:02X} at position {offset}")]
    NonAsciiByte { offset: u64, value: u8 },

    /// IO error on an already-open stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MadError {
    /// Errors detected before any file is touched.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MadError::Usage
                | MadError::InvalidFlag(_)
                | MadError::NoInputFile
                | MadError::NoOutputFile
        )
    }
}

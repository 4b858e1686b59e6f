//! Per-request analysis artifacts.
//!
//! Every artifact is built by its own full pass over the input, starting at
//! byte offset zero. Passes never share a cursor.

use std::fs::File;
use std::io::{self, Read, Seek};
use std::path::Path;

use crate::error::MadError;
use crate::options::{AnalysisKind, Request};
use crate::tally::CharTally;
use crate::tokens::{LineCollection, WordCollection};
use crate::Result;

/// Everything computed for one request.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Present if `-c` was requested
    pub chars: Option<CharTally>,
    /// Present if `-w` or `-Lw` was requested
    pub words: Option<WordCollection>,
    /// Present if `-l` or `-Ll` was requested
    pub lines: Option<LineCollection>,
}

impl Analysis {
    /// Run the passes `request` needs over a seekable source.
    pub fn compute<R: Read + Seek>(source: &mut R, request: &Request) -> Result<Self> {
        let mut analysis = Analysis::default();

        if request.wants(AnalysisKind::Characters) {
            source.rewind()?;
            analysis.chars = Some(CharTally::from_reader(&mut *source)?);
        }
        if request.needs_words() {
            source.rewind()?;
            analysis.words = Some(WordCollection::from_reader(&mut *source)?);
        }
        if request.needs_lines() {
            source.rewind()?;
            analysis.lines = Some(LineCollection::from_reader(&mut *source)?);
        }

        Ok(analysis)
    }
}

/// Open an input file for analysis, rejecting directories and empty files.
pub fn open_input(path: &Path) -> Result<File> {
    let cant_open = |source| MadError::CantOpenInputFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(cant_open)?;
    let metadata = file.metadata().map_err(cant_open)?;
    if metadata.is_dir() {
        return Err(cant_open(io::Error::new(
            io::ErrorKind::InvalidInput,
            "input path is a directory",
        )));
    }
    if metadata.len() == 0 {
        return Err(MadError::InputFileEmpty(path.to_path_buf()));
    }

    Ok(file)
}

/// Open the input of `request` and compute its analysis.
pub fn analyze(request: &Request) -> Result<Analysis> {
    let mut file = open_input(&request.input)?;
    Analysis::compute(&mut file, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_only_requested_artifacts_are_built() {
        let mut source = Cursor::new(b"one two\nthree\n".to_vec());

        let request = Request::new("unused").with(AnalysisKind::LongestWord);
        let analysis = Analysis::compute(&mut source, &request).unwrap();
        assert!(analysis.chars.is_none());
        assert!(analysis.lines.is_none());
        assert_eq!(analysis.words.unwrap().total_count(), 3);
    }

    #[test]
    fn test_each_pass_starts_at_offset_zero() {
        let mut source = Cursor::new(b"alpha beta\ngamma\n".to_vec());
        // A cursor left mid-stream must not leak into the passes.
        source.set_position(7);

        let request = Request::new("unused")
            .with(AnalysisKind::Lines)
            .with(AnalysisKind::Characters)
            .with(AnalysisKind::Words);
        let analysis = Analysis::compute(&mut source, &request).unwrap();

        assert_eq!(analysis.chars.unwrap().total_count(), 17);
        assert_eq!(analysis.words.unwrap().total_count(), 3);
        assert_eq!(analysis.lines.unwrap().total_count(), 2);
    }

    #[test]
    fn test_open_input_missing_file() {
        let temp = tempdir().unwrap();
        let err = open_input(&temp.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, MadError::CantOpenInputFile { .. }));
    }

    #[test]
    fn test_open_input_directory() {
        let temp = tempdir().unwrap();
        let err = open_input(temp.path()).unwrap_err();
        assert!(matches!(err, MadError::CantOpenInputFile { .. }));
        assert_eq!(err.to_string(), "Can't open input file");
    }

    #[test]
    fn test_open_input_empty_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let err = open_input(&path).unwrap_err();
        assert!(matches!(err, MadError::InputFileEmpty(_)));
    }

    #[test]
    fn test_analyze_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("in.txt");
        fs::write(&path, "a b a\n").unwrap();

        let request = Request::new(&path).with(AnalysisKind::Words);
        let analysis = analyze(&request).unwrap();
        let words = analysis.words.unwrap();
        assert_eq!(words.unique_count(), 2);
        assert_eq!(words.get(b"a").unwrap().frequency, 2);
    }
}

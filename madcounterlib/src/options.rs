//! Request model: which analyses to run, on which file, in which order.
//!
//! A [`Request`] is built either from flag tokens ([`Request::parse`]) or
//! programmatically through its builder methods. The order in which analysis
//! kinds are first requested is the order their report sections are emitted.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::MadError;
use crate::Result;

/// Marker that starts every flag token.
pub const FLAG_MARKER: char = '-';

/// One kind of analysis that can be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisKind {
    /// Character frequency and first position (`-c`)
    Characters,
    /// Word frequency and first appearance (`-w`)
    Words,
    /// Line frequency and first appearance (`-l`)
    Lines,
    /// Longest word(s) (`-Lw`)
    LongestWord,
    /// Longest line(s) (`-Ll`)
    LongestLine,
}

impl AnalysisKind {
    /// All kinds, in flag-table order.
    pub const ALL: [AnalysisKind; 5] = [
        AnalysisKind::Characters,
        AnalysisKind::Words,
        AnalysisKind::Lines,
        AnalysisKind::LongestWord,
        AnalysisKind::LongestLine,
    ];

    /// The command-line flag that requests this kind.
    pub fn flag(self) -> &'static str {
        match self {
            AnalysisKind::Characters => "-c",
            AnalysisKind::Words => "-w",
            AnalysisKind::Lines => "-l",
            AnalysisKind::LongestWord => "-Lw",
            AnalysisKind::LongestLine => "-Ll",
        }
    }

    /// Look up a kind by its flag (exact, case-sensitive).
    pub fn from_flag(flag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.flag() == flag)
    }

    /// Whether this kind reads the word collection.
    pub fn needs_words(self) -> bool {
        matches!(self, AnalysisKind::Words | AnalysisKind::LongestWord)
    }

    /// Whether this kind reads the line collection.
    pub fn needs_lines(self) -> bool {
        matches!(self, AnalysisKind::Lines | AnalysisKind::LongestLine)
    }
}

/// A validated analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// File to analyze
    pub input: PathBuf,
    /// Destination file (None = caller's standard output)
    pub output: Option<PathBuf>,
    /// Requested kinds, in first-request order, without duplicates
    kinds: Vec<AnalysisKind>,
}

impl Request {
    /// Create a request for `input` with no analyses selected.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            kinds: Vec::new(),
        }
    }

    /// Builder: write the report to a file instead of standard output.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Builder: request an analysis kind. Repeats are no-ops.
    pub fn with(mut self, kind: AnalysisKind) -> Self {
        self.request(kind);
        self
    }

    /// Request an analysis kind. Returns false if it was already requested.
    pub fn request(&mut self, kind: AnalysisKind) -> bool {
        if self.kinds.contains(&kind) {
            return false;
        }
        self.kinds.push(kind);
        true
    }

    /// Requested kinds in the order they were first requested.
    pub fn kinds(&self) -> &[AnalysisKind] {
        &self.kinds
    }

    /// Whether `kind` was requested.
    pub fn wants(&self, kind: AnalysisKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Whether any requested kind needs the word collection.
    pub fn needs_words(&self) -> bool {
        self.kinds.iter().any(|k| k.needs_words())
    }

    /// Whether any requested kind needs the line collection.
    pub fn needs_lines(&self) -> bool {
        self.kinds.iter().any(|k| k.needs_lines())
    }

    /// Parse flag tokens (without a program name) into a request.
    ///
    /// Tokens are consumed left to right and the first problem aborts
    /// parsing:
    ///
    /// - `-f <path>` / `-o <path>`: the path must be present and must not start
    ///   with `-`, otherwise [`MadError::NoInputFile`] /
    ///   [`MadError::NoOutputFile`]. A later occurrence replaces the path.
    /// - `-c`, `-w`, `-l`, `-Lw`, `-Ll`: recorded on first appearance.
    /// - anything else: [`MadError::InvalidFlag`].
    ///
    /// A request without `-f` is rejected with [`MadError::NoInputFile`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use madcounterlib::{AnalysisKind, Request};
    ///
    /// let request = Request::parse(["-f", "notes.txt", "-Lw", "-c", "-Lw"]).unwrap();
    /// assert_eq!(
    ///     request.kinds(),
    ///     &[AnalysisKind::LongestWord, AnalysisKind::Characters]
    /// );
    /// ```
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut input: Option<PathBuf> = None;
        let mut output: Option<PathBuf> = None;
        let mut kinds: Vec<AnalysisKind> = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "-f" => {
                    let path = path_argument(args.next()).ok_or(MadError::NoInputFile)?;
                    input = Some(path);
                }
                "-o" => {
                    let path = path_argument(args.next()).ok_or(MadError::NoOutputFile)?;
                    output = Some(path);
                }
                _ => match AnalysisKind::from_flag(arg) {
                    Some(kind) => {
                        if !kinds.contains(&kind) {
                            kinds.push(kind);
                        }
                    }
                    None => return Err(MadError::InvalidFlag(arg.to_string())),
                },
            }
        }

        let input = input.ok_or(MadError::NoInputFile)?;
        Ok(Self {
            input,
            output,
            kinds,
        })
    }
}

/// Accept the token after `-f`/`-o` only if it is present and not flag-shaped.
fn path_argument<S: AsRef<str>>(next: Option<S>) -> Option<PathBuf> {
    next.filter(|s| !s.as_ref().starts_with(FLAG_MARKER))
        .map(|s| PathBuf::from(s.as_ref()))
}

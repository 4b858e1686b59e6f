//! Plain-text report rendering.
//!
//! Sections are written in the order the request lists its analysis kinds,
//! with exactly one blank line between two emitted sections. A kind whose
//! collection is empty (no words in a whitespace-only file) produces no
//! section and no separator.
//!
//! Section formats:
//!
//! ```text
//! Total Number of Chars = 12
//! Total Unique Chars = 7
//!
//! Ascii Value: 10, Char: <raw byte>, Count: 1, Initial Position: 11
//! ...
//!
//! Total Number of Words: 3
//! Total Unique Words: 2
//!
//! Word: hello, Freq: 2, Initial Position: 0
//! ...
//!
//! Longest Word is 5 characters long:
//! 	hello
//! 	world
//! ```

use std::io::{self, Write};

use crate::analysis::Analysis;
use crate::longest::Longest;
use crate::options::{AnalysisKind, Request};
use crate::tally::CharTally;
use crate::tokens::{TokenCollection, TokenKind};

/// Write every requested section of `analysis` to `out`.
pub fn render<W: Write>(out: &mut W, request: &Request, analysis: &Analysis) -> io::Result<()> {
    let mut emitted = false;

    for &kind in request.kinds() {
        if !has_section(kind, analysis) {
            log::debug!("skipping empty section for {}", kind.flag());
            continue;
        }
        if emitted {
            writeln!(out)?;
        }
        write_section(out, kind, analysis)?;
        emitted = true;
    }

    Ok(())
}

fn has_section(kind: AnalysisKind, analysis: &Analysis) -> bool {
    match kind {
        AnalysisKind::Characters => analysis.chars.is_some(),
        AnalysisKind::Words | AnalysisKind::LongestWord => {
            analysis.words.as_ref().is_some_and(|w| !w.is_empty())
        }
        AnalysisKind::Lines | AnalysisKind::LongestLine => {
            analysis.lines.as_ref().is_some_and(|l| !l.is_empty())
        }
    }
}

fn write_section<W: Write>(out: &mut W, kind: AnalysisKind, analysis: &Analysis) -> io::Result<()> {
    match kind {
        AnalysisKind::Characters => {
            if let Some(chars) = &analysis.chars {
                write_chars(out, chars)?;
            }
        }
        AnalysisKind::Words => {
            if let Some(words) = &analysis.words {
                write_tokens(out, words)?;
            }
        }
        AnalysisKind::Lines => {
            if let Some(lines) = &analysis.lines {
                write_tokens(out, lines)?;
            }
        }
        AnalysisKind::LongestWord => {
            if let Some(longest) = analysis.words.as_ref().and_then(|w| w.longest()) {
                write_longest(out, "Word", &longest)?;
            }
        }
        AnalysisKind::LongestLine => {
            if let Some(longest) = analysis.lines.as_ref().and_then(|l| l.longest()) {
                write_longest(out, "Line", &longest)?;
            }
        }
    }
    Ok(())
}

/// Character section.
pub fn write_chars<W: Write>(out: &mut W, chars: &CharTally) -> io::Result<()> {
    writeln!(out, "Total Number of Chars = {}", chars.total_count())?;
    writeln!(out, "Total Unique Chars = {}", chars.unique_count())?;
    writeln!(out)?;

    for entry in chars.entries() {
        write!(out, "Ascii Value: {}, Char: ", entry.value)?;
        out.write_all(&[entry.value])?;
        writeln!(
            out,
            ", Count: {}, Initial Position: {}",
            entry.count, entry.first_position
        )?;
    }
    Ok(())
}

/// Word or line frequency section.
pub fn write_tokens<W: Write, K: TokenKind>(
    out: &mut W,
    collection: &TokenCollection<K>,
) -> io::Result<()> {
    writeln!(
        out,
        "Total Number of {}: {}",
        K::PLURAL,
        collection.total_count()
    )?;
    writeln!(
        out,
        "Total Unique {}: {}",
        K::PLURAL,
        collection.unique_count()
    )?;
    writeln!(out)?;

    for entry in collection.entries() {
        write!(out, "{}: ", K::SINGULAR)?;
        out.write_all(&entry.text)?;
        writeln!(
            out,
            ", Freq: {}, Initial Position: {}",
            entry.frequency, entry.first_index
        )?;
    }
    Ok(())
}

/// Longest word or line section.
pub fn write_longest<W: Write>(out: &mut W, label: &str, longest: &Longest<'_>) -> io::Result<()> {
    writeln!(
        out,
        "Longest {} is {} characters long:",
        label, longest.length
    )?;
    for entry in &longest.entries {
        out.write_all(b"\t")?;
        out.write_all(&entry.text)?;
        writeln!(out)?;
    }
    Ok(())
}

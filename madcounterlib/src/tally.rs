//! Character frequency and first-position tally over a byte stream.
//!
//! The tally covers the 7-bit domain only (byte values 0-127). Inputs are
//! expected to be ASCII; a byte above 127 stops the scan with
//! [`MadError::NonAsciiByte`] rather than being folded into the table.

use serde::Serialize;
use std::io::{self, BufRead, BufReader, Read};

use crate::error::MadError;
use crate::Result;

/// Number of tallied byte values.
pub const ASCII_RANGE: usize = 128;

/// Statistics for one character present in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharCount {
    /// Byte value (0-127)
    pub value: u8,
    /// Number of occurrences
    pub count: u64,
    /// 0-based byte offset of the first occurrence
    pub first_position: u64,
}

/// Per-character counts for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharTally {
    frequency: [u64; ASCII_RANGE],
    first_position: [u64; ASCII_RANGE],
    unique: u64,
    total: u64,
}

impl Default for CharTally {
    fn default() -> Self {
        Self {
            frequency: [0; ASCII_RANGE],
            first_position: [0; ASCII_RANGE],
            unique: 0,
            total: 0,
        }
    }
}

impl CharTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally every byte of `reader` in a single forward pass.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut tally = Self::new();
        let mut reader = BufReader::new(reader);

        loop {
            let chunk = match reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if chunk.is_empty() {
                break;
            }
            let len = chunk.len();
            for &byte in chunk {
                tally.push(byte)?;
            }
            reader.consume(len);
        }

        log::debug!(
            "character tally: {} chars, {} unique",
            tally.total,
            tally.unique
        );
        Ok(tally)
    }

    /// Record one byte at the current offset.
    pub fn push(&mut self, byte: u8) -> Result<()> {
        let slot = usize::from(byte);
        if slot >= ASCII_RANGE {
            return Err(MadError::NonAsciiByte {
                offset: self.total,
                value: byte,
            });
        }
        if self.frequency[slot] == 0 {
            self.first_position[slot] = self.total;
            self.unique += 1;
        }
        self.frequency[slot] += 1;
        self.total += 1;
        Ok(())
    }

    /// Total bytes tallied.
    pub fn total_count(&self) -> u64 {
        self.total
    }

    /// Number of distinct byte values seen.
    pub fn unique_count(&self) -> u64 {
        self.unique
    }

    /// Occurrences of `byte` (0 for anything outside the domain).
    pub fn count(&self, byte: u8) -> u64 {
        self.frequency.get(usize::from(byte)).copied().unwrap_or(0)
    }

    /// Present characters in ascending byte order.
    pub fn entries(&self) -> impl Iterator<Item = CharCount> + '_ {
        (0..ASCII_RANGE)
            .filter(|&slot| self.frequency[slot] > 0)
            .map(|slot| CharCount {
                value: slot as u8,
                count: self.frequency[slot],
                first_position: self.first_position[slot],
            })
    }
}

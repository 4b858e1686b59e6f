//! Alphabetically ordered, unique-token collections.
//!
//! Words and lines share the same bookkeeping: one [`TokenEntry`] per distinct
//! token holding its frequency and the index of its first appearance. The
//! only difference is how tokens are cut out of the input, which is what the
//! [`TokenKind`] parameter of [`TokenCollection`] selects:
//!
//! - [`Words`]: maximal runs of non-whitespace bytes
//! - [`Lines`]: `\n`-terminated records, with the terminator stripped
//!
//! Tokens are byte strings and compare byte-wise, so ordering is plain
//! ASCII order (`"Zebra"` sorts before `"apple"`).

use serde::{Serialize, Serializer};
use std::io::{self, BufRead, BufReader, Read};
use std::marker::PhantomData;

use crate::longest::{longest, Longest};

/// How tokens of one kind are extracted from a byte stream.
pub trait TokenKind {
    /// Label used in report lines (`Word`, `Line`)
    const SINGULAR: &'static str;
    /// Label used in report headers (`Words`, `Lines`)
    const PLURAL: &'static str;

    /// Read the next token into `buf` (cleared first).
    ///
    /// Returns `Ok(false)` once the stream holds no further token.
    fn read_token<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool>;
}

/// Whitespace-delimited words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Words;

/// Newline-delimited lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lines;

/// Word separators: the C-locale whitespace set.
pub fn is_word_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

impl TokenKind for Words {
    const SINGULAR: &'static str = "Word";
    const PLURAL: &'static str = "Words";

    fn read_token<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
        buf.clear();
        loop {
            let chunk = match reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if chunk.is_empty() {
                return Ok(!buf.is_empty());
            }

            let mut used = 0;
            let mut complete = false;
            for &byte in chunk {
                used += 1;
                if is_word_separator(byte) {
                    if !buf.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    buf.push(byte);
                }
            }
            reader.consume(used);

            if complete {
                return Ok(true);
            }
        }
    }
}

impl TokenKind for Lines {
    const SINGULAR: &'static str = "Line";
    const PLURAL: &'static str = "Lines";

    fn read_token<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
        buf.clear();
        if reader.read_until(b'\n', buf)? == 0 {
            return Ok(false);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        Ok(true)
    }
}

/// Statistics for one distinct token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenEntry {
    /// Token bytes
    #[serde(serialize_with = "serialize_lossy")]
    pub text: Vec<u8>,
    /// Number of occurrences
    pub frequency: u64,
    /// 0-based index of the first occurrence among all tokens of this kind
    pub first_index: u64,
}

impl TokenEntry {
    fn new(text: &[u8], first_index: u64) -> Self {
        Self {
            text: text.to_vec(),
            frequency: 1,
            first_index,
        }
    }

    /// Length of the token in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this is the empty token (a blank line).
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Token text, with invalid UTF-8 replaced.
    pub fn text_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }
}

fn serialize_lossy<S: Serializer>(text: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(text))
}

/// Distinct tokens of one kind, kept in ascending byte-wise order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCollection<K> {
    entries: Vec<TokenEntry>,
    total: u64,
    kind: PhantomData<K>,
}

/// Distinct words of a file.
pub type WordCollection = TokenCollection<Words>;

/// Distinct lines of a file.
pub type LineCollection = TokenCollection<Lines>;

impl<K> Default for TokenCollection<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            total: 0,
            kind: PhantomData,
        }
    }
}

impl<K> TokenCollection<K> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sighting of `text` at token index `index`.
    ///
    /// A known token only has its frequency bumped; its first index is kept.
    /// A new token is spliced in at its sorted position. Returns true if the
    /// token was new.
    pub fn insert(&mut self, text: &[u8], index: u64) -> bool {
        self.total += 1;
        match self
            .entries
            .binary_search_by(|entry| entry.text.as_slice().cmp(text))
        {
            Ok(found) => {
                self.entries[found].frequency += 1;
                false
            }
            Err(at) => {
                self.entries.insert(at, TokenEntry::new(text, index));
                true
            }
        }
    }

    /// Entries in ascending order.
    pub fn entries(&self) -> &[TokenEntry] {
        &self.entries
    }

    /// Look up a token.
    pub fn get(&self, text: &[u8]) -> Option<&TokenEntry> {
        self.entries
            .binary_search_by(|entry| entry.text.as_slice().cmp(text))
            .ok()
            .map(|at| &self.entries[at])
    }

    /// Number of distinct tokens.
    pub fn unique_count(&self) -> u64 {
        self.entries.len() as u64
    }

    /// Number of tokens read, duplicates included.
    pub fn total_count(&self) -> u64 {
        self.total
    }

    /// Whether no token has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest token(s), ties in ascending order. None when empty.
    pub fn longest(&self) -> Option<Longest<'_>> {
        longest(&self.entries)
    }
}

impl<K: TokenKind> TokenCollection<K> {
    /// Build a collection from every token of `reader` in one forward pass.
    ///
    /// # Example
    ///
    /// ```rust
    /// use madcounterlib::WordCollection;
    ///
    /// let words = WordCollection::from_reader("hello world hello\n".as_bytes()).unwrap();
    /// assert_eq!(words.total_count(), 3);
    /// assert_eq!(words.unique_count(), 2);
    /// assert_eq!(words.entries()[0].text, b"hello");
    /// assert_eq!(words.entries()[0].frequency, 2);
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        let mut collection = Self::new();
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        let mut index = 0;

        while K::read_token(&mut reader, &mut buf)? {
            collection.insert(&buf, index);
            index += 1;
        }

        log::debug!(
            "{} collection: {} total, {} unique",
            K::PLURAL.to_lowercase(),
            collection.total_count(),
            collection.unique_count()
        );
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<K>(collection: &TokenCollection<K>) -> Vec<&[u8]> {
        collection
            .entries()
            .iter()
            .map(|e| e.text.as_slice())
            .collect()
    }

    fn tokens<K: TokenKind>(input: &[u8]) -> Vec<Vec<u8>> {
        let mut reader = BufReader::new(input);
        let mut buf = Vec::new();
        let mut out = Vec::new();
        while K::read_token(&mut reader, &mut buf).unwrap() {
            out.push(buf.clone());
        }
        out
    }

    #[test]
    fn test_insert_keeps_order_and_uniqueness() {
        let mut collection: TokenCollection<Words> = TokenCollection::new();
        for (i, word) in ["pear", "apple", "zoo", "apple", "mango", "pear", "apple"]
            .iter()
            .enumerate()
        {
            collection.insert(word.as_bytes(), i as u64);
            let current = texts(&collection);
            assert!(current.windows(2).all(|w| w[0] < w[1]));
        }

        assert_eq!(
            texts(&collection),
            vec![&b"apple"[..], b"mango", b"pear", b"zoo"]
        );
        let apple = collection.get(b"apple").unwrap();
        assert_eq!(apple.frequency, 3);
        assert_eq!(apple.first_index, 1);
        assert_eq!(collection.get(b"pear").unwrap().first_index, 0);
        assert_eq!(collection.total_count(), 7);
        assert_eq!(collection.unique_count(), 4);
    }

    #[test]
    fn test_insert_reports_new_tokens() {
        let mut collection: TokenCollection<Lines> = TokenCollection::new();
        assert!(collection.insert(b"a", 0));
        assert!(!collection.insert(b"a", 1));
        assert!(collection.insert(b"", 2));
    }

    #[test]
    fn test_ordering_is_bytewise_and_case_sensitive() {
        let words = WordCollection::from_reader("banana Apple apple Zebra".as_bytes()).unwrap();
        assert_eq!(
            texts(&words),
            vec![&b"Apple"[..], b"Zebra", b"apple", b"banana"]
        );
    }

    #[test]
    fn test_word_example_from_docs() {
        let words = WordCollection::from_reader("hello world hello\n".as_bytes()).unwrap();
        assert_eq!(words.total_count(), 3);
        assert_eq!(words.unique_count(), 2);

        let hello = &words.entries()[0];
        assert_eq!(hello.text, b"hello");
        assert_eq!(hello.frequency, 2);
        assert_eq!(hello.first_index, 0);

        let world = &words.entries()[1];
        assert_eq!(world.text, b"world");
        assert_eq!(world.frequency, 1);
        assert_eq!(world.first_index, 1);
    }

    #[test]
    fn test_word_separators() {
        assert_eq!(
            tokens::<Words>(b"  one\ttwo\r\nthree\x0bfour\x0cfive  "),
            vec![
                b"one".to_vec(),
                b"two".to_vec(),
                b"three".to_vec(),
                b"four".to_vec(),
                b"five".to_vec()
            ]
        );
        assert!(tokens::<Words>(b" \n\t ").is_empty());
    }

    #[test]
    fn test_words_spanning_buffer_boundaries() {
        let long_word = "x".repeat(20_000);
        let input = format!("{long_word} y {long_word}");
        let words = WordCollection::from_reader(input.as_bytes()).unwrap();

        assert_eq!(words.total_count(), 3);
        assert_eq!(words.unique_count(), 2);
        assert_eq!(words.get(long_word.as_bytes()).unwrap().frequency, 2);
    }

    #[test]
    fn test_line_extraction() {
        assert_eq!(
            tokens::<Lines>(b"first\n\nsecond\r\nlast"),
            vec![
                b"first".to_vec(),
                b"".to_vec(),
                b"second\r".to_vec(),
                b"last".to_vec()
            ]
        );
        assert_eq!(tokens::<Lines>(b"only\n"), vec![b"only".to_vec()]);
    }

    #[test]
    fn test_empty_line_is_a_token() {
        let lines = LineCollection::from_reader("b\n\na\n\n".as_bytes()).unwrap();
        assert_eq!(lines.total_count(), 4);
        assert_eq!(texts(&lines), vec![&b""[..], b"a", b"b"]);

        let blank = lines.get(b"").unwrap();
        assert!(blank.is_empty());
        assert_eq!(blank.frequency, 2);
        assert_eq!(blank.first_index, 1);
    }

    #[test]
    fn test_non_ascii_bytes_pass_through() {
        let words = WordCollection::from_reader(&b"caf\xC3\xA9 caf\xC3\xA9"[..]).unwrap();
        let entry = &words.entries()[0];
        assert_eq!(entry.text, b"caf\xC3\xA9");
        assert_eq!(entry.len(), 5);
        assert_eq!(entry.frequency, 2);
        assert_eq!(entry.text_lossy(), "café");
    }

    #[test]
    fn test_serializes_text_as_string() {
        let lines = LineCollection::from_reader("hi there\n".as_bytes()).unwrap();
        let json = serde_json::to_value(&lines.entries()[0]).unwrap();
        assert_eq!(json["text"], "hi there");
        assert_eq!(json["frequency"], 1);
        assert_eq!(json["first_index"], 0);
    }
}

//! Longest-token search over a token collection.

use serde::Serialize;

use crate::tokens::TokenEntry;

/// The maximum token length and every entry of that length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Longest<'a> {
    /// Length in bytes shared by all entries
    pub length: usize,
    /// Tied entries, ascending byte-wise
    pub entries: Vec<&'a TokenEntry>,
}

/// Find the longest entries. Returns None for an empty slice.
///
/// Tied entries need not be adjacent in the input, so the tie set is sorted
/// on its own regardless of how `entries` is ordered.
pub fn longest(entries: &[TokenEntry]) -> Option<Longest<'_>> {
    let length = entries.iter().map(TokenEntry::len).max()?;

    let mut tied: Vec<&TokenEntry> = entries.iter().filter(|e| e.len() == length).collect();
    tied.sort_by(|a, b| a.text.cmp(&b.text));

    Some(Longest {
        length,
        entries: tied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{LineCollection, WordCollection};

    fn entry(text: &str, first_index: u64) -> TokenEntry {
        TokenEntry {
            text: text.as_bytes().to_vec(),
            frequency: 1,
            first_index,
        }
    }

    #[test]
    fn test_empty_has_no_longest() {
        assert!(longest(&[]).is_none());
        assert!(WordCollection::new().longest().is_none());
    }

    #[test]
    fn test_single_winner() {
        let words = WordCollection::from_reader("a bb ccc bb".as_bytes()).unwrap();
        let result = words.longest().unwrap();
        assert_eq!(result.length, 3);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].text, b"ccc");
    }

    #[test]
    fn test_ties_sorted_regardless_of_input_order() {
        let entries = vec![entry("zeta", 0), entry("ab", 1), entry("Beta", 2), entry("alfa", 3)];
        let result = longest(&entries).unwrap();

        assert_eq!(result.length, 4);
        let texts: Vec<&[u8]> = result.entries.iter().map(|e| e.text.as_slice()).collect();
        assert_eq!(texts, vec![&b"Beta"[..], b"alfa", b"zeta"]);
    }

    #[test]
    fn test_tie_break_ignores_file_order() {
        let words = WordCollection::from_reader("world hello".as_bytes()).unwrap();
        let result = words.longest().unwrap();
        let texts: Vec<&[u8]> = result.entries.iter().map(|e| e.text.as_slice()).collect();
        assert_eq!(texts, vec![&b"hello"[..], b"world"]);
    }

    #[test]
    fn test_all_blank_lines() {
        let lines = LineCollection::from_reader("\n\n".as_bytes()).unwrap();
        let result = lines.longest().unwrap();
        assert_eq!(result.length, 0);
        assert_eq!(result.entries.len(), 1);
        assert!(result.entries[0].is_empty());
    }
}

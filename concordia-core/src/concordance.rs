//! Final concordance structures produced by the pipeline

use serde::Serialize;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Sentence indices recorded for a single word, in encounter order.
///
/// Indices are appended as occurrences arrive and are never deduplicated:
/// a word appearing three times in sentence 0 records `[0, 0, 0]`.
pub type IndexList = SmallVec<[usize; 4]>;

/// Immutable final record for one distinct word.
///
/// `count` always equals `indices.len()`; both are frozen when the tally
/// stream completes and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcordanceEntry {
    /// Normalized word (lower-cased, punctuation-stripped)
    pub word: String,
    /// Number of occurrences across the whole document
    pub count: usize,
    /// Sentence indices of each occurrence, in encounter order
    pub indices: IndexList,
}

/// Ordered mapping from word to its final entry.
///
/// Entries are sorted ascending by byte-wise word comparison at construction
/// time and read-only afterwards. Iteration yields entries in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Concordance {
    entries: Vec<ConcordanceEntry>,
}

impl Concordance {
    /// Order an aggregated word table into the final structure.
    ///
    /// Sorting here makes the output deterministic regardless of the hash
    /// map's internal iteration order.
    pub(crate) fn from_unordered(table: HashMap<String, (usize, IndexList)>) -> Self {
        let mut entries: Vec<ConcordanceEntry> = table
            .into_iter()
            .map(|(word, (count, indices))| ConcordanceEntry {
                word,
                count,
                indices,
            })
            .collect();
        entries.sort_unstable_by(|a, b| a.word.cmp(&b.word));
        Self { entries }
    }

    /// Look up the entry for a word, if present.
    pub fn get(&self, word: &str) -> Option<&ConcordanceEntry> {
        self.entries
            .binary_search_by(|entry| entry.word.as_str().cmp(word))
            .ok()
            .map(|position| &self.entries[position])
    }

    /// Iterate entries in sorted-word order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConcordanceEntry> {
        self.entries.iter()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the document yielded no words at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Concordance {
    type Item = &'a ConcordanceEntry;
    type IntoIter = std::slice::Iter<'a, ConcordanceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn table_of(pairs: &[(&str, &[usize])]) -> HashMap<String, (usize, IndexList)> {
        pairs
            .iter()
            .map(|(word, indices)| {
                let list: IndexList = indices.iter().copied().collect();
                (word.to_string(), (list.len(), list))
            })
            .collect()
    }

    #[test]
    fn test_entries_sorted_ascending_by_word() {
        let concordance = Concordance::from_unordered(table_of(&[
            ("b", &[0]),
            ("a", &[1]),
            ("c", &[0, 1]),
        ]));

        let words: Vec<&str> = concordance.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_string_key_sorts_first() {
        let concordance =
            Concordance::from_unordered(table_of(&[("word", &[0]), ("", &[0])]));

        let words: Vec<&str> = concordance.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["", "word"]);
    }

    #[test]
    fn test_get_found_and_not_found() {
        let concordance =
            Concordance::from_unordered(table_of(&[("cat", &[0]), ("dog", &[1])]));

        let cat = concordance.get("cat").unwrap();
        assert_eq!(cat.count, 1);
        let expected: IndexList = smallvec![0];
        assert_eq!(cat.indices, expected);

        assert!(concordance.get("bird").is_none());
    }

    #[test]
    fn test_empty_table_produces_empty_concordance() {
        let concordance = Concordance::from_unordered(HashMap::new());
        assert!(concordance.is_empty());
        assert_eq!(concordance.len(), 0);
        assert!(concordance.get("anything").is_none());
    }

    #[test]
    fn test_serializes_as_entry_array() {
        let concordance = Concordance::from_unordered(table_of(&[("a", &[0, 2])]));
        let json = serde_json::to_string(&concordance).unwrap();
        assert_eq!(json, r#"[{"word":"a","count":2,"indices":[0,2]}]"#);
    }
}

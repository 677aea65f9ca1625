//! Tally stage: word tokens in, cumulative per-word snapshots out

use super::split::WordToken;
use crate::concordance::IndexList;
use log::debug;
use std::collections::HashMap;

/// Accumulator mapping each word to the ordered list of sentence indices at
/// which it has occurred so far.
///
/// The table is supplied by the caller, not owned by the stage, and a table
/// belongs to exactly one pipeline run: concurrent runs use separate tables.
#[derive(Debug, Default)]
pub struct WordTable {
    entries: HashMap<String, IndexList>,
}

impl WordTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words recorded so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no token has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sentence indices recorded for `word`, in encounter order.
    pub fn indices(&self, word: &str) -> Option<&[usize]> {
        self.entries.get(word).map(|list| list.as_slice())
    }
}

/// One emission of the tally stage: the cumulative state of a word's entry
/// immediately after incorporating one occurrence.
///
/// `indices` is an owned copy taken at emission time, never a live view of
/// the accumulator, so later appends for the same word cannot alter an
/// already-yielded snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallySnapshot {
    /// The word this snapshot describes
    pub word: String,
    /// Occurrences so far, including the one just recorded
    pub count: usize,
    /// Sentence indices so far, including the one just recorded
    pub indices: IndexList,
}

/// Iterator stage that records each token in the caller's [`WordTable`] and
/// emits a [`TallySnapshot`] per token.
///
/// The stage has no termination condition beyond exhausting its input.
pub struct Tally<'a, I> {
    tokens: I,
    table: &'a mut WordTable,
}

impl<'a, I> Tally<'a, I> {
    /// Wrap a token sequence around a caller-supplied accumulator.
    pub fn new(tokens: I, table: &'a mut WordTable) -> Self {
        Self { tokens, table }
    }
}

impl<I> Iterator for Tally<'_, I>
where
    I: Iterator<Item = WordToken>,
{
    type Item = TallySnapshot;

    fn next(&mut self) -> Option<TallySnapshot> {
        let WordToken { word, sentence } = self.tokens.next()?;

        let list = self.table.entries.entry(word.clone()).or_default();
        list.push(sentence);
        debug!("tally stage: {word:?} -> {list:?}");

        Some(TallySnapshot {
            count: list.len(),
            indices: list.clone(),
            word,
        })
    }
}

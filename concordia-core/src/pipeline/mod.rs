//! Pull-based concordance pipeline
//!
//! A tiny streaming topology in the spout/bolt mold: the sentence source
//! originates a lazy sequence, the word-split and tally stages each consume
//! one sequence and produce another, and a terminal fold drains the last
//! stage into the ordered [`Concordance`]. Pulling one element downstream
//! recursively pulls exactly what it needs upstream; no stage materializes
//! more than the current sentence's tokens.

mod split;
mod tally;

pub use split::{normalize_token, WordSplit, WordToken};
pub use tally::{Tally, TallySnapshot, WordTable};

use crate::concordance::{Concordance, IndexList};
use crate::error::Result;
use crate::tokenizer::SentenceTokenizer;
use log::debug;
use std::collections::HashMap;

/// Source stage wrapping the tokenizer collaborator.
///
/// The collaborator operates on a complete text buffer; the source exposes
/// its output as a finite, ordered, single-pass sequence and adds no
/// normalization of its own. Tokenizer failure surfaces in [`Self::new`],
/// before any sentence is produced.
pub struct SentenceSource {
    sentences: std::vec::IntoIter<String>,
}

impl SentenceSource {
    /// Tokenize `text` and wrap the resulting sentences as a stream.
    pub fn new(tokenizer: &dyn SentenceTokenizer, text: &str) -> Result<Self> {
        let sentences = tokenizer.tokenize(text)?;
        debug!("source stage: {} sentences", sentences.len());
        Ok(Self {
            sentences: sentences.into_iter(),
        })
    }
}

impl Iterator for SentenceSource {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.sentences.next()
    }
}

/// Terminal fold: drain the tally stream exactly once, keeping the last
/// snapshot per word.
///
/// Snapshots are cumulative, so the last one observed for a word is
/// authoritative and earlier ones are correctly superseded.
pub fn aggregate<I>(tallied: I) -> HashMap<String, (usize, IndexList)>
where
    I: Iterator<Item = TallySnapshot>,
{
    let mut table = HashMap::new();
    for snapshot in tallied {
        debug!(
            "aggregate: {:?} => {}, {:?}",
            snapshot.word, snapshot.count, snapshot.indices
        );
        table.insert(snapshot.word, (snapshot.count, snapshot.indices));
    }
    table
}

/// Run the whole pipeline over an already-tokenized sentence sequence.
///
/// Zero sentences are not an error: the result is a valid, empty
/// [`Concordance`].
///
/// # Example
///
/// ```rust
/// use concordia_core::generate_concordance;
///
/// let concordance = generate_concordance(["The cat sat.", "The dog sat!"]);
/// let sat = concordance.get("sat").unwrap();
/// assert_eq!(sat.count, 2);
/// assert_eq!(sat.indices.as_slice(), &[0, 1]);
/// ```
pub fn generate_concordance<I>(sentences: I) -> Concordance
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut table = WordTable::new();
    let split = WordSplit::new(sentences.into_iter());
    let tallied = Tally::new(split, &mut table);
    let folded = aggregate(tallied);
    Concordance::from_unordered(folded)
}

/// Tokenize `text` with the given collaborator and run the pipeline over the
/// resulting sentences.
pub fn concordance_from_text(
    tokenizer: &dyn SentenceTokenizer,
    text: &str,
) -> Result<Concordance> {
    let source = SentenceSource::new(tokenizer, text)?;
    Ok(generate_concordance(source))
}

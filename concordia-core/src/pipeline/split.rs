//! Word-split stage: sentences in, normalized word tokens out

use log::debug;

/// One normalized word together with the index of the sentence it came from.
///
/// The sentence index is fixed by enumeration order at the source and never
/// recomputed downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    /// Lower-cased, punctuation-stripped token; may be empty
    pub word: String,
    /// Zero-based index of the originating sentence
    pub sentence: usize,
}

/// Iterator stage that splits each sentence into [`WordToken`]s.
///
/// Tokens of sentence `i` are emitted left to right, strictly before any
/// token of sentence `i + 1`. The stage is stateless across sentences and
/// buffers at most one sentence's tokens. Tokens that normalize to the empty
/// string are kept: a punctuation-only token tallies under the `""` key.
pub struct WordSplit<I> {
    sentences: I,
    next_sentence: usize,
    pending: std::vec::IntoIter<WordToken>,
}

impl<I> WordSplit<I> {
    /// Wrap a sentence sequence.
    pub fn new(sentences: I) -> Self {
        Self {
            sentences,
            next_sentence: 0,
            pending: Vec::new().into_iter(),
        }
    }
}

impl<I, S> Iterator for WordSplit<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = WordToken;

    fn next(&mut self) -> Option<WordToken> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(token);
            }

            // A sentence may yield no tokens at all; keep pulling.
            let sentence = self.sentences.next()?;
            let index = self.next_sentence;
            self.next_sentence += 1;
            debug!("split stage: sentence {index}: {:?}", sentence.as_ref());

            let tokens: Vec<WordToken> = sentence
                .as_ref()
                .split_whitespace()
                .map(|raw| WordToken {
                    word: normalize_token(raw),
                    sentence: index,
                })
                .collect();
            self.pending = tokens.into_iter();
        }
    }
}

/// Strip leading and trailing punctuation and lower-case the remainder.
///
/// A token consisting solely of punctuation normalizes to the empty string;
/// that is a valid word key, not an error.
pub fn normalize_token(raw: &str) -> String {
    raw.trim_matches(is_clipped_punctuation).to_lowercase()
}

/// ASCII punctuation plus the Unicode dash, quote, and ellipsis marks that
/// show up in prose.
fn is_clipped_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{2010}'..='\u{2015}' | '‘' | '’' | '‚' | '“' | '”' | '„' | '…'
        )
}

//! Sentence tokenization capability
//!
//! Sentence-boundary detection is a collaborator concern: the pipeline only
//! requires the [`SentenceTokenizer`] contract. The default implementation
//! segments text with UAX #29 sentence bounds and repairs false splits after
//! known abbreviations ("Mr.", "e.g.", ...).

mod rules;

pub use rules::SegmentRules;

use crate::error::Result;
use unicode_segmentation::UnicodeSegmentation;

/// Capability contract: a complete text buffer in, sentence-segmented
/// substrings out, in document order.
///
/// Initialization failures must surface as
/// [`Error::TokenizerUnavailable`](crate::Error::TokenizerUnavailable)
/// before any sentence is produced.
pub trait SentenceTokenizer {
    /// Segment `text` into ordered sentences.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Default tokenizer backed by Unicode sentence segmentation.
#[derive(Debug, Clone, Default)]
pub struct SegmentTokenizer {
    rules: SegmentRules,
}

impl SegmentTokenizer {
    /// Tokenizer with the built-in English rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizer with a custom rule set.
    pub fn with_rules(rules: SegmentRules) -> Self {
        Self { rules }
    }

    /// UAX #29 breaks after any period followed by an upper-case start, so
    /// "Mr. Smith" splits spuriously. A segment whose last token is a known
    /// abbreviation gets the following segment appended instead.
    fn ends_with_abbreviation(&self, sentence: &str) -> bool {
        let Some(last) = sentence.trim_end().split_whitespace().next_back() else {
            return false;
        };
        let Some(stem) = last.strip_suffix('.') else {
            return false;
        };
        self.rules.is_abbreviation(&stem.to_lowercase())
    }
}

impl SentenceTokenizer for SegmentTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut sentences: Vec<String> = Vec::new();
        for segment in text.split_sentence_bounds() {
            match sentences.last_mut() {
                Some(previous) if self.ends_with_abbreviation(previous) => {
                    previous.push_str(segment);
                }
                _ => sentences.push(segment.to_string()),
            }
        }

        Ok(sentences
            .into_iter()
            .map(|sentence| sentence.trim_end().to_string())
            .filter(|sentence| !sentence.is_empty())
            .collect())
    }
}

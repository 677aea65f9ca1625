//! Streaming concordance construction
//!
//! Builds an alphabetically ordered mapping from each distinct word in a
//! document to its occurrence count and the sentence indices it appears in,
//! modeled as a small pull-based stream topology: a sentence source feeds a
//! word-split stage, a tally stage annotates each token with the cumulative
//! state of its word, and a terminal fold orders the result.
//!
//! Sentence-boundary detection itself is a collaborator capability behind
//! the [`SentenceTokenizer`] trait; [`SegmentTokenizer`] is the built-in
//! implementation.
//!
//! # Example
//!
//! ```rust
//! use concordia_core::{concordance_from_text, SegmentTokenizer};
//!
//! let tokenizer = SegmentTokenizer::new();
//! let concordance = concordance_from_text(&tokenizer, "The cat sat. The dog sat!").unwrap();
//!
//! let the = concordance.get("the").unwrap();
//! assert_eq!(the.count, 2);
//! assert_eq!(the.indices.as_slice(), &[0, 1]);
//! ```

pub mod concordance;
pub mod error;
pub mod pipeline;
pub mod tokenizer;

pub use concordance::{Concordance, ConcordanceEntry, IndexList};
pub use error::{Error, Result};
pub use pipeline::{
    concordance_from_text, generate_concordance, SentenceSource, WordTable,
};
pub use tokenizer::{SegmentRules, SegmentTokenizer, SentenceTokenizer};

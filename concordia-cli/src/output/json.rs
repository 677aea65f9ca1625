//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use concordia_core::ConcordanceEntry;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs the concordance as a pretty-printed array of
/// entry objects
pub struct JsonFormatter<W: Write> {
    writer: W,
    entries: Vec<EntryData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct EntryData {
    /// The normalized word (may be empty for punctuation-only tokens)
    pub word: String,
    /// Number of occurrences
    pub count: usize,
    /// Sentence indices of each occurrence, in encounter order
    pub indices: Vec<usize>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn write_entry(&mut self, entry: &ConcordanceEntry) -> Result<()> {
        self.entries.push(EntryData {
            word: entry.word.clone(),
            count: entry.count,
            indices: entry.indices.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

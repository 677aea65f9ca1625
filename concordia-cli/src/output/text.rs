//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use concordia_core::ConcordanceEntry;
use std::io::{self, Write};

/// Plain text formatter - one `word: count [indices]` line per entry,
/// preceded by a header line naming the columns
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin(&mut self) -> Result<()> {
        writeln!(self.writer, "word: count [sentence indices]")?;
        Ok(())
    }

    fn write_entry(&mut self, entry: &ConcordanceEntry) -> Result<()> {
        let indices = entry
            .indices
            .iter()
            .map(|index| index.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(self.writer, "{}: {} [{}]", entry.word, entry.count, indices)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

//! Output formatting module

use anyhow::Result;
use concordia_core::ConcordanceEntry;

/// Trait for concordance output formatters
pub trait OutputFormatter: Send + Sync {
    /// Write any prologue before the first entry
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    /// Format and output a single concordance entry
    fn write_entry(&mut self, entry: &ConcordanceEntry) -> Result<()>;

    /// Finalize output (e.g., close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

//! Merge rules for the segment tokenizer

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Abbreviations that never terminate a sentence. Stored lower-case and
/// without the trailing period.
const BUILTIN_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "st", "jr", "sr", "gen",
    "col", "capt", "lt", "sgt", "vs", "etc", "inc", "ltd", "co", "corp",
    "dept", "univ", "approx", "e.g", "i.e", "cf",
];

/// Raw shape of a TOML rules file.
#[derive(Debug, Deserialize)]
struct RulesFile {
    /// Extra abbreviations, with or without the trailing period
    #[serde(default)]
    abbreviations: Vec<String>,
}

/// Sentence-merge rules for [`SegmentTokenizer`](super::SegmentTokenizer).
///
/// The default rule set carries the built-in English abbreviations; a TOML
/// rules file extends (never replaces) that set:
///
/// ```toml
/// abbreviations = ["blvd", "fig"]
/// ```
#[derive(Debug, Clone)]
pub struct SegmentRules {
    abbreviations: HashSet<String>,
}

impl Default for SegmentRules {
    fn default() -> Self {
        Self {
            abbreviations: BUILTIN_ABBREVIATIONS
                .iter()
                .map(|abbr| (*abbr).to_string())
                .collect(),
        }
    }
}

impl SegmentRules {
    /// Built-in English rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load rules from a TOML file, extending the built-in set.
    ///
    /// An unreadable file is [`Error::TokenizerUnavailable`]: the tokenizer
    /// fails fast before producing any sentence rather than silently
    /// degrading to the built-in rules.
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::TokenizerUnavailable(format!(
                "failed to read rules file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parse rules from TOML content, extending the built-in set.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: RulesFile = toml::from_str(raw)
            .map_err(|e| Error::Configuration(format!("invalid rules file: {e}")))?;

        let mut rules = Self::default();
        for abbreviation in file.abbreviations {
            rules
                .abbreviations
                .insert(abbreviation.trim_end_matches('.').to_lowercase());
        }
        Ok(rules)
    }

    /// True when `stem` (lower-case, no trailing period) is a known
    /// abbreviation.
    pub(crate) fn is_abbreviation(&self, stem: &str) -> bool {
        self.abbreviations.contains(stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_abbreviations_present() {
        let rules = SegmentRules::new();
        assert!(rules.is_abbreviation("mr"));
        assert!(rules.is_abbreviation("e.g"));
        assert!(!rules.is_abbreviation("cat"));
    }

    #[test]
    fn test_toml_extends_builtin_set() {
        let rules = SegmentRules::from_toml_str(r#"abbreviations = ["Blvd.", "fig"]"#).unwrap();
        assert!(rules.is_abbreviation("blvd"));
        assert!(rules.is_abbreviation("fig"));
        // Built-ins survive the extension
        assert!(rules.is_abbreviation("dr"));
    }

    #[test]
    fn test_empty_toml_is_builtin_set() {
        let rules = SegmentRules::from_toml_str("").unwrap();
        assert!(rules.is_abbreviation("mrs"));
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let result = SegmentRules::from_toml_str("abbreviations = 42");
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_missing_file_is_tokenizer_unavailable() {
        let result = SegmentRules::from_toml_path("/nonexistent/rules.toml");
        assert!(matches!(result, Err(Error::TokenizerUnavailable(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"abbreviations = ["blvd"]"#).unwrap();

        let rules = SegmentRules::from_toml_path(file.path()).unwrap();
        assert!(rules.is_abbreviation("blvd"));
    }
}

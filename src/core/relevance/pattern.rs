//! Whole-word keyword pattern.
//!
//! Compiles every keyword into one case-insensitive alternation
//! bounded by `\b`, shared by the matcher and the compressor.

use regex::{Regex, RegexBuilder};

use crate::core::error::{BundleError, Result};
use crate::core::types::KeywordSet;

// Expanded sets can carry hundreds of link titles
const PATTERN_SIZE_LIMIT: usize = 64 * 1024 * 1024;

/// Compiled `\b(?:k1|k2|...)\b` over a keyword set
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    regex: Option<Regex>,
}

impl KeywordPattern {
    /// Compile the pattern. An empty set yields a pattern that never
    /// matches.
    pub fn new(keywords: &KeywordSet) -> Result<Self> {
        if keywords.is_empty() {
            return Ok(Self { regex: None });
        }

        let alternation = keywords
            .iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");

        let regex = RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
            .case_insensitive(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .dfa_size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|e| {
                BundleError::InvalidKeywords(format!(
                    "cannot compile {} keywords: {e}",
                    keywords.len()
                ))
            })?;

        Ok(Self { regex: Some(regex) })
    }

    /// True if any keyword occurs in `text` as a whole word
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|r| r.is_match(text))
    }

    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }
}

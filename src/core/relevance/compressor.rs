//! Lossy content compression.
//!
//! Comments are stripped first, then lines without a whole-word
//! keyword hit are dropped, and only then is whitespace collapsed.
//! Filtering must happen before collapsing since collapsing erases
//! line boundaries.

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::relevance::pattern::KeywordPattern;
use crate::core::types::KeywordSet;

// Line comments stop before the newline so line structure survives
static COMMENT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)//[^\n]*|/\*.*?\*/").unwrap());

static WHITESPACE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Reduces file content to the keyword-bearing lines
#[derive(Debug, Clone)]
pub struct ContentCompressor {
    pattern: Arc<KeywordPattern>,
}

impl ContentCompressor {
    pub fn new(keywords: &KeywordSet) -> Result<Self> {
        Ok(Self::with_pattern(Arc::new(KeywordPattern::new(keywords)?)))
    }

    pub fn with_pattern(pattern: Arc<KeywordPattern>) -> Self {
        Self { pattern }
    }

    /// Compress `content` down to its relevant lines, joined by single
    /// spaces. Returns an empty string when no line is relevant.
    pub fn compress(&self, content: &str) -> String {
        let stripped = strip_comments(content);

        let retained: Vec<&str> = stripped
            .lines()
            .filter(|line| self.pattern.is_match(line))
            .collect();

        collapse_whitespace(&retained.join(" "))
    }
}

/// Remove `// ...` and `/* ... */` comments
pub fn strip_comments(content: &str) -> String {
    COMMENT_PATTERN.replace_all(content, "").into_owned()
}

/// Collapse every whitespace run to one space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_PATTERN.replace_all(text, " ").trim().to_string()
}

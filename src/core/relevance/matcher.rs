//! Relevance decision for a single candidate file.
//!
//! A file is relevant if any of three tests passes, tried cheapest
//! first:
//! 1. its base name fuzzily matches a keyword
//! 2. its content contains a keyword as a whole word
//! 3. a declared identifier (`var`, `let`, `const`, `function`)
//!    fuzzily matches a keyword

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::relevance::fuzzy::partial_ratio;
use crate::core::relevance::pattern::KeywordPattern;
use crate::core::scan::is_code_file;
use crate::core::types::KeywordSet;

/// Scores must be strictly above this to count as a fuzzy match
pub const FUZZY_THRESHOLD: u8 = 70;

static DECLARATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:var|let|const|function)\s+([a-zA-Z_]\w*)\b").unwrap());

/// Decides whether a candidate file is relevant to a keyword set
#[derive(Debug, Clone)]
pub struct RelevanceMatcher {
    keywords: Arc<KeywordSet>,
    pattern: Arc<KeywordPattern>,
    extensions: Vec<String>,
}

impl RelevanceMatcher {
    /// Build a matcher, compiling the keyword pattern
    pub fn new(keywords: Arc<KeywordSet>, extensions: Vec<String>) -> Result<Self> {
        let pattern = Arc::new(KeywordPattern::new(&keywords)?);
        Ok(Self::with_pattern(keywords, pattern, extensions))
    }

    /// Build a matcher around an already compiled pattern
    pub fn with_pattern(
        keywords: Arc<KeywordSet>,
        pattern: Arc<KeywordPattern>,
        extensions: Vec<String>,
    ) -> Self {
        Self {
            keywords,
            pattern,
            extensions,
        }
    }

    /// Decide relevance of `file_path` with the given `content`
    pub fn matches(&self, file_path: &str, content: &str) -> bool {
        if !is_code_file(file_path, &self.extensions) || self.keywords.is_empty() {
            return false;
        }

        if self.filename_matches(file_path) {
            tracing::debug!("{} matched on file name", file_path);
            return true;
        }

        if self.pattern.is_match(content) {
            tracing::debug!("{} matched on content", file_path);
            return true;
        }

        if self.identifier_matches(content) {
            tracing::debug!("{} matched on identifier", file_path);
            return true;
        }

        false
    }

    fn filename_matches(&self, file_path: &str) -> bool {
        let name = Path::new(file_path)
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        self.fuzzy_hit(&name)
    }

    fn identifier_matches(&self, content: &str) -> bool {
        declared_identifiers(content)
            .any(|ident| self.fuzzy_hit(&ident.to_lowercase()))
    }

    fn fuzzy_hit(&self, candidate: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| partial_ratio(keyword, candidate) > FUZZY_THRESHOLD)
    }
}

/// Identifiers introduced by `var`/`let`/`const`/`function`
fn declared_identifiers(content: &str) -> impl Iterator<Item = &str> {
    DECLARATION_PATTERN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

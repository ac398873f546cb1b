//! Core data types for ctxbundle.
//!
//! Keyword sets, categories, per-file match results and run
//! statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Case-folded, deduplicated set of keywords driving relevance.
///
/// Every term is trimmed and lower-cased on insertion; empty terms
/// are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet {
    terms: BTreeSet<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from arbitrary terms, normalizing each one
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        set.extend(terms);
        set
    }

    /// Insert a term. Returns false if it was empty or already present.
    pub fn insert(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        self.terms.insert(term.to_lowercase())
    }

    pub fn extend<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            self.insert(term.as_ref());
        }
    }

    /// Case-insensitive membership test
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(&term.trim().to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_superset(&self, other: &KeywordSet) -> bool {
        self.terms.is_superset(&other.terms)
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Semantic bucket assigned to a matched file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Backend,
    Frontend,
    Database,
    Security,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Backend,
        Category::Frontend,
        Category::Database,
        Category::Security,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Backend => "backend",
            Category::Frontend => "frontend",
            Category::Database => "database",
            Category::Security => "security",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of processing one candidate file.
///
/// `content` and `category` are both `None` when the file is not
/// relevant; such results never reach the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Path relative to the scan root, `/`-separated
    pub path: String,

    /// Compressed content (never empty when present)
    pub content: Option<String>,

    pub category: Option<Category>,
}

impl MatchResult {
    pub fn relevant(path: String, content: String, category: Category) -> Self {
        Self {
            path,
            content: Some(content),
            category: Some(category),
        }
    }

    pub fn irrelevant(path: String) -> Self {
        Self {
            path,
            content: None,
            category: None,
        }
    }

    pub fn is_relevant(&self) -> bool {
        matches!(&self.content, Some(c) if !c.is_empty()) && self.category.is_some()
    }
}

/// Statistics from one bundling run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BundleStats {
    /// Candidate files handed to the pipeline
    pub files_scanned: usize,

    /// Files that made it into the bundle
    pub files_matched: usize,

    /// Files that could not be read or timed out
    pub files_skipped: usize,

    /// Size of the expanded keyword set
    pub keywords: usize,

    /// Pipeline duration in milliseconds
    pub duration_ms: u64,
}

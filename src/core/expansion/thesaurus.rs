//! Curated local mapping from domain terms to related terms.

use std::collections::{BTreeMap, BTreeSet};

/// Built-in domain vocabulary
const BUILTIN_ENTRIES: &[(&str, &[&str])] = &[
    (
        "image",
        &[
            "image",
            "img",
            "picture",
            "photo",
            "multer",
            "upload",
            "cloudinary",
            "file",
            "storage",
            "gallery",
            "thumbnail",
        ],
    ),
    (
        "server",
        &[
            "server", "api", "backend", "express", "route", "endpoint", "request", "response",
            "rest", "graphql", "socket",
        ],
    ),
    (
        "authentication",
        &[
            "auth", "login", "register", "jwt", "token", "password", "session", "oauth",
            "firebase", "passport",
        ],
    ),
    (
        "database",
        &[
            "database",
            "mongodb",
            "mongoose",
            "sql",
            "query",
            "schema",
            "model",
            "collection",
            "index",
            "aggregation",
        ],
    ),
    (
        "frontend",
        &[
            "react", "jsx", "component", "state", "props", "tailwind", "css", "html", "redux",
            "context", "hooks",
        ],
    ),
    (
        "security",
        &[
            "security", "encrypt", "hash", "cors", "xss", "csrf", "firewall", "https", "ssl",
            "tls",
        ],
    ),
];

/// Lookup table keyed by lower-cased term
#[derive(Debug, Clone, Default)]
pub struct Thesaurus {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl Thesaurus {
    /// Empty thesaurus
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in vocabulary
    pub fn builtin() -> Self {
        let mut thesaurus = Self::new();
        for (term, related) in BUILTIN_ENTRIES {
            thesaurus.add(term, related.iter().copied());
        }
        thesaurus
    }

    /// Built-in vocabulary extended with user entries
    pub fn with_extra(extra: &BTreeMap<String, Vec<String>>) -> Self {
        let mut thesaurus = Self::builtin();
        for (term, related) in extra {
            thesaurus.add(term, related.iter().map(String::as_str));
        }
        thesaurus
    }

    /// Add related terms under `term`, merging with any existing entry
    pub fn add<'a>(&mut self, term: &str, related: impl IntoIterator<Item = &'a str>) {
        let key = term.trim().to_lowercase();
        if key.is_empty() {
            return;
        }
        let entry = self.entries.entry(key).or_default();
        entry.extend(
            related
                .into_iter()
                .map(|r| r.trim().to_lowercase())
                .filter(|r| !r.is_empty()),
        );
    }

    /// Related terms for `term`, if it is a known key
    pub fn lookup(&self, term: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(&term.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Aggregated output: relevant files grouped by category.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::core::error::{BundleError, Result};
use crate::core::types::{Category, MatchResult};

/// One file in the bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleEntry {
    pub file: String,
    pub content: String,
}

/// Category -> entries, serialized as a plain JSON object.
///
/// Only categories with at least one entry are present.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ContextBundle {
    categories: BTreeMap<Category, Vec<BundleEntry>>,
}

impl ContextBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a result; returns false if it was not relevant.
    /// Entries keep the order in which results arrive.
    pub fn push(&mut self, result: MatchResult) -> bool {
        if !result.is_relevant() {
            return false;
        }
        let MatchResult {
            path,
            content: Some(content),
            category: Some(category),
        } = result
        else {
            return false;
        };

        self.categories
            .entry(category)
            .or_default()
            .push(BundleEntry {
                file: path,
                content,
            });
        true
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of entries across categories
    pub fn file_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn entries(&self, category: Category) -> &[BundleEntry] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over every entry with its category
    pub fn iter(&self) -> impl Iterator<Item = (Category, &BundleEntry)> {
        self.categories
            .iter()
            .flat_map(|(category, entries)| entries.iter().map(move |e| (*category, e)))
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the bundle as pretty-printed JSON to `path`
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        fs::write(path, json)
            .map_err(|e| BundleError::OutputFailed(format!("{}: {e}", path.display())))?;
        tracing::info!("Wrote {} files to {}", self.file_count(), path.display());
        Ok(())
    }
}

//! Related-term provider capability.

use async_trait::async_trait;

use crate::core::error::Result;

/// A pluggable source of terms related to a word.
///
/// Implementations may fail freely; the expander isolates every call
/// so a failure only drops that provider's contribution.
#[async_trait]
pub trait RelatedTermProvider: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &str;

    /// Terms related to `term` (already lower-cased)
    async fn related_terms(&self, term: &str) -> Result<Vec<String>>;
}

/// Split free text on commas and newlines into trimmed terms
pub(crate) fn split_terms(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(|t| {
            t.trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '*' | '"' | '\'' | '.'))
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

//! Lexical synonyms from a Datamuse-compatible word service.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::core::config::SynonymConfig;
use crate::core::error::{BundleError, Result};
use crate::core::expansion::provider::RelatedTermProvider;

#[derive(Debug, Deserialize)]
struct WordEntry {
    word: String,
}

pub struct SynonymProvider {
    client: Client,
    endpoint: String,
    max_results: usize,
}

impl SynonymProvider {
    pub fn new(client: Client, config: &SynonymConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            max_results: config.max_results,
        }
    }
}

#[async_trait]
impl RelatedTermProvider for SynonymProvider {
    fn name(&self) -> &str {
        "synonyms"
    }

    async fn related_terms(&self, term: &str) -> Result<Vec<String>> {
        let url = format!("{}/words", self.endpoint);
        let max = self.max_results.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[("rel_syn", term), ("max", max.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BundleError::provider(
                self.name(),
                format!("HTTP {}", response.status()),
            ));
        }

        let body = response.text().await?;
        parse_words(&body)
    }
}

/// Parse a `[{"word": ...}, ...]` response body
pub(crate) fn parse_words(body: &str) -> Result<Vec<String>> {
    let entries: Vec<WordEntry> = serde_json::from_str(body)?;
    Ok(entries
        .into_iter()
        .flat_map(|e| {
            // Multi-word synonyms contribute each word
            e.word
                .split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
        })
        .collect())
}

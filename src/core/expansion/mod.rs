//! Keyword expansion.
//!
//! Turns a handful of user words into a broader keyword set using a
//! curated local thesaurus plus any number of remote related-term
//! providers. Provider failures never fail an expansion; they only
//! shrink it.

pub mod completion;
pub mod provider;
pub mod synonyms;
pub mod thesaurus;
pub mod wikipedia;

pub use completion::CompletionProvider;
pub use provider::RelatedTermProvider;
pub use synonyms::SynonymProvider;
pub use thesaurus::Thesaurus;
pub use wikipedia::WikipediaProvider;

use futures::future::join_all;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::types::KeywordSet;

/// Expands user words into a keyword set
pub struct TermExpander {
    thesaurus: Thesaurus,
    providers: Vec<Arc<dyn RelatedTermProvider>>,
    timeout: Duration,
}

impl TermExpander {
    pub fn new(
        thesaurus: Thesaurus,
        providers: Vec<Arc<dyn RelatedTermProvider>>,
        timeout: Duration,
    ) -> Self {
        Self {
            thesaurus,
            providers,
            timeout,
        }
    }

    /// Build the thesaurus and every enabled provider from config.
    ///
    /// All remote providers share one HTTP client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings = &config.providers;
        let timeout = Duration::from_secs(settings.timeout_secs);
        let client = Client::builder().timeout(timeout).build()?;

        let mut providers: Vec<Arc<dyn RelatedTermProvider>> = Vec::new();

        if settings.synonyms.enabled {
            providers.push(Arc::new(SynonymProvider::new(
                client.clone(),
                &settings.synonyms,
            )));
        }

        if settings.wikipedia.enabled {
            providers.push(Arc::new(WikipediaProvider::new(
                client.clone(),
                &settings.wikipedia,
            )));
        }

        if settings.completion.enabled {
            match CompletionProvider::new(client, &settings.completion) {
                Some(provider) => providers.push(Arc::new(provider)),
                None => tracing::debug!("No completion API key configured, provider inactive"),
            }
        }

        let expander = Self::new(Thesaurus::with_extra(&config.thesaurus), providers, timeout);
        tracing::debug!(
            "Term expander ready: {} thesaurus entries, providers: {:?}",
            expander.thesaurus.len(),
            expander.provider_names()
        );

        Ok(expander)
    }

    /// Names of the registered providers
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Expand `words` into a keyword set.
    ///
    /// Each input is split on whitespace. Every resulting word is kept,
    /// along with its thesaurus entry and whatever the providers return.
    pub async fn expand<S: AsRef<str>>(&self, words: &[S]) -> KeywordSet {
        let mut keywords = KeywordSet::new();

        let tokens: Vec<String> = words
            .iter()
            .flat_map(|w| w.as_ref().split_whitespace())
            .map(str::to_lowercase)
            .collect();

        for word in &tokens {
            keywords.insert(word);

            if let Some(related) = self.thesaurus.lookup(word) {
                keywords.extend(related.iter().map(String::as_str));
            }

            let lookups = self
                .providers
                .iter()
                .map(|provider| self.lookup_isolated(provider.as_ref(), word));

            for terms in join_all(lookups).await {
                keywords.extend(terms.iter().map(String::as_str));
            }
        }

        tracing::info!(
            "Expanded {} word(s) into {} keywords",
            tokens.len(),
            keywords.len()
        );

        keywords
    }

    /// Run one provider lookup, turning errors and timeouts into an
    /// empty contribution
    async fn lookup_isolated(&self, provider: &dyn RelatedTermProvider, term: &str) -> Vec<String> {
        match tokio::time::timeout(self.timeout, provider.related_terms(term)).await {
            Ok(Ok(terms)) => {
                tracing::debug!("{} returned {} terms for '{}'", provider.name(), terms.len(), term);
                terms
            }
            Ok(Err(e)) => {
                tracing::warn!("Provider {} failed for '{}': {}", provider.name(), term, e);
                Vec::new()
            }
            Err(_) => {
                tracing::warn!(
                    "Provider {} timed out after {:?} for '{}'",
                    provider.name(),
                    self.timeout,
                    term
                );
                Vec::new()
            }
        }
    }
}

//! Article-link expansion from a MediaWiki API.
//!
//! The related terms for a word are the titles of the pages linked
//! from the article of the same name.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::core::config::WikipediaConfig;
use crate::core::error::{BundleError, Result};
use crate::core::expansion::provider::RelatedTermProvider;

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: Option<Query>,
}

#[derive(Debug, Deserialize)]
struct Query {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    links: Vec<Link>,
}

#[derive(Debug, Deserialize)]
struct Link {
    title: String,
}

pub struct WikipediaProvider {
    client: Client,
    endpoint: String,
    user_agent: String,
    max_links: usize,
}

impl WikipediaProvider {
    pub fn new(client: Client, config: &WikipediaConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            user_agent: config.user_agent.clone(),
            max_links: config.max_links,
        }
    }
}

#[async_trait]
impl RelatedTermProvider for WikipediaProvider {
    fn name(&self) -> &str {
        "wikipedia"
    }

    async fn related_terms(&self, term: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("prop", "links"),
                ("titles", term),
                ("pllimit", "max"),
                ("plnamespace", "0"),
                ("redirects", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BundleError::provider(
                self.name(),
                format!("HTTP {}", response.status()),
            ));
        }

        let body = response.text().await?;
        parse_links(term, &body, self.max_links)
    }
}

/// The word itself plus up to `max_links` lower-cased link titles.
/// A missing article yields just the word.
pub(crate) fn parse_links(term: &str, body: &str, max_links: usize) -> Result<Vec<String>> {
    let parsed: QueryResponse = serde_json::from_str(body)?;

    let mut terms = vec![term.to_lowercase()];
    let links = parsed
        .query
        .into_iter()
        .flat_map(|q| q.pages)
        .filter(|p| !p.missing)
        .flat_map(|p| p.links)
        .take(max_links)
        .map(|l| l.title.trim().to_lowercase())
        .filter(|t| !t.is_empty());
    terms.extend(links);

    Ok(terms)
}

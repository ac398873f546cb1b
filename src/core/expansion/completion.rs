//! Generative related-term suggestions from an OpenAI-compatible
//! chat completions endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::core::config::CompletionConfig;
use crate::core::error::{BundleError, Result};
use crate::core::expansion::provider::{split_terms, RelatedTermProvider};

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(default)]
    content: Option<String>,
}

pub struct CompletionProvider {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    max_tokens: u32,
}

impl CompletionProvider {
    /// Returns `None` when no API key is configured
    pub fn new(client: Client, config: &CompletionConfig) -> Option<Self> {
        let api_key = config.api_key.clone().filter(|k| !k.trim().is_empty())?;
        Some(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl RelatedTermProvider for CompletionProvider {
    fn name(&self) -> &str {
        "completion"
    }

    async fn related_terms(&self, term: &str) -> Result<Vec<String>> {
        let url = format!("{}/chat/completions", self.endpoint);
        let body = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "messages": [{
                "role": "user",
                "content": format!("Suggest related terms for: {term}. Reply with a comma-separated list only."),
            }],
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BundleError::provider(
                self.name(),
                format!("HTTP {}", response.status()),
            ));
        }

        let text = response.text().await?;
        parse_completion(&text)
    }
}

/// Extract terms from the first choice's message content
pub(crate) fn parse_completion(body: &str) -> Result<Vec<String>> {
    let parsed: ChatResponse = serde_json::from_str(body)?;
    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_default();
    Ok(split_terms(&content))
}

//! Expand command - show the keyword set a bundle run would use

use crate::cli::output::{colors, format_keywords, print_header, print_json};
use crate::cli::{resolve_keywords, OutputFormat};
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the expand command
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Keywords to expand (prompted on stdin when omitted)
    pub keywords: Vec<String>,

    /// Use only the built-in thesaurus, no network lookups
    #[arg(long)]
    pub offline: bool,
}

/// Expansion response
#[derive(Debug, Serialize)]
pub struct ExpandResponse {
    pub input: Vec<String>,
    pub providers: Vec<String>,
    pub keywords: Vec<String>,
}

/// Execute the expand command
pub async fn execute(
    args: ExpandArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let words = resolve_keywords(args.keywords)?;
    let keywords = services.expander.expand(&words).await;

    let response = ExpandResponse {
        input: words,
        providers: services
            .expander
            .provider_names()
            .into_iter()
            .map(String::from)
            .collect(),
        keywords: keywords.iter().map(String::from).collect(),
    };

    match format {
        OutputFormat::Human => {
            print_header(&format!(
                "{} keywords from {}",
                response.keywords.len(),
                response.input.join(" ")
            ));
            if response.providers.is_empty() {
                println!("  {}", colors::dim("providers: none (thesaurus only)"));
            } else {
                println!(
                    "  {}",
                    colors::dim(&format!("providers: {}", response.providers.join(", ")))
                );
            }
            println!("  {}", format_keywords(keywords.iter()));
        }
        OutputFormat::Json => {
            print_json(&response)?;
        }
    }

    Ok(())
}

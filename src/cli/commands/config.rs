//! Config command - show current configuration

use crate::cli::output::{colors, print_header, print_json};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub config_file_exists: bool,
    pub providers: Vec<String>,
    pub config: Config,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = XdgDirs::new().config_file();

    let response = ConfigResponse {
        config_file: config_file.to_string_lossy().into_owned(),
        config_file_exists: config_file.exists(),
        providers: services
            .expander
            .provider_names()
            .into_iter()
            .map(String::from)
            .collect(),
        config: services.config.redacted(),
    };

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            let marker = if response.config_file_exists {
                ""
            } else {
                " (not found, using defaults)"
            };
            println!(
                "  config_file: {}{}",
                colors::file_path(&response.config_file),
                colors::dim(marker)
            );
            println!("  active providers: {:?}", response.providers);
            println!();
            print!("{}", toml::to_string_pretty(&response.config)?);
        }
        OutputFormat::Json => {
            print_json(&response)?;
        }
    }

    Ok(())
}

//! Configuration management for ctxbundle.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{BundleError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Extra curated entries: term -> related terms
    #[serde(default)]
    pub thesaurus: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub output: OutputConfig,
}

/// File discovery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Eligible file extensions, with leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names pruned from the walk
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// File names never presented to the matcher
    #[serde(default = "default_exclude_files")]
    pub exclude_files: Vec<String>,

    /// Extra glob patterns to exclude
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,

    /// Per-file processing timeout
    #[serde(default = "default_file_timeout")]
    pub file_timeout_secs: u64,
}

/// Related-term provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProvidersConfig {
    /// Per-lookup timeout, shared by all providers
    #[serde(default = "default_provider_timeout")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub synonyms: SynonymConfig,

    #[serde(default)]
    pub wikipedia: WikipediaConfig,

    #[serde(default)]
    pub completion: CompletionConfig,
}

/// Online thesaurus (Datamuse-compatible)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SynonymConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Base URL; `/words` is appended
    #[serde(default = "default_synonym_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_max_synonyms")]
    pub max_results: usize,
}

/// Encyclopedia link-graph (MediaWiki API)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WikipediaConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Full `api.php` URL
    #[serde(default = "default_wikipedia_endpoint")]
    pub endpoint: String,

    /// Wikimedia requires an identifying User-Agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_max_links")]
    pub max_links: usize,
}

/// Generative completion (OpenAI-compatible chat API)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompletionConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Base URL; `/chat/completions` is appended
    #[serde(default = "default_completion_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_completion_model")]
    pub model: String,

    /// Falls back to OPENAI_API_KEY; provider is inactive without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_completion_max_tokens")]
    pub max_tokens: u32,
}

/// Artifact configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec![
        ".js".to_string(),
        ".jsx".to_string(),
        ".json".to_string(),
        ".cjs".to_string(),
        ".html".to_string(),
    ]
}

fn default_exclude_dirs() -> Vec<String> {
    vec![
        "node_modules".to_string(),
        "dist".to_string(),
        "util".to_string(),
        "controllers".to_string(),
    ]
}

fn default_exclude_files() -> Vec<String> {
    vec!["package-lock.json".to_string(), "errorHandler.js".to_string()]
}

fn default_max_file_size() -> usize {
    10
}

fn default_file_timeout() -> u64 {
    30
}

fn default_provider_timeout() -> u64 {
    10
}

fn default_synonym_endpoint() -> String {
    "https://api.datamuse.com".to_string()
}

fn default_max_synonyms() -> usize {
    50
}

fn default_wikipedia_endpoint() -> String {
    "https://en.wikipedia.org/w/api.php".to_string()
}

fn default_user_agent() -> String {
    format!("ctxbundle/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_links() -> usize {
    500
}

fn default_completion_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_completion_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_completion_max_tokens() -> u32 {
    50
}

fn default_output_path() -> PathBuf {
    PathBuf::from("related_files.json")
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
            exclude_files: default_exclude_files(),
            exclude_patterns: Vec::new(),
            max_file_size_mb: default_max_file_size(),
            file_timeout_secs: default_file_timeout(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_provider_timeout(),
            synonyms: SynonymConfig::default(),
            wikipedia: WikipediaConfig::default(),
            completion: CompletionConfig::default(),
        }
    }
}

impl Default for SynonymConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_synonym_endpoint(),
            max_results: default_max_synonyms(),
        }
    }
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_wikipedia_endpoint(),
            user_agent: default_user_agent(),
            max_links: default_max_links(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_completion_endpoint(),
            model: default_completion_model(),
            api_key: None,
            max_tokens: default_completion_max_tokens(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BundleError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. CTXBUNDLE_CONFIG env var
    /// 2. XDG config file (~/.config/ctxbundle/config.toml)
    /// 3. ./ctxbundle.toml in the working directory
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let mut config = if let Ok(config_path) = env::var("CTXBUNDLE_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("ctxbundle.toml").exists() {
                Self::from_file("ctxbundle.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(extensions) = env::var("CTXBUNDLE_EXTENSIONS") {
            let parsed: Vec<String> = extensions
                .split(',')
                .map(|e| e.trim().to_lowercase())
                .filter(|e| !e.is_empty())
                .collect();
            if !parsed.is_empty() {
                self.scan.extensions = parsed;
            }
        }
        if let Ok(max_size) = env::var("CTXBUNDLE_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.scan.max_file_size_mb = size;
            }
        }
        if let Ok(timeout) = env::var("CTXBUNDLE_FILE_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.scan.file_timeout_secs = t;
            }
        }
        if let Ok(timeout) = env::var("CTXBUNDLE_PROVIDER_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.providers.timeout_secs = t;
            }
        }
        if let Ok(output) = env::var("CTXBUNDLE_OUTPUT") {
            if !output.trim().is_empty() {
                self.output.path = PathBuf::from(output);
            }
        }
        if self.providers.completion.api_key.is_none() {
            if let Ok(key) = env::var("OPENAI_API_KEY") {
                if !key.trim().is_empty() {
                    self.providers.completion.api_key = Some(key);
                }
            }
        }
    }

    /// Turn off every provider that needs the network
    pub fn disable_remote_providers(&mut self) {
        self.providers.synonyms.enabled = false;
        self.providers.wikipedia.enabled = false;
        self.providers.completion.enabled = false;
    }

    /// Copy of this config safe to print
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.providers.completion.api_key.is_some() {
            copy.providers.completion.api_key = Some("***".to_string());
        }
        copy
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.scan.extensions.is_empty() {
            return Err(BundleError::ConfigError(
                "At least one file extension must be allowed".to_string(),
            ));
        }

        if let Some(bad) = self.scan.extensions.iter().find(|e| !e.starts_with('.')) {
            return Err(BundleError::ConfigError(format!(
                "Extension '{bad}' must start with '.'"
            )));
        }

        if self.scan.max_file_size_mb == 0 {
            return Err(BundleError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if self.scan.file_timeout_secs == 0 {
            return Err(BundleError::ConfigError(
                "File timeout must be non-zero".to_string(),
            ));
        }

        if self.providers.timeout_secs == 0 {
            return Err(BundleError::ConfigError(
                "Provider timeout must be non-zero".to_string(),
            ));
        }

        let synonyms = &self.providers.synonyms;
        if synonyms.enabled && (synonyms.endpoint.trim().is_empty() || synonyms.max_results == 0) {
            return Err(BundleError::ConfigError(
                "Synonym provider needs an endpoint and a non-zero max_results".to_string(),
            ));
        }

        let wikipedia = &self.providers.wikipedia;
        if wikipedia.enabled && (wikipedia.endpoint.trim().is_empty() || wikipedia.max_links == 0) {
            return Err(BundleError::ConfigError(
                "Wikipedia provider needs an endpoint and a non-zero max_links".to_string(),
            ));
        }

        let completion = &self.providers.completion;
        if completion.enabled && completion.endpoint.trim().is_empty() {
            return Err(BundleError::ConfigError(
                "Completion provider needs an endpoint".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Extensions: {:?}", self.scan.extensions);
        tracing::info!("  Excluded dirs: {:?}", self.scan.exclude_dirs);
        tracing::info!("  Excluded files: {:?}", self.scan.exclude_files);
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.scan.exclude_patterns.len()
        );
        tracing::info!("  Max file size: {} MB", self.scan.max_file_size_mb);
        tracing::info!("  File timeout: {}s", self.scan.file_timeout_secs);
        tracing::info!("  Provider timeout: {}s", self.providers.timeout_secs);
        tracing::info!("  Synonyms: {}", self.providers.synonyms.enabled);
        tracing::info!("  Wikipedia: {}", self.providers.wikipedia.enabled);
        tracing::info!(
            "  Completion: {} (api key {})",
            self.providers.completion.enabled,
            if self.providers.completion.api_key.is_some() {
                "set"
            } else {
                "unset"
            }
        );
        tracing::info!("  Thesaurus additions: {}", self.thesaurus.len());
        tracing::info!("  Output: {:?}", self.output.path);
    }
}

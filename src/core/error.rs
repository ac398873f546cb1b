//! Error types and error handling for ctxbundle.
//!
//! Per-file and per-provider failures are recoverable: the pipeline
//! and the term expander log them and carry on. Only a root that
//! cannot be enumerated or an artifact that cannot be written ends a
//! run.

use thiserror::Error;

/// Result type alias for ctxbundle operations
pub type Result<T> = std::result::Result<T, BundleError>;

/// Main error type for ctxbundle
#[derive(Error, Debug)]
pub enum BundleError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Scan failed: {0}")]
    ScanFailed(String),

    #[error("Provider '{provider}' failed: {message}")]
    ProviderFailed { provider: String, message: String },

    #[error("Failed to read file: {0}")]
    FileReadFailed(String),

    #[error("Invalid keywords: {0}")]
    InvalidKeywords(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to write output: {0}")]
    OutputFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl BundleError {
    /// Shorthand for a provider failure
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        BundleError::ProviderFailed {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Errors that end a run instead of being absorbed per file or
    /// per provider
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            BundleError::InvalidPath(_)
                | BundleError::ScanFailed(_)
                | BundleError::OutputFailed(_)
                | BundleError::ConfigError(_)
                | BundleError::InvalidKeywords(_)
        )
    }

    /// Errors the pipeline or expander recovers from locally
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BundleError::ProviderFailed { .. }
                | BundleError::FileReadFailed(_)
                | BundleError::HttpError(_)
        )
    }
}

//! Unified service container for ctxbundle
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::expansion::TermExpander;
use crate::core::pipeline::BundlePipeline;
use std::sync::Arc;

/// Unified services container
///
/// Every CLI command receives this same struct.
#[derive(Clone)]
pub struct Services {
    /// Keyword expander with its providers
    pub expander: Arc<TermExpander>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Result<Self> {
        let expander = Arc::new(TermExpander::from_config(&config)?);

        Ok(Self {
            expander,
            config: Arc::new(config),
        })
    }

    /// Create a BundlePipeline from the scan settings
    ///
    /// Pipelines are created per run; they hold no state between runs.
    pub fn create_pipeline(&self) -> Result<BundlePipeline> {
        BundlePipeline::from_config(&self.config.scan)
    }
}

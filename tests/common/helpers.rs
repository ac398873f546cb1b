// Test helper functions

use ctxbundle::core::bundle::ContextBundle;
use ctxbundle::core::config::Config;
use ctxbundle::core::expansion::TermExpander;
use ctxbundle::core::pipeline::BundlePipeline;
use ctxbundle::core::services::Services;
use ctxbundle::core::types::{BundleStats, KeywordSet};
use std::path::Path;
use std::sync::Arc;

/// Default configuration with every remote provider disabled
#[allow(dead_code)] // Used in integration tests
pub fn offline_config() -> Config {
    let mut config = Config::default();
    config.disable_remote_providers();
    config
}

/// Create offline test services
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services() -> Arc<Services> {
    Arc::new(Services::new(offline_config()).expect("Failed to create services"))
}

/// Expand words using only the built-in thesaurus
#[allow(dead_code)] // Used in integration tests
pub async fn expand_offline(words: &[&str]) -> KeywordSet {
    let expander = TermExpander::from_config(&offline_config()).unwrap();
    expander.expand(words).await
}

/// Expand `words` offline and bundle `root` with default scan settings
#[allow(dead_code)] // Used in integration tests
pub async fn bundle_offline(root: &Path, words: &[&str]) -> (ContextBundle, BundleStats) {
    let keywords = Arc::new(expand_offline(words).await);
    let pipeline = BundlePipeline::from_config(&offline_config().scan).unwrap();
    pipeline
        .bundle_directory(root, keywords)
        .await
        .expect("Bundling should succeed")
}

/// Parse a written artifact
#[allow(dead_code)] // Used in integration tests
pub fn read_artifact(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).expect("Artifact should exist");
    serde_json::from_str(&text).expect("Artifact should be valid JSON")
}

//! Tests for the expand command

use super::test_helpers::expand_args;
use crate::common::create_test_services;
use ctxbundle::cli::commands::expand;
use ctxbundle::cli::OutputFormat;

#[tokio::test]
async fn test_expand_json() {
    let services = create_test_services();

    let result = expand::execute(expand_args(&["image"]), &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_expand_human_multiple_words() {
    let services = create_test_services();

    let result = expand::execute(
        expand_args(&["server", "security"]),
        &services,
        OutputFormat::Human,
    )
    .await;
    assert!(result.is_ok());
}

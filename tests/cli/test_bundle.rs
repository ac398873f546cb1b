//! Tests for the bundle command

use super::test_helpers::bundle_args;
use crate::common::{create_test_services, read_artifact, TestRepo};
use ctxbundle::cli::commands::bundle;
use ctxbundle::cli::OutputFormat;
use tempfile::TempDir;

#[tokio::test]
async fn test_bundle_writes_artifact() {
    let repo = TestRepo::mern();
    let out_dir = TempDir::new().unwrap();
    let output = repo.output_path(&out_dir);
    let services = create_test_services();

    bundle::execute(
        bundle_args(&["image"], repo.path(), output.clone()),
        &services,
        OutputFormat::Json,
    )
    .await
    .unwrap();

    let artifact = read_artifact(&output);
    assert_eq!(
        artifact["other"][0]["file"].as_str(),
        Some("uploads/imageController.js")
    );
    assert_eq!(
        artifact["backend"][0]["file"].as_str(),
        Some("server/routes/upload.js")
    );
    assert!(artifact.get("database").is_none());
}

#[tokio::test]
async fn test_bundle_human_output() {
    let repo = TestRepo::mern();
    let out_dir = TempDir::new().unwrap();
    let output = repo.output_path(&out_dir);
    let services = create_test_services();

    let mut args = bundle_args(&["authentication"], repo.path(), output.clone());
    args.quiet = false;

    bundle::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap();

    let artifact = read_artifact(&output);
    assert_eq!(
        artifact["security"][0]["file"].as_str(),
        Some("middleware/auth.js")
    );
}

#[tokio::test]
async fn test_bundle_no_matches_writes_empty_object() {
    let repo = TestRepo::mern();
    let out_dir = TempDir::new().unwrap();
    let output = repo.output_path(&out_dir);
    let services = create_test_services();

    bundle::execute(
        bundle_args(&["kubernetes"], repo.path(), output.clone()),
        &services,
        OutputFormat::Json,
    )
    .await
    .unwrap();

    assert_eq!(read_artifact(&output), serde_json::json!({}));
}

#[tokio::test]
async fn test_bundle_invalid_root() {
    let out_dir = TempDir::new().unwrap();
    let missing = out_dir.path().join("does-not-exist");
    let services = create_test_services();

    let result = bundle::execute(
        bundle_args(&["image"], &missing, out_dir.path().join("out.json")),
        &services,
        OutputFormat::Human,
    )
    .await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("does-not-exist"), "unexpected error: {err}");
    assert!(!out_dir.path().join("out.json").exists());
}

#[tokio::test]
async fn test_bundle_unwritable_output() {
    let repo = TestRepo::mern();
    let out_dir = TempDir::new().unwrap();
    let services = create_test_services();

    let result = bundle::execute(
        bundle_args(
            &["image"],
            repo.path(),
            out_dir.path().join("missing").join("out.json"),
        ),
        &services,
        OutputFormat::Json,
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_rerun_ignores_artifact_inside_root() {
    let repo = TestRepo::mern();
    let output = repo.path().join("related_files.json");
    let services = create_test_services();

    for _ in 0..2 {
        bundle::execute(
            bundle_args(&["image"], repo.path(), output.clone()),
            &services,
            OutputFormat::Json,
        )
        .await
        .unwrap();
    }

    let artifact = read_artifact(&output);
    let other = artifact["other"].as_array().unwrap();
    assert_eq!(other.len(), 1);
    assert_eq!(other[0]["file"].as_str(), Some("uploads/imageController.js"));
}

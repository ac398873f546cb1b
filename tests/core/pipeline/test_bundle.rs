// End-to-end bundling of synthetic project trees

use crate::common::{bundle_offline, expand_offline, offline_config, read_artifact, TestRepo};
use ctxbundle::core::pipeline::BundlePipeline;
use ctxbundle::core::types::Category;
use std::collections::HashSet;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_image_bundle_over_mern_project() {
    let repo = TestRepo::mern();

    let (bundle, stats) = bundle_offline(repo.path(), &["image"]).await;

    // server/index.js, server/routes/upload.js, uploads/imageController.js,
    // src/components/Gallery.jsx, models/Post.js, middleware/auth.js
    assert_eq!(stats.files_scanned, 6);
    assert_eq!(stats.files_matched, 3);
    assert_eq!(stats.files_skipped, 0);

    let other = bundle.entries(Category::Other);
    assert_eq!(other.len(), 1);
    assert_eq!(other[0].file, "uploads/imageController.js");
    assert_eq!(other[0].content, "const cloudinaryUpload = multer();");

    let backend = bundle.entries(Category::Backend);
    assert_eq!(backend.len(), 1);
    assert_eq!(backend[0].file, "server/routes/upload.js");
    assert_eq!(
        backend[0].content,
        "const multer = require('multer'); router.post('/image', multer().single('image'));"
    );

    let frontend = bundle.entries(Category::Frontend);
    assert_eq!(frontend.len(), 1);
    assert_eq!(frontend[0].file, "src/components/Gallery.jsx");

    assert!(bundle.entries(Category::Database).is_empty());
    assert!(bundle.entries(Category::Security).is_empty());
}

#[tokio::test]
async fn test_excluded_files_never_appear() {
    let repo = TestRepo::mern();

    let (bundle, _) = bundle_offline(repo.path(), &["image", "server", "database"]).await;

    let files: HashSet<&str> = bundle.iter().map(|(_, e)| e.file.as_str()).collect();
    for excluded in [
        "package-lock.json",
        "node_modules/multer/index.js",
        "controllers/imageUpload.js",
        "util/errorHandler.js",
        ".cache/image.js",
        "README.md",
    ] {
        assert!(!files.contains(excluded), "{excluded} leaked into the bundle");
    }
}

#[tokio::test]
async fn test_controller_under_server_is_backend() {
    let repo = TestRepo::with_files(&[(
        "server/uploads/imageController.js",
        "const cloudinaryUpload = multer();\n",
    )]);

    let (bundle, _) = bundle_offline(repo.path(), &["image"]).await;

    let backend = bundle.entries(Category::Backend);
    assert_eq!(backend.len(), 1);
    assert_eq!(backend[0].file, "server/uploads/imageController.js");
}

#[tokio::test]
async fn test_filename_hit_without_keyword_lines_is_dropped() {
    let repo = TestRepo::mern();

    // "index" is a curated database term, so server/index.js passes the
    // filename check but has no line containing it
    let (bundle, _) = bundle_offline(repo.path(), &["database"]).await;

    let database = bundle.entries(Category::Database);
    assert_eq!(database.len(), 1);
    assert_eq!(database[0].file, "models/Post.js");
    assert!(bundle.entries(Category::Backend).is_empty());
}

#[tokio::test]
async fn test_empty_keywords_give_empty_mapping() {
    let repo = TestRepo::mern();

    let (bundle, stats) = bundle_offline(repo.path(), &[]).await;

    assert!(bundle.is_empty());
    assert_eq!(stats.files_matched, 0);
    assert_eq!(bundle.to_json_pretty().unwrap(), "{}");
}

#[tokio::test]
async fn test_artifact_shape() {
    let repo = TestRepo::mern();
    let out_dir = TempDir::new().unwrap();
    let output = repo.output_path(&out_dir);

    let (bundle, _) = bundle_offline(repo.path(), &["image", "authentication"]).await;
    bundle.write_json(&output).unwrap();

    let artifact = read_artifact(&output);
    let object = artifact.as_object().unwrap();

    assert!(!object.is_empty());
    for (category, entries) in object {
        assert!(
            ["backend", "frontend", "database", "security", "other"].contains(&category.as_str())
        );
        let entries = entries.as_array().unwrap();
        assert!(!entries.is_empty(), "{category} is empty");
        for entry in entries {
            assert!(!entry["file"].as_str().unwrap().is_empty());
            assert!(!entry["content"].as_str().unwrap().is_empty());
        }
    }
    assert!(object.contains_key("security"));
}

#[tokio::test]
async fn test_single_worker_gives_same_sets() {
    let repo = TestRepo::mern();
    let keywords = Arc::new(expand_offline(&["image"]).await);
    let scan = offline_config().scan;

    let parallel = BundlePipeline::from_config(&scan).unwrap();
    let serial = BundlePipeline::new(
        ctxbundle::core::scan::FileWalker::from_config(&scan).unwrap(),
        std::time::Duration::from_secs(30),
        1,
    );

    let (a, _) = parallel
        .bundle_directory(repo.path(), Arc::clone(&keywords))
        .await
        .unwrap();
    let (b, _) = serial
        .bundle_directory(repo.path(), keywords)
        .await
        .unwrap();

    for category in Category::ALL {
        let left: HashSet<_> = a.entries(category).iter().cloned().map(|e| e.file).collect();
        let right: HashSet<_> = b.entries(category).iter().cloned().map(|e| e.file).collect();
        assert_eq!(left, right, "{category}");
    }
}

// Matcher, compressor and categorizer properties on realistic sources

use ctxbundle::core::relevance::{
    categorize, partial_ratio, ContentCompressor, RelevanceMatcher, FUZZY_THRESHOLD,
};
use ctxbundle::core::types::{Category, KeywordSet};
use std::sync::Arc;

const ROUTE_FILE: &str = r#"/**
 * Image routes
 */
const express = require('express');
const multer = require('multer'); // memory storage
const router = express.Router();

router.post('/', multer().single('image'), async (req, res) => {
    const result = await cloudinary.uploader.upload(req.file.path);
    res.json(result);
});

module.exports = router;
"#;

fn extensions() -> Vec<String> {
    [".js", ".jsx", ".json", ".cjs", ".html"]
        .iter()
        .map(|e| e.to_string())
        .collect()
}

fn matcher(terms: &[&str]) -> RelevanceMatcher {
    RelevanceMatcher::new(Arc::new(KeywordSet::from_terms(terms)), extensions()).unwrap()
}

#[test]
fn test_fuzzy_threshold_boundary() {
    // 80 clears the bar, 67 does not
    assert!(partial_ratio("login", "logon.js") > FUZZY_THRESHOLD);
    assert!(partial_ratio("api", "app.js") <= FUZZY_THRESHOLD);

    assert!(matcher(&["login"]).matches("auth/logon.js", "const x = 1;"));
    assert!(!matcher(&["api"]).matches("app.js", "const x = 1;"));
}

#[test]
fn test_ineligible_extension_never_matches() {
    let m = matcher(&["image"]);
    assert!(!m.matches("docs/image.md", "image image image"));
    assert!(!m.matches("image.png", "image"));
}

#[test]
fn test_matcher_is_monotonic() {
    let files = [
        ("routes/upload.js", ROUTE_FILE),
        ("src/Navbar.jsx", "export default function Navbar() {}"),
        ("lib/math.js", "const total = 1 + 2;"),
        ("models/User.js", "const userSchema = new Schema({});"),
    ];

    let small = matcher(&["cloudinary"]);
    let large = matcher(&["cloudinary", "schema", "navbar", "zebra"]);

    for (path, content) in files {
        if small.matches(path, content) {
            assert!(large.matches(path, content), "{path} lost its match");
        }
    }
    assert!(large.matches("models/User.js", "const userSchema = new Schema({});"));
}

#[test]
fn test_compressor_on_route_file() {
    let keywords = KeywordSet::from_terms(["multer", "image", "cloudinary"]);
    let compressor = ContentCompressor::new(&keywords).unwrap();

    let compressed = compressor.compress(ROUTE_FILE);

    assert_eq!(
        compressed,
        "const multer = require('multer'); \
         router.post('/', multer().single('image'), async (req, res) => { \
         const result = await cloudinary.uploader.upload(req.file.path);"
    );
    assert!(!compressed.contains("memory storage"));
    assert!(!compressed.contains('\n'));
    assert_eq!(compressor.compress(&compressed), compressed);
}

#[test]
fn test_categorizer_is_pure_and_ordered() {
    let paths = [
        ("backend/auth/login.js", Category::Backend),
        ("server/models/User.js", Category::Backend),
        ("src/auth/Login.jsx", Category::Frontend),
        ("models/auth.js", Category::Database),
        ("lib/authz.js", Category::Security),
        ("lib/helpers.js", Category::Other),
    ];

    for (path, expected) in paths {
        assert_eq!(categorize(path, ""), expected, "{path}");
        assert_eq!(categorize(path, "server src models auth"), expected);
    }
}

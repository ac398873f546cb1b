// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository fixture for creating synthetic project trees
#[allow(dead_code)] // Used in integration tests
pub struct TestRepo {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestRepo {
    /// A small MERN-style project with files in every category plus
    /// the usual noise that must never reach the matcher
    #[allow(dead_code)] // Used in integration tests
    pub fn mern() -> Self {
        Self::with_files(&[
            (
                "server/index.js",
                "const express = require('express');\nconst cors = require('cors');\nconst app = express();\napp.use(cors());\napp.listen(3000);\n",
            ),
            (
                "server/routes/upload.js",
                "// upload routes\nconst router = require('express').Router();\nconst multer = require('multer');\nrouter.post('/image', multer().single('image'));\nmodule.exports = router;\n",
            ),
            (
                "uploads/imageController.js",
                "const cloudinaryUpload = multer();\n",
            ),
            (
                "src/components/Gallery.jsx",
                "import React from 'react';\nexport const Gallery = () => <img alt=\"\" />;\n",
            ),
            (
                "models/Post.js",
                "const mongoose = require('mongoose');\nconst PostSchema = new mongoose.Schema({ title: String });\n",
            ),
            (
                "middleware/auth.js",
                "const jwt = require('jsonwebtoken');\nmodule.exports = (req) => jwt.verify(req.token);\n",
            ),
            ("README.md", "# Image gallery\n"),
            (
                "package-lock.json",
                "{ \"name\": \"image-gallery\", \"lockfileVersion\": 3 }\n",
            ),
            ("node_modules/multer/index.js", "module.exports = multer;\n"),
            ("controllers/imageUpload.js", "const image = upload();\n"),
            ("util/errorHandler.js", "const image = null;\n"),
            (".cache/image.js", "const image = 1;\n"),
        ])
    }

    /// Create with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Get path to the repository
    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path for an artifact written next to (not inside) the tree
    #[allow(dead_code)] // Used in integration tests
    pub fn output_path(&self, out_dir: &TempDir) -> PathBuf {
        out_dir.path().join("related_files.json")
    }
}

//! File system walker with deny-list filtering.
//!
//! Traverses directory trees, pruning excluded directories and
//! skipping excluded file names. Handles errors gracefully
//! (permission denied, etc.) without crashing.

use glob::Pattern;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::config::ScanConfig;
use crate::core::error::{BundleError, Result};
use crate::core::scan::is_code_file;

/// File system walker producing candidate files
#[derive(Debug, Clone)]
pub struct FileWalker {
    /// Allowed extensions (e.g., ".js", ".jsx")
    extensions: Vec<String>,

    /// Directory names pruned from the walk
    exclude_dirs: HashSet<String>,

    /// Exact file names to skip
    exclude_files: HashSet<String>,

    /// Extra glob patterns to exclude
    exclude_patterns: Vec<Pattern>,

    /// Maximum file size in bytes (skip larger files)
    max_file_size_bytes: u64,

    /// Canonical paths of individual files to skip
    exclude_paths: HashSet<PathBuf>,
}

impl FileWalker {
    /// Create a new file walker
    ///
    /// # Arguments
    ///
    /// * `extensions` - Allowed file extensions with leading dot
    /// * `exclude_dirs` - Directory names to prune
    /// * `exclude_files` - File names to skip
    /// * `exclude_patterns` - Extra glob patterns to exclude
    /// * `max_file_size_mb` - Maximum file size in megabytes
    ///
    /// # Returns
    ///
    /// A new `FileWalker` instance or an error if a pattern is
    /// invalid
    pub fn new(
        extensions: Vec<String>,
        exclude_dirs: Vec<String>,
        exclude_files: Vec<String>,
        exclude_patterns: Vec<String>,
        max_file_size_mb: usize,
    ) -> Result<Self> {
        let patterns = exclude_patterns
            .into_iter()
            .map(|p| {
                Pattern::new(&p).map_err(|e| {
                    BundleError::ConfigError(format!("Invalid exclude pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            extensions,
            exclude_dirs: exclude_dirs.into_iter().collect(),
            exclude_files: exclude_files.into_iter().collect(),
            exclude_patterns: patterns,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
            exclude_paths: HashSet::new(),
        })
    }

    /// Build a walker from the `[scan]` config section
    pub fn from_config(scan: &ScanConfig) -> Result<Self> {
        Self::new(
            scan.extensions.clone(),
            scan.exclude_dirs.clone(),
            scan.exclude_files.clone(),
            scan.exclude_patterns.clone(),
            scan.max_file_size_mb,
        )
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Skip one specific file, e.g. the bundle a previous run wrote
    /// into the tree. The file does not need to exist yet.
    pub fn exclude_path(&mut self, path: &Path) {
        match resolve_path(path) {
            Some(resolved) => {
                tracing::debug!("Excluding {:?} from the walk", resolved);
                self.exclude_paths.insert(resolved);
            }
            None => tracing::debug!("Cannot resolve {:?}, not excluded", path),
        }
    }

    /// Collect all candidate files under a directory
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` when `root` does not exist or is not a
    /// directory. Errors on individual entries are logged and
    /// skipped.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(BundleError::InvalidPath(format!(
                "{} does not exist",
                root.display()
            )));
        }
        if !root.is_dir() {
            return Err(BundleError::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| self.should_process_entry(e, root))
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let path = entry.path();

                    if let Ok(metadata) = entry.metadata() {
                        if metadata.len() > self.max_file_size_bytes {
                            tracing::debug!(
                                "Skipping large file: {:?} ({} bytes)",
                                path,
                                metadata.len()
                            );
                            continue;
                        }
                    }

                    if self.is_candidate(path) {
                        files.push(path.to_path_buf());
                    }
                }
                // The root itself could not be listed
                Err(e) if e.depth() == 0 => {
                    return Err(BundleError::ScanFailed(format!("{}: {e}", root.display())));
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                }
            }
        }

        Ok(files)
    }

    /// Prune hidden and deny-listed directories. Never filters the
    /// root directory itself.
    fn should_process_entry(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        if path == root {
            return true;
        }

        if !entry.file_type().is_dir() {
            return true;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') || self.exclude_dirs.contains(name) {
                tracing::debug!("Skipping excluded directory: {:?}", path);
                return false;
            }
        }

        !self.exclude_patterns.iter().any(|p| p.matches_path(path))
    }

    /// Check a file against the name deny-list, the glob patterns and
    /// the extension allow-list
    fn is_candidate(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|f| f.to_str()) else {
            return false;
        };

        if self.exclude_files.contains(name) || self.is_excluded_path(path, name) {
            tracing::debug!("Skipping excluded file: {:?}", path);
            return false;
        }

        if self
            .exclude_patterns
            .iter()
            .any(|p| p.matches(name) || p.matches_path(path))
        {
            return false;
        }

        is_code_file(name, &self.extensions)
    }

    fn is_excluded_path(&self, path: &Path, name: &str) -> bool {
        // Only canonicalize files whose name could match
        if !self
            .exclude_paths
            .iter()
            .any(|p| p.file_name().and_then(|f| f.to_str()) == Some(name))
        {
            return false;
        }
        path.canonicalize()
            .map(|p| self.exclude_paths.contains(&p))
            .unwrap_or(false)
    }
}

/// Canonical form of `path`, resolving through the parent directory
/// when the file itself does not exist
fn resolve_path(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = path.canonicalize() {
        return Some(resolved);
    }
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    parent.canonicalize().ok().map(|p| p.join(name))
}

//! Candidate file discovery.
//!
//! Walks the scan root, prunes deny-listed directories and file
//! names, and keeps only files carrying an allow-listed extension.

pub mod walker;

pub use walker::FileWalker;

use std::path::Path;

/// Check a path against the extension allow-list (case-insensitive)
pub fn is_code_file(path: &str, extensions: &[String]) -> bool {
    let lower = path.to_lowercase();
    extensions
        .iter()
        .any(|ext| lower.ends_with(&ext.to_lowercase()))
}

/// Render `path` relative to `root` with `/` separators.
///
/// Falls back to the full path when `path` is outside `root`.
pub fn relative_display(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

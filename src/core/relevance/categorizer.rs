//! Path-based categorization.
//!
//! Rules are checked in order against the lower-cased path; the
//! first hit wins.

use crate::core::types::Category;

const RULES: [(&[&str], Category); 4] = [
    (&["backend", "server"], Category::Backend),
    (&["frontend", "src"], Category::Frontend),
    (&["database", "models"], Category::Database),
    (&["security", "auth"], Category::Security),
];

/// Assign a category to a matched file.
///
/// `_content` is unused by the current rule set.
pub fn categorize(file_path: &str, _content: &str) -> Category {
    category_for_path(file_path)
}

pub fn category_for_path(file_path: &str) -> Category {
    let path = file_path.to_lowercase();
    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| path.contains(n)))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}

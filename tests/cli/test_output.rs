//! Tests for CLI output formatting helpers
//!
//! Tests the output formatting utilities:
//! - Duration formatting (ms, s, m)
//! - Keyword list formatting
//! - Color helpers (respects NO_COLOR)

use ctxbundle::cli::output::{colors, format_duration, format_keywords};

#[test]
fn test_format_duration_ranges() {
    assert_eq!(format_duration(0.0), "0ms");
    assert_eq!(format_duration(0.042), "42ms");
    assert_eq!(format_duration(1.0), "1.00s");
    assert_eq!(format_duration(59.5), "59.50s");
    assert_eq!(format_duration(60.0), "1m 0.0s");
    assert_eq!(format_duration(125.5), "2m 5.5s");
}

#[test]
fn test_format_keywords_plain() {
    colored::control::set_override(false);

    assert_eq!(format_keywords(["cors", "jwt", "xss"]), "cors, jwt, xss");
    assert_eq!(format_keywords(["solo"]), "solo");
}

#[test]
fn test_colors_keep_text() {
    colored::control::set_override(false);

    assert_eq!(colors::category("backend").to_string(), "backend");
    assert_eq!(colors::file_path("src/a.js").to_string(), "src/a.js");
    assert_eq!(colors::number("3").to_string(), "3");
}

//! Relevance scoring and compression.
//!
//! - **fuzzy**: partial-ratio similarity (0-100)
//! - **pattern**: compiled whole-word keyword alternation
//! - **matcher**: filename / content / identifier relevance tests
//! - **compressor**: comment stripping and keyword-line retention
//! - **categorizer**: ordered path rules to a `Category`

pub mod categorizer;
pub mod compressor;
pub mod fuzzy;
pub mod matcher;
pub mod pattern;

pub use categorizer::categorize;
pub use compressor::ContentCompressor;
pub use fuzzy::partial_ratio;
pub use matcher::{RelevanceMatcher, FUZZY_THRESHOLD};
pub use pattern::KeywordPattern;

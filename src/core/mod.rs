//! Core domain logic (adapter-agnostic)
//!
//! This module contains all business logic that is independent
//! of the command-line surface.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **expansion**: Keyword expansion over the thesaurus and providers
//! - **scan**: Candidate file listing
//! - **relevance**: Matching, compression and categorization
//! - **pipeline**: Bounded parallel processing of candidates
//! - **bundle**: Aggregated output and JSON artifact
//! - **services**: Unified service container

pub mod bundle;
pub mod config;
pub mod error;
pub mod expansion;
pub mod pipeline;
pub mod relevance;
pub mod scan;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use bundle::ContextBundle;
pub use config::Config;
pub use error::{BundleError, Result};
pub use expansion::TermExpander;
pub use pipeline::BundlePipeline;
pub use services::Services;

//! ctxbundle - keyword-driven context bundler
//!
//! Turns a few user keywords into a compact, categorized JSON digest of
//! the source files in a tree that relate to them, suitable for pasting
//! into an LLM prompt.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - expansion (thesaurus, related-term providers)
//!   - scan (file listing)
//!   - relevance (fuzzy matching, compression, categorization)
//!   - pipeline, bundle (parallel processing, JSON artifact)
//!   - services (unified service container)
//!
//! - **cli**: clap adapter (depends on core)
//!   - bundle, expand, show-config, completions
//!
//! # Key Features
//!
//! - Provider failures and timeouts never abort a run
//! - One compiled keyword pattern shared across all workers
//! - Bounded parallelism via blocking tasks
//! - Deterministic category order in the artifact

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::bundle::{BundleEntry, ContextBundle};
pub use core::config::Config;
pub use core::error::{BundleError, Result};
pub use core::services::Services;
pub use core::types::*;

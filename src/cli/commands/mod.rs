//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod bundle;
pub mod completions;
pub mod config;
pub mod expand;

// Re-export argument types for use in mod.rs
pub use bundle::BundleArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use expand::ExpandArgs;

// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test crates but are used in others
#[allow(unused_imports)]
pub use fixtures::TestRepo;
#[allow(unused_imports)]
pub use helpers::{bundle_offline, create_test_services, expand_offline, offline_config, read_artifact};

//! XDG Base Directory Support
//!
//! Resolves where ctxbundle looks for its configuration file. Runs
//! keep no state between invocations, so only the config directory
//! is needed.

use std::env;
use std::path::PathBuf;

/// XDG directory structure for ctxbundle
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    ///
    /// Priority order (highest to lowest):
    /// 1. CTXBUNDLE_CONFIG_DIR
    /// 2. XDG_CONFIG_HOME
    /// 3. XDG default (~/.config)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("CTXBUNDLE_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("ctxbundle");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("ctxbundle")
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        // Explicit override wins
        if let Ok(file) = env::var("CTXBUNDLE_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Log the resolved paths
    pub fn log_paths(&self) {
        tracing::debug!("Config dir: {:?}", self.config_dir);
        tracing::debug!("Config file: {:?}", self.config_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

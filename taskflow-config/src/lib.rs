//! TaskFlow configuration management using Figment
//!
//! Configuration is layered with a clear precedence ordering:
//! defaults → global file → project file → environment.
//!
//! - Global: `~/.taskflow/taskflow.{toml,yaml,yml,json}`
//! - Project: `./.taskflow/taskflow.{toml,yaml,yml,json}`
//! - Environment: `TASKFLOW_` prefix, `__` separates nested keys
//!
//! ## Example TOML Configuration
//!
//! ```toml
//! [board]
//! seed_sample = true
//! preview_chars = 80
//!
//! [board.titles]
//! in_progress = "Doing"
//!
//! [suggestions]
//! max_tags = 5
//! ```
//!
//! ```bash
//! export TASKFLOW_BOARD__PREVIEW_CHARS=120   # → board.preview_chars
//! export TASKFLOW_SUGGESTIONS__MAX_TAGS=3    # → suggestions.max_tags
//! ```
//!
//! ```no_run
//! let config = taskflow_config::load_configuration()?;
//! println!("preview: {} chars", config.board.preview_chars);
//! # Ok::<(), taskflow_config::ConfigError>(())
//! ```

/// File discovery logic for configuration files
pub mod discovery;
/// Error types and handling
pub mod error;
/// Figment-backed provider
pub mod provider;
/// Configuration structures and defaults
pub mod types;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery, CONFIG_DIR_NAME};
pub use error::{ConfigError, ConfigResult};
pub use provider::{ConfigProvider, ENV_PREFIX};
pub use types::{
    BoardConfig, ColumnTitles, SuggestionConfig, TaskflowConfig, DEFAULT_DATE_FORMAT,
    DEFAULT_MAX_SUGGESTED_TAGS, DEFAULT_PREVIEW_CHARS,
};

use std::path::PathBuf;

/// Load configuration from the standard locations and the environment
pub fn load_configuration() -> ConfigResult<TaskflowConfig> {
    ConfigProvider::new().load()
}

/// Load configuration from explicit project and global directories
pub fn load_from(
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
) -> ConfigResult<TaskflowConfig> {
    ConfigProvider::with_directories(project_dir, global_dir).load()
}

#[cfg(test)]
mod tests;

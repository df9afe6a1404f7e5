//! Configuration provider using Figment

use crate::discovery::{ConfigFile, ConfigFormat, FileDiscovery};
use crate::types::TaskflowConfig;
use crate::ConfigResult;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use std::path::PathBuf;
use tracing::{debug, trace};

/// Prefix for environment overrides, nested keys separated by `__`
pub const ENV_PREFIX: &str = "TASKFLOW_";

/// Loads [`TaskflowConfig`] from all sources.
///
/// Nothing is cached; every call reads the files again.
#[derive(Debug, Default)]
pub struct ConfigProvider {
    discovery: FileDiscovery,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search the given directories instead of `./.taskflow` and `~/.taskflow`
    pub fn with_directories(project_dir: Option<PathBuf>, global_dir: Option<PathBuf>) -> Self {
        Self {
            discovery: FileDiscovery::with_directories(project_dir, global_dir),
        }
    }

    /// Merge all sources, extract and validate
    pub fn load(&self) -> ConfigResult<TaskflowConfig> {
        let config: TaskflowConfig = self.build_figment().extract()?;
        config.validate()?;
        debug!(
            seed_sample = config.board.seed_sample,
            preview_chars = config.board.preview_chars,
            max_tags = config.suggestions.max_tags,
            "Loaded taskflow configuration"
        );
        Ok(config)
    }

    /// Sources in precedence order, later ones override earlier ones:
    /// defaults, global file, project file, environment.
    fn build_figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(TaskflowConfig::default()));

        for file in self.discovery.discover_all() {
            trace!("Merging config file {}", file.path.display());
            figment = figment.merge(Self::file_provider(&file));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn file_provider(file: &ConfigFile) -> Figment {
        match file.format {
            ConfigFormat::Toml => Figment::from(Toml::file(&file.path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(&file.path)),
            ConfigFormat::Json => Figment::from(Json::file(&file.path)),
        }
    }
}

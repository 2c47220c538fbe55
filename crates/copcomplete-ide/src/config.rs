//! Settings loading and path resolution

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{IdeError, IdeResult};
use crate::types::Settings;

/// Environment variable overriding the copcomplete home directory
pub const HOME_ENV: &str = "COPCOMPLETE_HOME";

/// Path resolver for cross-platform cache paths
pub struct PathResolver;

impl PathResolver {
    /// Resolve the default cache directory
    ///
    /// Priority:
    /// 1. `$COPCOMPLETE_HOME/cache`
    /// 2. the platform cache directory, under `copcomplete`
    /// 3. `~/.copcomplete/cache`
    pub fn resolve_cache_dir() -> IdeResult<PathBuf> {
        Self::resolve_cache_dir_with(std::env::var_os(HOME_ENV).map(PathBuf::from))
    }

    /// Resolve the cache directory given the value of `$COPCOMPLETE_HOME`
    pub fn resolve_cache_dir_with(home_override: Option<PathBuf>) -> IdeResult<PathBuf> {
        if let Some(home_override) = home_override {
            return Ok(home_override.join("cache"));
        }

        if let Some(cache_dir) = dirs::cache_dir() {
            return Ok(cache_dir.join("copcomplete"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            return Ok(home_dir.join(".copcomplete").join("cache"));
        }

        Err(IdeError::path_resolution_error(
            "Could not determine a cache directory",
        ))
    }

    /// Expand ~ in paths to home directory
    pub fn expand_home(path: &Path) -> IdeResult<PathBuf> {
        let path_str = path
            .to_str()
            .ok_or_else(|| IdeError::path_resolution_error("Invalid path encoding"))?;

        if let Some(rest) = path_str.strip_prefix('~') {
            if rest.is_empty() || rest.starts_with('/') {
                if let Some(home_dir) = dirs::home_dir() {
                    return Ok(home_dir.join(rest.trim_start_matches('/')));
                }
            }
        }

        Ok(path.to_path_buf())
    }
}

/// Settings loader
pub struct ConfigManager;

impl ConfigManager {
    /// Load settings from a YAML file
    pub async fn load_from_yaml_file(file_path: &str) -> IdeResult<Settings> {
        debug!("Loading settings from YAML: {}", file_path);

        let content = Self::read(file_path).await?;
        let settings: Settings = serde_yaml::from_str(&content).map_err(|e| {
            IdeError::config_error(format!(
                "Failed to parse YAML settings: {}. Please check the file format.",
                e
            ))
        })?;

        Self::validate_config(&settings)?;

        info!("Loaded settings from {}", file_path);
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub async fn load_from_json_file(file_path: &str) -> IdeResult<Settings> {
        debug!("Loading settings from JSON: {}", file_path);

        let content = Self::read(file_path).await?;
        let settings: Settings = serde_json::from_str(&content).map_err(|e| {
            IdeError::config_error(format!(
                "Failed to parse JSON settings: {}. Please check the file format.",
                e
            ))
        })?;

        Self::validate_config(&settings)?;

        info!("Loaded settings from {}", file_path);
        Ok(settings)
    }

    /// Load settings from a file (auto-detect format)
    pub async fn load_from_file(file_path: &str) -> IdeResult<Settings> {
        if file_path.ends_with(".yaml") || file_path.ends_with(".yml") {
            Self::load_from_yaml_file(file_path).await
        } else if file_path.ends_with(".json") || file_path.ends_with(".sublime-settings") {
            Self::load_from_json_file(file_path).await
        } else {
            Err(IdeError::config_error(
                "Unsupported settings file format. Use .yaml, .yml, or .json",
            ))
        }
    }

    /// Validate settings
    pub fn validate_config(settings: &Settings) -> IdeResult<()> {
        if settings.rubocop_command.trim().is_empty() {
            return Err(IdeError::config_validation_error(
                "rubocop_command is empty. Please set it to the RuboCop executable.",
            ));
        }

        if settings.bundler && settings.bundler_command.trim().is_empty() {
            return Err(IdeError::config_validation_error(
                "bundler is enabled but bundler_command is empty. \
                 Please set bundler_command or disable bundler.",
            ));
        }

        if settings.timeout_secs == Some(0) {
            return Err(IdeError::config_validation_error(
                "timeout_secs must be positive. Remove it to wait indefinitely.",
            ));
        }

        Ok(())
    }

    /// Cache directory for `settings`, expanding `~`
    pub fn cache_dir(settings: &Settings) -> IdeResult<PathBuf> {
        match &settings.cache_dir {
            Some(dir) => PathResolver::expand_home(dir),
            None => PathResolver::resolve_cache_dir(),
        }
    }

    async fn read(file_path: &str) -> IdeResult<String> {
        let resolved_path = PathResolver::expand_home(&PathBuf::from(file_path))?;

        tokio::fs::read_to_string(&resolved_path).await.map_err(|e| {
            IdeError::config_error(format!(
                "Failed to read settings file '{}': {}",
                resolved_path.display(),
                e
            ))
        })
    }
}

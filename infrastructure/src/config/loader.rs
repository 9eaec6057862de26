//! Configuration file loader with multi-source merging

use super::file_config::{ConfigValidationError, FileConfig};
use figment::{
    Figment,
    providers::{Data, Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["debate.toml", ".debate.toml"];

/// Prefix for environment overrides (`DEBATE_DEBATE__ROUNDS=5`)
const ENV_PREFIX: &str = "DEBATE_";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided, must exist)
    /// 2. Environment variables prefixed with `DEBATE_`
    /// 3. Project root: `./debate.toml` or `./.debate.toml`
    /// 4. Global: `<config dir>/debate-council/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Merging global config {}", global_path.display());
            figment = figment.merge(Toml::file_exact(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            debug!("Merging project config {}", path.display());
            figment = figment.merge(Toml::file_exact(&path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        // Add explicit config path (highest priority)
        if let Some(path) = config_path {
            debug!("Merging explicit config {}", path.display());
            figment = figment.merge(Self::explicit_file(path)?);
        }

        Self::extract(figment)
    }

    /// Load defaults overlaid with a single file, skipping discovery and environment
    pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::explicit_file(path)?);
        Self::extract(figment)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// A user-named file is read from exactly `path`, never from a parent directory
    fn explicit_file(path: &Path) -> Result<Data<Toml>, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Ok(Toml::file_exact(path))
    }

    fn extract(figment: Figment) -> Result<FileConfig, ConfigError> {
        let config: FileConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the global config file path
    ///
    /// Returns `debate-council/config.toml` under the platform config
    /// directory from `dirs::config_dir()`: `$XDG_CONFIG_HOME` (or
    /// `~/.config`) on Linux, `~/Library/Application Support` on macOS and
    /// `%APPDATA%` on Windows.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("debate-council").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.is_file())
    }

    /// Names of the `DEBATE_*` environment variables currently set, sorted
    pub fn env_overrides() -> Vec<String> {
        let mut names: Vec<String> = std::env::vars_os()
            .filter_map(|(key, _)| key.into_string().ok())
            .filter(|key| key.starts_with(ENV_PREFIX))
            .collect();
        names.sort();
        names
    }

    /// Describe every configuration source in priority order
    pub fn config_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        // Explicit config
        match config_path {
            Some(path) if path.is_file() => {
                lines.push(format!("  [FOUND] Explicit: {}", path.display()))
            }
            Some(path) => lines.push(format!("  [MISSING] Explicit: {}", path.display())),
            None => lines.push("  [     ] Explicit: --config <path>".to_string()),
        }

        // Environment
        let env = Self::env_overrides();
        if env.is_empty() {
            lines.push(format!("  [     ] Env:     {}*", ENV_PREFIX));
        } else {
            lines.push(format!("  [FOUND] Env:     {}", env.join(", ")));
        }

        // Project config
        if let Some(path) = Self::project_config_path() {
            lines.push(format!("  [FOUND] Project: {}", path.display()));
        } else {
            lines.push("  [     ] Project: ./debate.toml or ./.debate.toml".to_string());
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            let marker = if path.is_file() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", marker, path.display()));
        }

        lines.push("  [FOUND] Default: built-in defaults".to_string());
        lines
    }

    /// Print the configuration sources (for --show-config)
    pub fn print_config_sources(config_path: Option<&Path>) {
        for line in Self::config_sources(config_path) {
            println!("{}", line);
        }
    }
}

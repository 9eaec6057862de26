//! Configuration file loading for debate-council
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file (must exist)
//! 2. Environment: `DEBATE_*` variables (`__` separates nested keys)
//! 3. Project root: `./debate.toml` or `./.debate.toml`
//! 4. Global: `debate-council/config.toml` under `dirs::config_dir()`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDebateConfig, FileGeneratorConfig, FileOutputConfig,
    FileParticipantConfig,
};
pub use loader::{ConfigError, ConfigLoader};

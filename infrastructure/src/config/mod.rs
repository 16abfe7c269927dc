//! Configuration file loading for promptcraft
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PROMPTCRAFT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./promptcraft.toml` or `./.promptcraft.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/promptcraft/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    AccountStoreLocation, FileAccountsConfig, FileConfig, FileGenerationConfig, FileOutputConfig,
    FileReplConfig, IN_MEMORY_PATH,
};
pub use loader::ConfigLoader;

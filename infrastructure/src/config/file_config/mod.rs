//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod accounts;
mod generation;
mod output;
mod repl;

pub use accounts::{AccountStoreLocation, FileAccountsConfig, IN_MEMORY_PATH};
pub use generation::FileGenerationConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use promptcraft_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileConfig {
    /// Account store settings
    pub accounts: FileAccountsConfig,
    /// Prompt generation settings
    pub generation: FileGenerationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. `accounts.path` is not empty
    /// 2. `repl.default_domain` names a catalog domain
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.accounts.location().1);
        issues.extend(self.repl.parse_default_domain().1);
        issues
    }
}

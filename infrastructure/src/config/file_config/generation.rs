//! Generation configuration from TOML (`[generation]` section)

use serde::{Deserialize, Serialize};

/// Raw prompt generation configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Fixed seed for template selection; random per call when unset
    pub seed: Option<u64>,
}

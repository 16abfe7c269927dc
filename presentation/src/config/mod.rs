//! Presentation-level configuration
//!
//! Resolved settings for output formatting and REPL behavior. The binary
//! builds these from the merged config file and CLI flags.

use promptcraft_domain::{ChatbotDomain, OutputFormat};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Path to history file; `None` keeps history in memory only
    pub history_file: Option<PathBuf>,
    /// Domain selected right after login
    pub default_domain: ChatbotDomain,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            default_domain: ChatbotDomain::CustomerSupport,
        }
    }
}

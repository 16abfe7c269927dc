//! Account store configuration from TOML (`[accounts]` section)

use promptcraft_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Value of `accounts.path` that selects the in-memory store
pub const IN_MEMORY_PATH: &str = ":memory:";

/// Where account records are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountStoreLocation {
    /// CSV table on disk
    File(PathBuf),
    /// Process memory; nothing survives exit
    InMemory,
}

/// Raw account store configuration from TOML
///
/// # Example
///
/// ```toml
/// [accounts]
/// path = "users.csv"     # or ":memory:"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileAccountsConfig {
    pub path: String,
}

impl Default for FileAccountsConfig {
    fn default() -> Self {
        Self {
            path: "users.csv".to_string(),
        }
    }
}

impl FileAccountsConfig {
    /// Resolve the configured location, reporting an empty path as an error
    pub fn location(&self) -> (Option<AccountStoreLocation>, Vec<ConfigIssue>) {
        let path = self.path.trim();
        if path.is_empty() {
            return (
                None,
                vec![ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyPath {
                        field: "accounts.path".to_string(),
                    },
                    message: "accounts.path: path cannot be empty".to_string(),
                }],
            );
        }
        if path == IN_MEMORY_PATH {
            return (Some(AccountStoreLocation::InMemory), Vec::new());
        }
        (Some(AccountStoreLocation::File(PathBuf::from(path))), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_location_is_users_csv() {
        let (location, issues) = FileAccountsConfig::default().location();
        assert_eq!(
            location,
            Some(AccountStoreLocation::File(PathBuf::from("users.csv")))
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_memory_location() {
        let config = FileAccountsConfig {
            path: ":memory:".to_string(),
        };
        assert_eq!(config.location().0, Some(AccountStoreLocation::InMemory));
    }

    #[test]
    fn test_empty_path_is_error() {
        let config = FileAccountsConfig {
            path: "  ".to_string(),
        };
        let (location, issues) = config.location();
        assert!(location.is_none());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }
}

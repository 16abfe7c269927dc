//! REPL configuration from TOML (`[repl]` section)

use promptcraft_domain::{ChatbotDomain, ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file
    pub history_file: Option<String>,
    /// Domain selected when a session starts
    pub default_domain: Option<String>,
}

impl FileReplConfig {
    /// `history_file` as a path, with a leading `~` expanded to the home directory
    pub fn history_path(&self) -> Option<PathBuf> {
        let raw = self.history_file.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        Some(expand_home(raw))
    }

    /// Parse `default_domain`, warning and falling back on unknown names
    pub fn parse_default_domain(&self) -> (ChatbotDomain, Vec<ConfigIssue>) {
        let fallback = ChatbotDomain::ALL[0];
        let Some(name) = self.default_domain.as_deref() else {
            return (fallback, Vec::new());
        };

        match name.parse::<ChatbotDomain>() {
            Ok(domain) => (domain, Vec::new()),
            Err(_) => (
                fallback,
                vec![ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "repl.default_domain".to_string(),
                        value: name.to_string(),
                        valid_values: ChatbotDomain::ALL
                            .iter()
                            .map(|d| d.display_name().to_string())
                            .collect(),
                    },
                    message: format!(
                        "repl.default_domain: unknown domain '{}', falling back to '{}'",
                        name, fallback
                    ),
                }],
            ),
        }
    }
}

fn expand_home(raw: &str) -> PathBuf {
    if raw == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_domain_unset() {
        let (domain, issues) = FileReplConfig::default().parse_default_domain();
        assert_eq!(domain, ChatbotDomain::CustomerSupport);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_default_domain_alias() {
        let config = FileReplConfig {
            default_domain: Some("education".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.parse_default_domain().0,
            ChatbotDomain::EducationalAssistant
        );
    }

    #[test]
    fn test_default_domain_unknown_warns() {
        let config = FileReplConfig {
            default_domain: Some("Legal".to_string()),
            ..Default::default()
        };
        let (domain, issues) = config.parse_default_domain();
        assert_eq!(domain, ChatbotDomain::CustomerSupport);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_history_path_expands_home() {
        let config = FileReplConfig {
            history_file: Some("~/.local/share/promptcraft/history.txt".to_string()),
            ..Default::default()
        };
        let path = config.history_path().unwrap();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join(".local/share/promptcraft/history.txt"));
        }
        assert!(!path.starts_with("~"));
    }

    #[test]
    fn test_history_path_plain_and_empty() {
        let plain = FileReplConfig {
            history_file: Some("/tmp/history.txt".to_string()),
            ..Default::default()
        };
        assert_eq!(plain.history_path(), Some(PathBuf::from("/tmp/history.txt")));

        let empty = FileReplConfig {
            history_file: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(empty.history_path(), None);
        assert_eq!(FileReplConfig::default().history_path(), None);
    }
}

//! Chatbot domain definitions.
//!
//! Defines [`ChatbotDomain`], the closed set of chatbot categories that own a
//! template list in the catalog.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named category of chatbot with its own template set.
///
/// The set is fixed at compile time. Parsing from text accepts the display
/// name (case-insensitive) and a few short aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChatbotDomain {
    #[serde(rename = "Customer Support")]
    CustomerSupport,
    #[serde(rename = "HR Bot")]
    HrBot,
    #[serde(rename = "Educational Assistant")]
    EducationalAssistant,
    #[serde(rename = "Healthcare Assistant")]
    HealthcareAssistant,
}

impl ChatbotDomain {
    /// All domains, in catalog order.
    pub const ALL: [ChatbotDomain; 4] = [
        ChatbotDomain::CustomerSupport,
        ChatbotDomain::HrBot,
        ChatbotDomain::EducationalAssistant,
        ChatbotDomain::HealthcareAssistant,
    ];

    /// Human-readable name, as shown in domain pickers
    pub fn display_name(&self) -> &'static str {
        match self {
            ChatbotDomain::CustomerSupport => "Customer Support",
            ChatbotDomain::HrBot => "HR Bot",
            ChatbotDomain::EducationalAssistant => "Educational Assistant",
            ChatbotDomain::HealthcareAssistant => "Healthcare Assistant",
        }
    }

    /// Short kebab-case identifier for command lines
    pub fn slug(&self) -> &'static str {
        match self {
            ChatbotDomain::CustomerSupport => "customer-support",
            ChatbotDomain::HrBot => "hr-bot",
            ChatbotDomain::EducationalAssistant => "educational-assistant",
            ChatbotDomain::HealthcareAssistant => "healthcare-assistant",
        }
    }
}

impl fmt::Display for ChatbotDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ChatbotDomain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "customer support" | "support" | "cs" => Ok(ChatbotDomain::CustomerSupport),
            "hr bot" | "hr" => Ok(ChatbotDomain::HrBot),
            "educational assistant" | "education" | "edu" | "tutor" => {
                Ok(ChatbotDomain::EducationalAssistant)
            }
            "healthcare assistant" | "healthcare" | "health" => {
                Ok(ChatbotDomain::HealthcareAssistant)
            }
            _ => Err(DomainError::UnknownDomain(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_catalog_names() {
        assert_eq!(ChatbotDomain::CustomerSupport.to_string(), "Customer Support");
        assert_eq!(ChatbotDomain::HrBot.to_string(), "HR Bot");
        assert_eq!(
            ChatbotDomain::EducationalAssistant.to_string(),
            "Educational Assistant"
        );
        assert_eq!(
            ChatbotDomain::HealthcareAssistant.to_string(),
            "Healthcare Assistant"
        );
    }

    #[test]
    fn test_from_str_display_names_roundtrip() {
        for domain in ChatbotDomain::ALL {
            assert_eq!(domain.display_name().parse::<ChatbotDomain>().unwrap(), domain);
            assert_eq!(domain.slug().parse::<ChatbotDomain>().unwrap(), domain);
        }
    }

    #[test]
    fn test_from_str_aliases_and_case() {
        assert_eq!("hr".parse::<ChatbotDomain>().unwrap(), ChatbotDomain::HrBot);
        assert_eq!(
            "HEALTHCARE".parse::<ChatbotDomain>().unwrap(),
            ChatbotDomain::HealthcareAssistant
        );
        assert_eq!(
            "educational_assistant".parse::<ChatbotDomain>().unwrap(),
            ChatbotDomain::EducationalAssistant
        );
    }

    #[test]
    fn test_from_str_unknown_domain() {
        let err = "Legal Advisor".parse::<ChatbotDomain>().unwrap_err();
        assert!(matches!(err, DomainError::UnknownDomain(ref name) if name == "Legal Advisor"));
    }

    #[test]
    fn test_serialize_uses_display_name() {
        let json = serde_json::to_string(&ChatbotDomain::HrBot).unwrap();
        assert_eq!(json, "\"HR Bot\"");
    }
}

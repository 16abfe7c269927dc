//! Prompt templates for each chatbot domain

use super::chatbot_domain::ChatbotDomain;
use crate::core::error::DomainError;

/// A parametrized prompt string with a single substitution slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    text: &'static str,
}

impl Template {
    /// Substitution marker replaced by the user input
    pub const MARKER: &'static str = "{user_input}";

    const fn new(text: &'static str) -> Self {
        Self { text }
    }

    /// Raw template text, marker included
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Replace the marker with `user_input` verbatim.
    ///
    /// No escaping, trimming or length limit is applied.
    pub fn fill(&self, user_input: &str) -> String {
        self.text.replace(Self::MARKER, user_input)
    }
}

const CUSTOMER_SUPPORT: &[Template] = &[
    Template::new(
        "You are a helpful customer support agent. Respond kindly to the user's question: \"{user_input}\"",
    ),
    Template::new("Politely help the customer resolve: \"{user_input}\""),
];

const HR_BOT: &[Template] = &[
    Template::new("You are an HR assistant. Answer this employee's query: \"{user_input}\""),
    Template::new("Respond as a friendly HR bot to: \"{user_input}\""),
];

const EDUCATIONAL_ASSISTANT: &[Template] = &[
    Template::new("You are a tutor. Explain the concept of: \"{user_input}\""),
    Template::new("Teach the user about: \"{user_input}\""),
];

const HEALTHCARE_ASSISTANT: &[Template] = &[
    Template::new(
        "You are a virtual health assistant. Give initial advice for: \"{user_input}\"",
    ),
    Template::new("Help the patient understand symptoms like: \"{user_input}\""),
];

/// Static lookup table from domain to its ordered template list
pub struct TemplateCatalog;

impl TemplateCatalog {
    /// Templates owned by `domain`. Never empty.
    pub fn templates(domain: ChatbotDomain) -> &'static [Template] {
        match domain {
            ChatbotDomain::CustomerSupport => CUSTOMER_SUPPORT,
            ChatbotDomain::HrBot => HR_BOT,
            ChatbotDomain::EducationalAssistant => EDUCATIONAL_ASSISTANT,
            ChatbotDomain::HealthcareAssistant => HEALTHCARE_ASSISTANT,
        }
    }

    /// Look up templates by domain name.
    ///
    /// Fails with [`DomainError::UnknownDomain`] for names outside the catalog.
    pub fn templates_by_name(name: &str) -> Result<&'static [Template], DomainError> {
        let domain: ChatbotDomain = name.parse()?;
        Ok(Self::templates(domain))
    }

    /// Every domain paired with its templates, in catalog order
    pub fn entries() -> impl Iterator<Item = (ChatbotDomain, &'static [Template])> {
        ChatbotDomain::ALL
            .into_iter()
            .map(|domain| (domain, Self::templates(domain)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_domain_has_templates() {
        for (domain, templates) in TemplateCatalog::entries() {
            assert!(!templates.is_empty(), "{} has no templates", domain);
        }
    }

    #[test]
    fn test_every_template_has_exactly_one_marker() {
        for (_, templates) in TemplateCatalog::entries() {
            for template in templates {
                assert_eq!(template.text().matches(Template::MARKER).count(), 1);
            }
        }
    }

    #[test]
    fn test_fill_is_verbatim() {
        let template = TemplateCatalog::templates(ChatbotDomain::EducationalAssistant)[1];
        assert_eq!(
            template.fill("  <b>ML</b>  "),
            "Teach the user about: \"  <b>ML</b>  \""
        );
        assert_eq!(template.fill(""), "Teach the user about: \"\"");
    }

    #[test]
    fn test_templates_by_name() {
        let templates = TemplateCatalog::templates_by_name("HR Bot").unwrap();
        assert_eq!(templates.len(), 2);
        assert!(templates[0].text().starts_with("You are an HR assistant."));
    }

    #[test]
    fn test_templates_by_unknown_name() {
        assert!(matches!(
            TemplateCatalog::templates_by_name("Pirate Bot"),
            Err(DomainError::UnknownDomain(_))
        ));
    }
}

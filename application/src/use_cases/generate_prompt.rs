//! Generate Prompt use case
//!
//! Runs the full prompt pipeline: template selection, suggestion expansion
//! and similarity scoring.

use promptcraft_domain::{
    ChatbotDomain, DomainError, PromptReport, RandomSource, generate_prompt, preview,
    suggest_improvements,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Input for the [`GeneratePromptUseCase`]
#[derive(Debug, Clone)]
pub struct GeneratePromptInput {
    /// Domain whose templates are used
    pub domain: ChatbotDomain,
    /// Raw user query or context, passed through untouched
    pub user_input: String,
}

impl GeneratePromptInput {
    pub fn new(domain: ChatbotDomain, user_input: impl Into<String>) -> Self {
        Self {
            domain,
            user_input: user_input.into(),
        }
    }

    /// Build an input from a domain name as typed by a user.
    ///
    /// Fails with [`DomainError::UnknownDomain`] for names outside the catalog.
    pub fn parse(domain: &str, user_input: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self::new(domain.parse()?, user_input))
    }
}

/// Use case for generating a prompt with scored suggestions
#[derive(Clone)]
pub struct GeneratePromptUseCase {
    random: Arc<dyn RandomSource>,
}

impl GeneratePromptUseCase {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Execute the pipeline. Total over every input, including empty text.
    pub fn execute(&self, input: GeneratePromptInput) -> PromptReport {
        info!(
            "Generating {} prompt for: {}",
            input.domain,
            preview(&input.user_input, 80)
        );

        let prompt = generate_prompt(input.domain, &input.user_input, self.random.as_ref());
        let suggestions = suggest_improvements(input.domain, &input.user_input, &prompt);
        let report = PromptReport::assemble(
            input.domain,
            input.user_input,
            prompt,
            suggestions,
            chrono::Utc::now(),
        );

        debug!(
            "Similarity scores: {}",
            report
                .scores()
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptcraft_domain::{FixedRandomSource, SUGGESTION_COUNT};

    fn use_case(index: usize) -> GeneratePromptUseCase {
        GeneratePromptUseCase::new(Arc::new(FixedRandomSource(index)))
    }

    #[test]
    fn test_execute_uses_injected_source() {
        let report = use_case(1).execute(GeneratePromptInput::new(
            ChatbotDomain::EducationalAssistant,
            "What is machine learning?",
        ));
        assert_eq!(
            report.prompt,
            "Teach the user about: \"What is machine learning?\""
        );
        assert_eq!(report.domain, ChatbotDomain::EducationalAssistant);
        assert_eq!(report.user_input, "What is machine learning?");
    }

    #[test]
    fn test_execute_scores_every_suggestion() {
        let report =
            use_case(0).execute(GeneratePromptInput::new(ChatbotDomain::HrBot, "sick leave"));
        assert_eq!(report.suggestions.len(), SUGGESTION_COUNT);
        assert!(report.suggestions[0].text.starts_with(&report.prompt));
        for suggestion in &report.suggestions {
            let value = suggestion.score.value();
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_execute_accepts_empty_input() {
        let report = use_case(0).execute(GeneratePromptInput::new(
            ChatbotDomain::CustomerSupport,
            "",
        ));
        assert_eq!(
            report.prompt,
            "You are a helpful customer support agent. Respond kindly to the user's question: \"\""
        );
    }

    #[test]
    fn test_parse_rejects_unknown_domain() {
        let err = GeneratePromptInput::parse("Astrology Bot", "stars").unwrap_err();
        assert_eq!(err, DomainError::UnknownDomain("Astrology Bot".to_string()));
    }

    #[test]
    fn test_parse_accepts_display_name() {
        let input = GeneratePromptInput::parse("Healthcare Assistant", "headache").unwrap();
        assert_eq!(input.domain, ChatbotDomain::HealthcareAssistant);
    }
}

//! Prompt report value objects

use super::suggestion::SUGGESTION_COUNT;
use crate::catalog::chatbot_domain::ChatbotDomain;
use crate::similarity::{SimilarityScore, similarity_scores};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A suggestion paired with its similarity to the base prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSuggestion {
    pub text: String,
    pub score: SimilarityScore,
}

/// Everything produced by one run of the prompt pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptReport {
    /// Domain the template was drawn from
    pub domain: ChatbotDomain,
    /// Raw user input, as given
    pub user_input: String,
    /// Filled template
    pub prompt: String,
    /// Suggestions in fixed order, each scored against `prompt`
    pub suggestions: Vec<ScoredSuggestion>,
    pub generated_at: DateTime<Utc>,
}

impl PromptReport {
    /// Score `suggestions` against `prompt` and bundle the results.
    ///
    /// Scores are computed here so the two lists can never drift apart.
    pub fn assemble(
        domain: ChatbotDomain,
        user_input: impl Into<String>,
        prompt: impl Into<String>,
        suggestions: [String; SUGGESTION_COUNT],
        generated_at: DateTime<Utc>,
    ) -> Self {
        let prompt = prompt.into();
        let scores = similarity_scores(&prompt, &suggestions);
        let suggestions = suggestions
            .into_iter()
            .zip(scores)
            .map(|(text, score)| ScoredSuggestion { text, score })
            .collect();

        Self {
            domain,
            user_input: user_input.into(),
            prompt,
            suggestions,
            generated_at,
        }
    }

    /// Scores only, aligned with `suggestions`
    pub fn scores(&self) -> Vec<SimilarityScore> {
        self.suggestions.iter().map(|s| s.score).collect()
    }

    /// Suggestion with the highest overlap; ties keep the earliest
    pub fn closest_suggestion(&self) -> Option<&ScoredSuggestion> {
        self.suggestions
            .iter()
            .fold(None, |best: Option<&ScoredSuggestion>, s| match best {
                Some(b) if b.score >= s.score => Some(b),
                _ => Some(s),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::suggestion::suggest_improvements;

    fn sample() -> PromptReport {
        let domain = ChatbotDomain::EducationalAssistant;
        let prompt = "Teach the user about: \"ML\"";
        PromptReport::assemble(
            domain,
            "ML",
            prompt,
            suggest_improvements(domain, "ML", prompt),
            Utc::now(),
        )
    }

    #[test]
    fn test_assemble_aligns_scores() {
        let report = sample();
        assert_eq!(report.suggestions.len(), SUGGESTION_COUNT);
        assert_eq!(report.scores().len(), SUGGESTION_COUNT);
        assert_eq!(report.suggestions[2].score.value(), 0.05);
    }

    #[test]
    fn test_closest_suggestion_is_concise_variant() {
        let report = sample();
        let closest = report.closest_suggestion().unwrap();
        assert!(closest.text.ends_with("Keep your answer concise and polite."));
    }

    #[test]
    fn test_serializes_domain_by_name() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["domain"], "Educational Assistant");
        assert_eq!(json["suggestions"][2]["score"], 0.05);
        assert!(json["generated_at"].is_string());
    }
}

//! Suggestion expansion

use crate::catalog::chatbot_domain::ChatbotDomain;

/// Number of suggestions produced per request
pub const SUGGESTION_COUNT: usize = 3;

/// Instruction appended to the filled prompt for the first suggestion
pub const CONCISE_SUFFIX: &str = "\n- Keep your answer concise and polite.";

/// Derive alternative phrasings from a generated prompt.
///
/// Deterministic and total; the order is fixed:
/// 1. the filled prompt with [`CONCISE_SUFFIX`] appended
/// 2. an "expert in <domain>" step-by-step phrasing
/// 3. a generic "AI assistant" phrasing
pub fn suggest_improvements(
    domain: ChatbotDomain,
    user_input: &str,
    filled_prompt: &str,
) -> [String; SUGGESTION_COUNT] {
    [
        format!("{}{}", filled_prompt, CONCISE_SUFFIX),
        format!(
            "Act like an expert in {}. Answer: \"{}\" in a step-by-step manner.",
            domain.display_name().to_lowercase(),
            user_input
        ),
        format!(
            "You are an AI assistant. Based on the following query: \"{}\", provide a detailed yet friendly response.",
            user_input
        ),
    ]
}

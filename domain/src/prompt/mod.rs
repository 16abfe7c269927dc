//! Prompt domain
//!
//! Generation of system prompts from catalog templates, plus the fixed set of
//! alternative phrasings offered alongside each prompt.

mod generator;
mod random;
mod report;
mod suggestion;

pub use generator::generate_prompt;
pub use random::{FixedRandomSource, RandomSource};
pub use report::{PromptReport, ScoredSuggestion};
pub use suggestion::{CONCISE_SUFFIX, SUGGESTION_COUNT, suggest_improvements};

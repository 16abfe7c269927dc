//! Domain layer for promptcraft
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Prompt pipeline
//!
//! - **Template Catalog**: each [`ChatbotDomain`] owns a fixed list of templates
//! - **Generation**: one template is drawn via an injected [`RandomSource`] and filled
//! - **Suggestions**: three fixed alternative phrasings of the request
//! - **Similarity**: Jaccard overlap of lowercased whitespace tokens
//!
//! ## Accounts
//!
//! Username/password records behind the [`AccountRepository`] trait, used to
//! gate the interactive front-end.

pub mod account;
pub mod catalog;
pub mod config;
pub mod core;
pub mod prompt;
pub mod similarity;

// Re-export commonly used types
pub use account::{
    entities::Account,
    options::{Country, Language},
    repository::{AccountRepository, AccountStoreError},
};
pub use catalog::{
    chatbot_domain::ChatbotDomain,
    template::{Template, TemplateCatalog},
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use self::core::{error::DomainError, string::preview};
pub use prompt::{
    FixedRandomSource, PromptReport, RandomSource, SUGGESTION_COUNT, ScoredSuggestion,
    generate_prompt, suggest_improvements,
};
pub use similarity::{SimilarityScore, simple_similarity, similarity_scores};

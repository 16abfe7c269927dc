//! Application layer for promptcraft
//!
//! This crate contains the use cases that drive the prompt pipeline and the
//! signup/login flow. It depends only on the domain layer; persistence and
//! randomness are injected through domain traits.

pub mod use_cases;

// Re-export commonly used types
pub use use_cases::generate_prompt::{GeneratePromptInput, GeneratePromptUseCase};
pub use use_cases::login::{LoginError, LoginOutcome, LoginUseCase};
pub use use_cases::signup::{SignupError, SignupInput, SignupOutcome, SignupUseCase};

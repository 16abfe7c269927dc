//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_prompt;
pub mod login;
pub mod signup;

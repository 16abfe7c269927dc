//! Interactive chat module
//!
//! Provides a readline-based session: log in or sign up, then type queries
//! to generate prompts for the selected domain.

mod command;
mod repl;
mod session;

pub use command::ReplCommand;
pub use repl::{PromptRepl, Reply};
pub use session::Session;

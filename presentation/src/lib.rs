//! Presentation layer for promptcraft
//!
//! This crate contains CLI definitions, output formatters
//! and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use chat::{PromptRepl, Reply, Session};
pub use cli::commands::{Cli, Command, OutputArg};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;

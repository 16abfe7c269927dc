//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use promptcraft_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for prompt reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputArg {
    /// Prompt, suggestions and similarity scores
    Full,
    /// Only the generated prompt
    Prompt,
    /// JSON output
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Full => OutputFormat::Full,
            OutputArg::Prompt => OutputFormat::Prompt,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for promptcraft
#[derive(Parser, Debug)]
#[command(name = "promptcraft")]
#[command(author, version, about = "AI prompt generator for chatbots")]
#[command(long_about = r#"
promptcraft builds chatbot system prompts from domain templates, proposes
alternative phrasings and scores how much each one overlaps the generated prompt.

Domains:
  Customer Support, HR Bot, Educational Assistant, Healthcare Assistant

Without a command, an interactive session starts. Log in (or sign up) there
before generating prompts.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./promptcraft.toml  Project-level config
3. ~/.config/promptcraft/config.toml   Global config

Example:
  promptcraft generate --domain "HR Bot" "How do I request parental leave?"
  promptcraft signup alice --password s3cret --country India --language Hindi
  promptcraft demo --seed 7
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputArg>,

    /// Seed template selection for reproducible output
    #[arg(long, value_name = "SEED", global = true)]
    pub seed: Option<u64>,

    /// Account table location (a CSV path, or ":memory:")
    #[arg(long, value_name = "PATH", global = true)]
    pub accounts: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a prompt with suggestions and similarity scores
    Generate {
        /// Chatbot domain (name or alias, e.g. "HR Bot", "hr", "education")
        #[arg(short, long, default_value = "Customer Support")]
        domain: String,

        /// User query or context inserted into the template
        input: String,
    },

    /// Run the built-in example (Educational Assistant, "What is machine learning?")
    Demo,

    /// List domains and their templates
    Domains,

    /// Create an account
    Signup {
        username: String,

        #[arg(short, long)]
        password: String,

        /// India, USA, Germany, France or Other
        #[arg(long, default_value = "Other")]
        country: String,

        /// English, Hindi, German, French or Other
        #[arg(long, default_value = "Other")]
        language: String,
    },

    /// Check a username/password pair
    Login {
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Interactive session (default)
    Chat,
}

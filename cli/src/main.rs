//! CLI entrypoint for promptcraft
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use promptcraft_application::{
    GeneratePromptInput, GeneratePromptUseCase, LoginOutcome, LoginUseCase, SignupInput,
    SignupOutcome, SignupUseCase,
};
use promptcraft_domain::{
    AccountRepository, ChatbotDomain, ConfigIssue, Country, Language, RandomSource,
};
use promptcraft_infrastructure::{
    AccountStoreLocation, ConfigLoader, CsvAccountStore, FileAccountsConfig, FileConfig,
    InMemoryAccountStore, SeededRandomSource, ThreadRandomSource,
};
use promptcraft_presentation::{Cli, Command, ConsoleFormatter, OutputConfig, PromptRepl, ReplConfig};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEMO_DOMAIN: ChatbotDomain = ChatbotDomain::EducationalAssistant;
const DEMO_INPUT: &str = "What is machine learning?";

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting promptcraft");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    report_issues(&config.validate())?;

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color && !cli.no_color,
    };
    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let random: Arc<dyn RandomSource> = match cli.seed.or(config.generation.seed) {
        Some(seed) => {
            info!("Using seeded template selection (seed {})", seed);
            Arc::new(SeededRandomSource::new(seed))
        }
        None => Arc::new(ThreadRandomSource),
    };
    let generate = GeneratePromptUseCase::new(random);

    match cli.command.clone().unwrap_or(Command::Chat) {
        Command::Generate { domain, input } => {
            let input = GeneratePromptInput::parse(&domain, input)?;
            let report = generate.execute(input);
            print!("{}", ConsoleFormatter::render(&report, output.format));
        }
        Command::Demo => {
            info!("Running demo: {} / \"{}\"", DEMO_DOMAIN, DEMO_INPUT);
            let report = generate.execute(GeneratePromptInput::new(DEMO_DOMAIN, DEMO_INPUT));
            print!("{}", ConsoleFormatter::render_demo(&report, output.format));
        }
        Command::Domains => {
            print!("{}", ConsoleFormatter::format_catalog());
        }
        Command::Signup {
            username,
            password,
            country,
            language,
        } => {
            let country: Country = country.parse()?;
            let language: Language = language.parse()?;
            let accounts = open_accounts(&cli, &config)?;

            let input = SignupInput::new(username, password, country, language);
            match SignupUseCase::new(accounts).execute(input)? {
                SignupOutcome::Created => println!("Account created! Please login now."),
                SignupOutcome::UsernameTaken => {
                    bail!("Username already exists. Try another.")
                }
            }
        }
        Command::Login { username, password } => {
            let accounts = open_accounts(&cli, &config)?;
            match LoginUseCase::new(accounts).execute(&username, &password)? {
                LoginOutcome::Authenticated { username } => {
                    println!("Login successful!");
                    println!("Welcome, {}!", username);
                }
                LoginOutcome::InvalidCredentials => bail!("Invalid credentials."),
            }
        }
        Command::Chat => {
            let accounts = open_accounts(&cli, &config)?;
            let (default_domain, _) = config.repl.parse_default_domain();
            let repl_config = ReplConfig {
                history_file: config
                    .repl
                    .history_path()
                    .or_else(ConfigLoader::default_history_path),
                default_domain,
            };

            let mut repl = PromptRepl::new(
                generate,
                SignupUseCase::new(accounts.clone()),
                LoginUseCase::new(accounts),
                repl_config,
            )
            .with_output(output);

            repl.run().map_err(|e| anyhow!("REPL error: {}", e))?;
        }
    }

    Ok(())
}

/// Log warnings and fail on the first error-level issue
fn report_issues(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        if issue.is_error() {
            bail!("Invalid configuration: {}", issue.message);
        }
        warn!("{}", issue.message);
    }
    Ok(())
}

/// Build the account store from `--accounts` or the `[accounts]` section
fn open_accounts(cli: &Cli, config: &FileConfig) -> Result<Arc<dyn AccountRepository>> {
    let accounts_config = match &cli.accounts {
        Some(path) => FileAccountsConfig { path: path.clone() },
        None => config.accounts.clone(),
    };

    let (location, issues) = accounts_config.location();
    report_issues(&issues)?;
    let location = location.context("No account store configured")?;

    let store: Arc<dyn AccountRepository> = match location {
        AccountStoreLocation::File(path) => {
            info!("Using account table {}", path.display());
            Arc::new(
                CsvAccountStore::open(&path)
                    .with_context(|| format!("Failed to open {}", path.display()))?,
            )
        }
        AccountStoreLocation::InMemory => {
            info!("Using in-memory account store");
            Arc::new(InMemoryAccountStore::new())
        }
    };

    Ok(store)
}

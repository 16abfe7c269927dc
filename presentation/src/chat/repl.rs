//! REPL (Read-Eval-Print Loop) for interactive prompt generation

use super::command::ReplCommand;
use super::session::Session;
use crate::ConsoleFormatter;
use crate::config::{OutputConfig, ReplConfig};
use promptcraft_application::{
    GeneratePromptInput, GeneratePromptUseCase, LoginOutcome, LoginUseCase, SignupInput,
    SignupOutcome, SignupUseCase,
};
use promptcraft_domain::{ChatbotDomain, Country, Language};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use tracing::debug;

/// What the loop should do after a line has been handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text (if any) and keep reading
    Continue(String),
    /// Print the text and leave the loop
    Exit(String),
}

impl Reply {
    fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }
}

/// Interactive prompt REPL, gated behind login
pub struct PromptRepl {
    generate: GeneratePromptUseCase,
    signup: SignupUseCase,
    login: LoginUseCase,
    session: Session,
    output: OutputConfig,
    history_path: Option<PathBuf>,
}

impl PromptRepl {
    /// Create a new PromptRepl
    pub fn new(
        generate: GeneratePromptUseCase,
        signup: SignupUseCase,
        login: LoginUseCase,
        config: ReplConfig,
    ) -> Self {
        Self {
            generate,
            signup,
            login,
            session: Session::new(config.default_domain),
            output: OutputConfig::default(),
            history_path: config.history_file,
        }
    }

    /// Set the output configuration used for generated reports
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(&self.prompt_label());

            match readline {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    // Passwords are typed on /login and /signup lines
                    if !is_credential_line(trimmed) {
                        let _ = rl.add_history_entry(trimmed);
                    }

                    let reply = self.handle_line(&line);
                    if !reply.text().is_empty() {
                        println!("{}", reply.text());
                    }
                    if matches!(reply, Reply::Exit(_)) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Handle one input line and describe what to print.
    ///
    /// Queries reach the generator exactly as typed; a leading `//` stands
    /// for a literal `/`.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Reply::Continue(String::new());
        }

        let escaped = trimmed.starts_with("//");
        let command = if escaped {
            None
        } else {
            ReplCommand::parse(trimmed)
        };

        match command {
            Some(command) => self.handle_command(command),
            None if self.session.is_logged_in() => {
                let input = if escaped {
                    line.replacen('/', "", 1)
                } else {
                    line.to_string()
                };
                Reply::Continue(self.process_input(&input))
            }
            None => Reply::Continue(
                "Please log in first: /login <username> <password> (or /signup to create an account)"
                    .to_string(),
            ),
        }
    }

    fn handle_command(&mut self, command: ReplCommand) -> Reply {
        debug!("REPL command: {:?}", redact(&command));

        match command {
            ReplCommand::Quit => Reply::Exit("Bye!".to_string()),
            ReplCommand::Help => Reply::Continue(self.help_text()),
            ReplCommand::Usage(usage) => Reply::Continue(format!("Usage: {}", usage)),
            ReplCommand::Unknown(name) => Reply::Continue(format!(
                "Unknown command: {}\nType /help for available commands",
                name
            )),
            ReplCommand::Login { username, password } => {
                Reply::Continue(self.do_login(&username, &password))
            }
            ReplCommand::Signup {
                username,
                password,
                country,
                language,
            } => Reply::Continue(self.do_signup(username, password, &country, &language)),
            other if !self.session.is_logged_in() => Reply::Continue(format!(
                "{} is only available after login",
                command_name(&other)
            )),
            ReplCommand::Logout => match self.session.logout() {
                Some(user) => Reply::Continue(format!("Logged out {}.", user)),
                None => Reply::Continue(String::new()),
            },
            ReplCommand::WhoAmI => Reply::Continue(format!(
                "{} (domain: {})",
                self.session.username().unwrap_or_default(),
                self.session.domain()
            )),
            ReplCommand::Domains => Reply::Continue(self.domains_text()),
            ReplCommand::Domain(None) => {
                Reply::Continue(format!("Current domain: {}", self.session.domain()))
            }
            ReplCommand::Domain(Some(name)) => match name.parse::<ChatbotDomain>() {
                Ok(domain) => {
                    self.session.set_domain(domain);
                    Reply::Continue(format!("Domain set to {}", domain))
                }
                Err(e) => Reply::Continue(format!("{}\n{}", e, self.domains_text())),
            },
        }
    }

    fn do_login(&mut self, username: &str, password: &str) -> String {
        if let Some(current) = self.session.username() {
            return format!("Already logged in as {}. Use /logout first.", current);
        }

        match self.login.execute(username, password) {
            Ok(LoginOutcome::Authenticated { username }) => {
                let text = format!(
                    "Login successful!\nWelcome, {}! Current domain: {}",
                    username,
                    self.session.domain()
                );
                self.session.login(username);
                text
            }
            Ok(LoginOutcome::InvalidCredentials) => "Invalid credentials.".to_string(),
            Err(e) => format!("Error: {}", e),
        }
    }

    fn do_signup(
        &mut self,
        username: String,
        password: String,
        country: &str,
        language: &str,
    ) -> String {
        let country = match country.parse::<Country>() {
            Ok(country) => country,
            Err(e) => return format!("{} (choose from: {})", e, join(Country::ALL)),
        };
        let language = match language.parse::<Language>() {
            Ok(language) => language,
            Err(e) => return format!("{} (choose from: {})", e, join(Language::ALL)),
        };

        let input = SignupInput::new(username, password, country, language);
        match self.signup.execute(input) {
            Ok(SignupOutcome::Created) => "Account created! Please login now.".to_string(),
            Ok(SignupOutcome::UsernameTaken) => {
                "Username already exists. Try another.".to_string()
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    fn process_input(&self, line: &str) -> String {
        let input = GeneratePromptInput::new(self.session.domain(), line);
        let report = self.generate.execute(input);
        ConsoleFormatter::render(&report, self.output.format)
    }

    fn prompt_label(&self) -> String {
        if self.session.is_logged_in() {
            format!("{}> ", self.session.domain().slug())
        } else {
            "login> ".to_string()
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        promptcraft - Prompt Generator       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", self.help_text());
    }

    fn help_text(&self) -> String {
        if self.session.is_logged_in() {
            [
                "Commands:",
                "  /domain <name>    - Switch chatbot domain",
                "  /domain           - Show current domain",
                "  /domains          - List domains",
                "  /whoami           - Show current user",
                "  /logout           - Log out",
                "  /help, /h, /?     - Show this help",
                "  /quit, /exit, /q  - Exit",
                "",
                "Anything else is used as input for the current domain.",
                "Start a line with // to send input that begins with /.",
            ]
            .join("\n")
        } else {
            [
                "Commands:",
                "  /login <username> <password>",
                "  /signup <username> <password> <country> <language>",
                "  /help, /h, /?     - Show this help",
                "  /quit, /exit, /q  - Exit",
                "",
                format!("Countries: {}", join(Country::ALL)).as_str(),
                format!("Languages: {}", join(Language::ALL)).as_str(),
            ]
            .join("\n")
        }
    }

    fn domains_text(&self) -> String {
        let current = self.session.domain();
        let mut lines = vec!["Domains:".to_string()];
        for domain in ChatbotDomain::ALL {
            let marker = if domain == current { "*" } else { " " };
            lines.push(format!(" {} {} ({})", marker, domain, domain.slug()));
        }
        lines.join("\n")
    }
}

fn join<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_credential_line(line: &str) -> bool {
    line.starts_with("/login") || line.starts_with("/signup")
}

fn command_name(command: &ReplCommand) -> &'static str {
    match command {
        ReplCommand::Logout => "/logout",
        ReplCommand::WhoAmI => "/whoami",
        ReplCommand::Domains => "/domains",
        ReplCommand::Domain(_) => "/domain",
        _ => "This command",
    }
}

fn redact(command: &ReplCommand) -> ReplCommand {
    match command {
        ReplCommand::Login { username, .. } => ReplCommand::Login {
            username: username.clone(),
            password: "***".to_string(),
        },
        ReplCommand::Signup {
            username,
            country,
            language,
            ..
        } => ReplCommand::Signup {
            username: username.clone(),
            password: "***".to_string(),
            country: country.clone(),
            language: language.clone(),
        },
        other => other.clone(),
    }
}

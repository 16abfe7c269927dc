//! Slash-command parsing for the interactive session

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    Login {
        username: String,
        password: String,
    },
    Signup {
        username: String,
        password: String,
        country: String,
        language: String,
    },
    Logout,
    WhoAmI,
    Domains,
    /// `/domain` with no argument shows the current domain
    Domain(Option<String>),
    /// Known command with the wrong arguments; carries the usage line
    Usage(&'static str),
    Unknown(String),
}

pub const LOGIN_USAGE: &str = "/login <username> <password>";
pub const SIGNUP_USAGE: &str = "/signup <username> <password> <country> <language>";

impl ReplCommand {
    /// Parse a line starting with `/`. Returns `None` for anything else.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }

        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let command = match name {
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/login" => match args.as_slice() {
                [username, password] => ReplCommand::Login {
                    username: username.to_string(),
                    password: password.to_string(),
                },
                _ => ReplCommand::Usage(LOGIN_USAGE),
            },
            "/signup" => match args.as_slice() {
                [username, password, country, language] => ReplCommand::Signup {
                    username: username.to_string(),
                    password: password.to_string(),
                    country: country.to_string(),
                    language: language.to_string(),
                },
                _ => ReplCommand::Usage(SIGNUP_USAGE),
            },
            "/logout" => ReplCommand::Logout,
            "/whoami" => ReplCommand::WhoAmI,
            "/domains" => ReplCommand::Domains,
            // Domain names contain spaces ("HR Bot"), so keep the rest of the line
            "/domain" => {
                let rest = line["/domain".len()..].trim();
                ReplCommand::Domain((!rest.is_empty()).then(|| rest.to_string()))
            }
            other => ReplCommand::Unknown(other.to_string()),
        };

        Some(command)
    }
}

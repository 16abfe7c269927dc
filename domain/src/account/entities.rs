//! Account entity

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered user of the prompt generator.
///
/// Field order matches the column order of the persisted table:
/// `username,password,country,language`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub country: String,
    pub language: String,
}

impl Account {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        country: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            country: country.into(),
            language: language.into(),
        }
    }

    /// Exact, case-sensitive match on both username and password
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

// Keep passwords out of logs and panic messages.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("country", &self.country)
            .field("language", &self.language)
            .finish()
    }
}

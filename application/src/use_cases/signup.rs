//! Signup use case
//!
//! Registers a new account unless the username is already taken.

use promptcraft_domain::{Account, AccountRepository, AccountStoreError, Country, Language};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during signup
#[derive(Error, Debug)]
pub enum SignupError {
    #[error("Account store error: {0}")]
    Store(#[from] AccountStoreError),
}

/// Input for the [`SignupUseCase`]
#[derive(Debug, Clone)]
pub struct SignupInput {
    pub username: String,
    pub password: String,
    pub country: Country,
    pub language: Language,
}

impl SignupInput {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        country: Country,
        language: Language,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            country,
            language,
        }
    }

    fn into_account(self) -> Account {
        Account::new(
            self.username,
            self.password,
            self.country.as_str(),
            self.language.as_str(),
        )
    }
}

/// Result of a signup attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Account stored; the user may now log in
    Created,
    /// Another account already owns this username; nothing was written
    UsernameTaken,
}

/// Use case for creating accounts
#[derive(Clone)]
pub struct SignupUseCase {
    accounts: Arc<dyn AccountRepository>,
}

impl SignupUseCase {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    pub fn execute(&self, input: SignupInput) -> Result<SignupOutcome, SignupError> {
        let username = input.username.clone();
        if self.accounts.save_user(&input.into_account())? {
            info!("Created account '{}'", username);
            Ok(SignupOutcome::Created)
        } else {
            warn!("Signup rejected, username '{}' already exists", username);
            Ok(SignupOutcome::UsernameTaken)
        }
    }
}

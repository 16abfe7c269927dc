//! Login use case

use promptcraft_domain::{AccountRepository, AccountStoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during login
#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Account store error: {0}")]
    Store(#[from] AccountStoreError),
}

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated { username: String },
    InvalidCredentials,
}

impl LoginOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, LoginOutcome::Authenticated { .. })
    }
}

/// Use case for checking credentials against the account store
#[derive(Clone)]
pub struct LoginUseCase {
    accounts: Arc<dyn AccountRepository>,
}

impl LoginUseCase {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    pub fn execute(&self, username: &str, password: &str) -> Result<LoginOutcome, LoginError> {
        if self.accounts.check_credentials(username, password)? {
            info!("User '{}' logged in", username);
            Ok(LoginOutcome::Authenticated {
                username: username.to_string(),
            })
        } else {
            warn!("Failed login for '{}'", username);
            Ok(LoginOutcome::InvalidCredentials)
        }
    }
}

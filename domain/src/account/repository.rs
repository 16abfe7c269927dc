//! Account repository trait

use super::entities::Account;
use thiserror::Error;

/// Errors raised by account persistence
#[derive(Error, Debug)]
pub enum AccountStoreError {
    #[error("Account store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed account record: {0}")]
    Malformed(String),

    #[error("Account store unavailable: {0}")]
    Unavailable(String),
}

/// Repository trait for user accounts
///
/// This is a domain-level abstraction over where accounts live.
/// Implementations (flat file, in-memory) live in the infrastructure layer.
pub trait AccountRepository: Send + Sync {
    /// All stored accounts, in insertion order
    fn load_users(&self) -> Result<Vec<Account>, AccountStoreError>;

    /// Persist `account` unless its username is already taken.
    ///
    /// Returns `Ok(false)` without writing anything on a duplicate username.
    fn save_user(&self, account: &Account) -> Result<bool, AccountStoreError>;

    /// True iff an account with exactly this username and password exists
    fn check_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, AccountStoreError> {
        Ok(self
            .load_users()?
            .iter()
            .any(|account| account.matches(username, password)))
    }

    /// True iff some account already uses `username`
    fn username_exists(&self, username: &str) -> Result<bool, AccountStoreError> {
        Ok(self
            .load_users()?
            .iter()
            .any(|account| account.username == username))
    }
}

//! In-memory account store for ephemeral sessions and tests

use promptcraft_domain::{Account, AccountRepository, AccountStoreError};
use std::sync::RwLock;

/// Account repository that keeps everything in process memory
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing accounts (later duplicates are dropped)
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let mut seeded: Vec<Account> = Vec::new();
        for account in accounts {
            if !seeded.iter().any(|a| a.username == account.username) {
                seeded.push(account);
            }
        }
        Self {
            accounts: RwLock::new(seeded),
        }
    }

    fn poisoned() -> AccountStoreError {
        AccountStoreError::Unavailable("account store lock poisoned".to_string())
    }
}

impl AccountRepository for InMemoryAccountStore {
    fn load_users(&self) -> Result<Vec<Account>, AccountStoreError> {
        let accounts = self.accounts.read().map_err(|_| Self::poisoned())?;
        Ok(accounts.clone())
    }

    fn save_user(&self, account: &Account) -> Result<bool, AccountStoreError> {
        let mut accounts = self.accounts.write().map_err(|_| Self::poisoned())?;
        if accounts.iter().any(|a| a.username == account.username) {
            return Ok(false);
        }
        accounts.push(account.clone());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_twice_true_then_false() {
        let store = InMemoryAccountStore::new();
        let account = Account::new("alice", "pw", "India", "English");
        assert!(store.save_user(&account).unwrap());
        assert!(!store.save_user(&account).unwrap());
        assert_eq!(store.load_users().unwrap().len(), 1);
    }

    #[test]
    fn test_with_accounts_drops_duplicates() {
        let store = InMemoryAccountStore::with_accounts([
            Account::new("alice", "one", "India", "Hindi"),
            Account::new("alice", "two", "USA", "English"),
            Account::new("bob", "three", "France", "French"),
        ]);
        assert_eq!(store.load_users().unwrap().len(), 2);
        assert!(store.check_credentials("alice", "one").unwrap());
        assert!(!store.check_credentials("alice", "two").unwrap());
    }
}

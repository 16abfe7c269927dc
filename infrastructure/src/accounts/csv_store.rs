//! Flat CSV file account store.
//!
//! Records live in a single table with the header
//! `username,password,country,language`. Lookups are linear scans and new
//! accounts are appended.
//!
//! There is no locking: two processes signing up at the same time can both
//! pass the duplicate check and append the same username.

use promptcraft_domain::{Account, AccountRepository, AccountStoreError};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const HEADER: [&str; 4] = ["username", "password", "country", "language"];

fn store_error(err: csv::Error) -> AccountStoreError {
    if err.is_io_error() {
        if let csv::ErrorKind::Io(io) = err.into_kind() {
            return AccountStoreError::Io(io);
        }
        return AccountStoreError::Malformed("unreadable record".to_string());
    }
    AccountStoreError::Malformed(err.to_string())
}

/// Whether the table is empty or its last byte is a line terminator
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Account repository backed by a CSV file
#[derive(Debug, Clone)]
pub struct CsvAccountStore {
    path: PathBuf,
}

impl CsvAccountStore {
    /// Open the store at `path`, creating the file with a header row if needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AccountStoreError> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        store.ensure_file()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_file(&self) -> Result<(), AccountStoreError> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        debug!("Creating account table at {}", self.path.display());
        let mut writer = csv::Writer::from_path(&self.path).map_err(store_error)?;
        writer.write_record(HEADER).map_err(store_error)?;
        writer.flush()?;
        Ok(())
    }
}

impl AccountRepository for CsvAccountStore {
    fn load_users(&self) -> Result<Vec<Account>, AccountStoreError> {
        if !self.path.exists() {
            warn!(
                "Account table {} is missing, treating as empty",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(store_error)?;

        reader
            .deserialize::<Account>()
            .map(|record| record.map_err(store_error))
            .collect()
    }

    fn save_user(&self, account: &Account) -> Result<bool, AccountStoreError> {
        self.ensure_file()?;

        if self.username_exists(&account.username)? {
            return Ok(false);
        }

        let mut file: File = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)?;
        // Hand-edited tables may lack a final newline
        if !ends_with_newline(&mut file)? {
            file.write_all(b"\n")?;
        }
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(account).map_err(store_error)?;
        writer.flush()?;

        debug!("Appended account '{}' to {}", account.username, self.path.display());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> CsvAccountStore {
        CsvAccountStore::open(dir.path().join("users.csv")).unwrap()
    }

    #[test]
    fn test_open_creates_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "username,password,country,language\n");
        assert!(store.load_users().unwrap().is_empty());
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("users.csv");
        let store = CsvAccountStore::open(&path).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_twice_true_then_false() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let alice = Account::new("alice", "pw1", "India", "Hindi");
        assert!(store.save_user(&alice).unwrap());
        assert!(!store
            .save_user(&Account::new("alice", "pw2", "USA", "English"))
            .unwrap());

        let users = store.load_users().unwrap();
        assert_eq!(users, vec![alice]);
    }

    #[test]
    fn test_check_credentials_exact_pair_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .save_user(&Account::new("alice", "pw1", "India", "Hindi"))
            .unwrap();
        store
            .save_user(&Account::new("bob", "pw2", "France", "French"))
            .unwrap();

        assert!(store.check_credentials("alice", "pw1").unwrap());
        assert!(store.check_credentials("bob", "pw2").unwrap());
        assert!(!store.check_credentials("alice", "pw2").unwrap());
        assert!(!store.check_credentials("carol", "pw1").unwrap());
    }

    #[test]
    fn test_records_persist_across_instances_in_order() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = store_in(&dir);
            store
                .save_user(&Account::new("zed", "a", "Other", "Other"))
                .unwrap();
            store
                .save_user(&Account::new("amy", "b", "Germany", "German"))
                .unwrap();
        }

        let reopened = store_in(&dir);
        let names: Vec<String> = reopened
            .load_users()
            .unwrap()
            .into_iter()
            .map(|a| a.username)
            .collect();
        assert_eq!(names, vec!["zed", "amy"]);
    }

    #[test]
    fn test_fields_with_commas_and_quotes_survive() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let tricky = Account::new("o'neil, jr", "p\"w,1", "USA", "English");
        assert!(store.save_user(&tricky).unwrap());
        assert!(store.check_credentials("o'neil, jr", "p\"w,1").unwrap());
    }

    #[test]
    fn test_reads_table_written_elsewhere() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.csv");
        std::fs::write(
            &path,
            "username,password,country,language\nravi,abc,India,Hindi\n",
        )
        .unwrap();

        let store = CsvAccountStore::open(&path).unwrap();
        assert!(store.check_credentials("ravi", "abc").unwrap());
    }

    #[test]
    fn test_append_after_table_without_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.csv");
        std::fs::write(
            &path,
            "username,password,country,language\nravi,abc,India,Hindi",
        )
        .unwrap();

        let store = CsvAccountStore::open(&path).unwrap();
        assert!(store
            .save_user(&Account::new("alice", "pw", "USA", "English"))
            .unwrap());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "username,password,country,language\nravi,abc,India,Hindi\nalice,pw,USA,English\n"
        );
        assert!(store.check_credentials("ravi", "abc").unwrap());
        assert!(store.check_credentials("alice", "pw").unwrap());
    }

    #[test]
    fn test_malformed_table_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.csv");
        std::fs::write(&path, "username,password,country,language\nonly,two\n").unwrap();

        let store = CsvAccountStore::open(&path).unwrap();
        assert!(matches!(
            store.load_users(),
            Err(AccountStoreError::Malformed(_))
        ));
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::remove_file(store.path()).unwrap();
        assert!(store.load_users().unwrap().is_empty());
    }
}

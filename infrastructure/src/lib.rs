//! Infrastructure layer for promptcraft
//!
//! This crate contains adapters that implement the traits defined in the
//! domain layer (account storage, random sources), plus configuration file
//! loading.

pub mod accounts;
pub mod config;
pub mod random;

// Re-export commonly used types
pub use accounts::{CsvAccountStore, InMemoryAccountStore};
pub use config::{
    AccountStoreLocation, ConfigLoader, FileAccountsConfig, FileConfig, FileGenerationConfig,
    FileOutputConfig, FileReplConfig,
};
pub use random::{SeededRandomSource, ThreadRandomSource};

//! Account store adapters implementing
//! [`AccountRepository`](promptcraft_domain::AccountRepository).

mod csv_store;
mod memory_store;

pub use csv_store::CsvAccountStore;
pub use memory_store::InMemoryAccountStore;

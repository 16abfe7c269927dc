//! Account domain.
//!
//! - [`entities::Account`] - a username/password/profile record
//! - [`options::Country`] / [`options::Language`] - signup pick-lists
//! - [`repository::AccountRepository`] - trait for account persistence

pub mod entities;
pub mod options;
pub mod repository;

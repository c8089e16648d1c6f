//! SQLite persistence adapters.
//!
//! Provides a SQLite-backed product store using Diesel ORM.

pub mod database;
pub mod store;

pub use store::SqliteProductStore;

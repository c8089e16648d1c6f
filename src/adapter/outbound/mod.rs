//! Outbound adapters (driven side).

pub mod i18n;
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

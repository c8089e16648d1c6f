//! Catalogue - a product catalogue served as a JSON HTTP API.
//!
//! Products (`id`, `title`, `details`) can be listed with an optional
//! case-insensitive title filter, fetched, created, updated and deleted.
//! Request payloads are validated at the HTTP boundary and failures are
//! rendered as localized `application/problem+json` documents.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - `Product`, `ProductId` and domain errors
//! - [`port`] - Traits the application exposes (`ProductCatalogue`) and
//!   consumes (`ProductStore`, `MessageResolver`)
//! - [`application`] - `ProductService`, the use cases
//! - [`adapter`] - HTTP API and CLI (inbound); memory/SQLite stores and
//!   message catalogues (outbound)
//! - [`infrastructure`] - Configuration and wiring
//! - [`error`] - Crate-wide error types
//!
//! # Features
//!
//! - `sqlite` (default) - Diesel-backed SQLite product store
//!
//! # Example
//!
//! ```no_run
//! use catalogue::infrastructure::bootstrap;
//! use catalogue::infrastructure::config::settings::Config;
//!
//! # async fn run() -> catalogue::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! config.init_logging();
//! bootstrap::serve(config).await
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

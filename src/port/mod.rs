//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!            ┌──────────────┐
//!            │  HTTP / CLI  │   inbound adapters
//!            └──────┬───────┘
//!                   │ ProductCatalogue
//!            ┌──────▼───────┐
//!            │ Application  │
//!            └──────┬───────┘
//!                   │ ProductStore, MessageResolver
//!     ┌─────────────┼──────────────┐
//!     ▼             ▼              ▼
//! ┌────────┐   ┌─────────┐   ┌──────────┐
//! │ Memory │   │ SQLite  │   │ Messages │   outbound adapters
//! └────────┘   └─────────┘   └──────────┘
//! ```

pub mod inbound;
pub mod outbound;

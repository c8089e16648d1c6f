//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`]: Drivers of the application (HTTP API, CLI)
//! - [`outbound`]: Infrastructure the application drives (stores, messages)

pub mod inbound;
pub mod outbound;

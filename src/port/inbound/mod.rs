//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`catalogue`]: Product use cases driven by the HTTP API

pub mod catalogue;

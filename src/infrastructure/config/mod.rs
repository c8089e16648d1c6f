//! Infrastructure configuration modules.

pub mod auth;
pub mod logging;
pub mod messages;
pub mod server;
pub mod settings;
pub mod storage;

//! Catalogue domain types.
//!
//! - [`id`]: Identifier newtypes
//! - [`product`]: The product entity and its unsaved form
//! - [`error`]: Errors raised when a domain rule is violated

pub mod error;
pub mod id;
pub mod product;

pub use error::DomainError;
pub use id::ProductId;
pub use product::{Product, ProductDraft};

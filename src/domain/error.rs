//! Domain errors for the catalogue.
//!
//! Each variant carries a stable message code so that inbound adapters can
//! render a localized description without matching on display strings.

use thiserror::Error;

use super::id::ProductId;

/// Errors that occur when a domain rule is violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No product with the given identifier exists in the store.
    #[error("product {id} not found")]
    ProductNotFound {
        /// The identifier that was looked up.
        id: ProductId,
    },
}

impl DomainError {
    /// Message code used to look up a localized description.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ProductNotFound { .. } => "catalogue.errors.product.not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_not_found_code() {
        let err = DomainError::ProductNotFound {
            id: ProductId::new(1),
        };
        assert_eq!(err.code(), "catalogue.errors.product.not_found");
        assert_eq!(err.to_string(), "product 1 not found");
    }
}

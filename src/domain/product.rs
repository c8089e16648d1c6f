//! The product entity.
//!
//! Title length rules are enforced at the HTTP boundary, so the entity
//! itself accepts any text.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A persisted catalogue product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identity, immutable once assigned.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Optional free-form description.
    pub details: Option<String>,
}

impl Product {
    /// Create a product from its parts.
    pub fn new(id: ProductId, title: impl Into<String>, details: Option<String>) -> Self {
        Self {
            id,
            title: title.into(),
            details,
        }
    }

    /// Attach a store-assigned id to a draft.
    #[must_use]
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            title: draft.title,
            details: draft.details,
        }
    }

    /// Overwrite the mutable fields in place.
    pub fn apply(&mut self, title: impl Into<String>, details: Option<String>) {
        self.title = title.into();
        self.details = details;
    }

    /// Whether the title contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercased with [`fold_case`].
    #[must_use]
    pub fn title_contains_folded(&self, needle: &str) -> bool {
        fold_case(&self.title).contains(needle)
    }
}

/// A product that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub title: String,
    pub details: Option<String>,
}

impl ProductDraft {
    pub fn new(title: impl Into<String>, details: Option<String>) -> Self {
        Self {
            title: title.into(),
            details,
        }
    }
}

/// Unicode lowercase folding used for case-insensitive title matching.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

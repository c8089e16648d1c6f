//! Shared handler state.

use std::sync::Arc;

use axum::http::HeaderMap;

use super::locale::request_locale;
use super::problem::Translator;
use crate::port::outbound::message::{Locale, MessageResolver};

/// Message resolution plus the locale used when a request names none.
#[derive(Clone)]
pub struct Localizer {
    messages: Arc<dyn MessageResolver>,
    default_locale: Locale,
}

impl Localizer {
    pub fn new(messages: Arc<dyn MessageResolver>, default_locale: Locale) -> Self {
        Self {
            messages,
            default_locale,
        }
    }

    /// A translator for the locale `headers` ask for.
    pub fn translator(&self, headers: &HeaderMap, instance: impl Into<String>) -> Translator<'_> {
        let locale = request_locale(headers, &self.default_locale);
        Translator::new(self.messages.as_ref(), locale, instance)
    }
}

/// State shared by the product handlers.
pub struct AppState<C> {
    pub catalogue: Arc<C>,
    pub localizer: Localizer,
    /// Prefix in front of `/products`, empty or starting with `/`.
    pub base_path: Arc<str>,
}

impl<C> AppState<C> {
    pub fn new(catalogue: Arc<C>, localizer: Localizer, base_path: impl Into<Arc<str>>) -> Self {
        Self {
            catalogue,
            localizer,
            base_path: base_path.into(),
        }
    }

    /// Absolute path of the item resource for `id`.
    pub fn product_path(&self, id: impl std::fmt::Display) -> String {
        format!("{}/products/{}", self.base_path, id)
    }
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            catalogue: Arc::clone(&self.catalogue),
            localizer: self.localizer.clone(),
            base_path: Arc::clone(&self.base_path),
        }
    }
}

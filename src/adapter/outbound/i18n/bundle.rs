//! Message catalogues loaded from TOML.
//!
//! Each catalogue is a flat TOML table mapping message codes to text, one
//! file per language tag. English and Russian catalogues ship with the
//! binary; a directory of `<tag>.toml` files can add languages or override
//! individual entries.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::port::outbound::message::{Locale, MessageResolver};

const BUNDLED: &[(&str, &str)] = &[
    ("en", include_str!("../../../../resources/messages/en.toml")),
    ("ru", include_str!("../../../../resources/messages/ru.toml")),
];

type Catalogue = HashMap<String, String>;

/// Message resolver backed by per-language catalogues.
///
/// Lookup order for a locale such as `ru-RU`: the full tag, the primary
/// language, the default locale's tag and language, then the fallback.
#[derive(Debug, Clone)]
pub struct BundleMessageResolver {
    catalogues: HashMap<String, Catalogue>,
    default_locale: Locale,
}

impl BundleMessageResolver {
    /// Create a resolver with no catalogues.
    pub fn empty(default_locale: Locale) -> Self {
        Self {
            catalogues: HashMap::new(),
            default_locale,
        }
    }

    /// Create a resolver with the catalogues that ship with the binary.
    ///
    /// # Errors
    /// Returns an error if a bundled catalogue is not a flat string table.
    pub fn bundled(default_locale: Locale) -> Result<Self> {
        let mut resolver = Self::empty(default_locale);
        for (tag, content) in BUNDLED {
            resolver.merge_toml(tag, content)?;
        }
        Ok(resolver)
    }

    /// Merge every `<tag>.toml` file in `dir` into the catalogues.
    ///
    /// Entries from the directory override bundled entries with the same
    /// code. Files whose stem is not a language tag are skipped.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read or a catalogue does
    /// not parse.
    pub fn load_directory(&mut self, dir: &Path) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let locale: Locale = match stem.parse() {
                Ok(locale) => locale,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping message catalogue");
                    continue;
                }
            };

            let content = fs::read_to_string(&path)?;
            self.merge_toml(&locale.tag(), &content)?;
            debug!(locale = %locale, path = %path.display(), "Loaded message catalogue");
        }
        Ok(())
    }

    /// Add or replace a single message.
    pub fn insert(&mut self, locale: &Locale, code: impl Into<String>, message: impl Into<String>) {
        self.catalogues
            .entry(locale.tag())
            .or_default()
            .insert(code.into(), message.into());
    }

    /// The locale used when the requested one has no entry.
    #[must_use]
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    fn merge_toml(&mut self, tag: &str, content: &str) -> Result<()> {
        let entries: Catalogue = toml::from_str(content)
            .map_err(|e| Error::Parse(format!("message catalogue {tag}: {e}")))?;
        self.catalogues
            .entry(tag.to_string())
            .or_default()
            .extend(entries);
        Ok(())
    }

    fn lookup(&self, tag: &str, code: &str) -> Option<&str> {
        self.catalogues
            .get(tag)
            .and_then(|catalogue| catalogue.get(code))
            .map(String::as_str)
    }
}

impl MessageResolver for BundleMessageResolver {
    fn resolve(&self, code: &str, locale: &Locale, fallback: &str) -> String {
        let candidates = [
            locale.tag(),
            locale.language().to_string(),
            self.default_locale.tag(),
            self.default_locale.language().to_string(),
        ];

        candidates
            .iter()
            .find_map(|tag| self.lookup(tag, code))
            .unwrap_or(fallback)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> BundleMessageResolver {
        BundleMessageResolver::bundled(Locale::new("en")).unwrap()
    }

    #[test]
    fn resolves_bundled_english_and_russian() {
        let resolver = resolver();
        let code = "catalogue.errors.product.title_size_is_invalid";

        assert_eq!(
            resolver.message(code, &Locale::new("en")),
            "Product title must be between 3 and 50 characters"
        );
        assert_eq!(
            resolver.message(code, &Locale::new("ru")),
            "Название товара должно быть от 3 до 50 символов"
        );
    }

    #[test]
    fn regional_locale_falls_back_to_language() {
        let resolver = resolver();
        let locale: Locale = "ru-RU".parse().unwrap();
        assert_eq!(
            resolver.message("catalogue.errors.product.not_found", &locale),
            "Товар не найден"
        );
    }

    #[test]
    fn unknown_locale_falls_back_to_default() {
        let resolver = resolver();
        assert_eq!(
            resolver.message("catalogue.errors.product.not_found", &Locale::new("de")),
            "Product not found"
        );
    }

    #[test]
    fn unknown_code_falls_back_to_given_text() {
        let resolver = resolver();
        let locale = Locale::new("ru");
        assert_eq!(resolver.message("no.such.code", &locale), "no.such.code");
        assert_eq!(resolver.resolve("no.such.code", &locale, "fallback"), "fallback");
    }

    #[test]
    fn regional_entry_wins_over_language_entry() {
        let mut resolver = resolver();
        let gb: Locale = "en-GB".parse().unwrap();
        resolver.insert(&gb, "catalogue.errors.product.not_found", "Product could not be found");

        assert_eq!(
            resolver.message("catalogue.errors.product.not_found", &gb),
            "Product could not be found"
        );
        assert_eq!(
            resolver.message("catalogue.errors.product.not_found", &Locale::new("en")),
            "Product not found"
        );
    }

    #[test]
    fn directory_catalogues_override_and_extend() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("de.toml"),
            "\"catalogue.errors.product.not_found\" = \"Produkt nicht gefunden\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("en.toml"),
            "\"catalogue.errors.product.not_found\" = \"No such product\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("README.md"), "ignored").unwrap();

        let mut resolver = resolver();
        resolver.load_directory(dir.path()).unwrap();

        assert_eq!(
            resolver.message("catalogue.errors.product.not_found", &Locale::new("de")),
            "Produkt nicht gefunden"
        );
        assert_eq!(
            resolver.message("catalogue.errors.product.not_found", &Locale::new("en")),
            "No such product"
        );
        assert_eq!(
            resolver.message("catalogue.errors.internal", &Locale::new("en")),
            "An unexpected error occurred"
        );
    }

    #[test]
    fn malformed_catalogue_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("fr.toml"), "[nested]\nkey = 1\n").unwrap();

        let mut resolver = resolver();
        let err = resolver.load_directory(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}

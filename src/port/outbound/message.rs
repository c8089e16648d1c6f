//! Message resolution port.
//!
//! Turns stable message codes into human-readable text for a locale. The
//! locale is always passed explicitly; there is no ambient locale.

use std::fmt;
use std::str::FromStr;

/// A language tag such as `en`, `ru` or `ru-RU`.
///
/// Stored lowercased; `language` is the primary subtag and `region` the
/// optional second subtag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Build a locale from a primary language subtag.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into().to_ascii_lowercase(),
            region: None,
        }
    }

    /// Primary language subtag, e.g. `ru`.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Region subtag if present, e.g. `ru` for `ru-RU`.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Full lowercased tag, e.g. `ru-ru`.
    #[must_use]
    pub fn tag(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{}", self.language, region),
            None => self.language.clone(),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region.to_ascii_uppercase()),
            None => write!(f, "{}", self.language),
        }
    }
}

/// Error returned when a string is not a usable language tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid language tag: {0:?}")]
pub struct InvalidLocale(pub String);

impl FromStr for Locale {
    type Err = InvalidLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut parts = trimmed.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        if language.is_empty()
            || language.len() > 8
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(InvalidLocale(s.to_string()));
        }
        let region = match parts.next() {
            Some(region) if !region.is_empty() && region.chars().all(|c| c.is_ascii_alphanumeric()) => {
                Some(region.to_ascii_lowercase())
            }
            Some(_) => return Err(InvalidLocale(s.to_string())),
            None => None,
        };
        Ok(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }
}

/// Resolves message codes to localized text.
pub trait MessageResolver: Send + Sync {
    /// Look up `code` for `locale`, returning `fallback` when no catalogue
    /// has an entry for it.
    fn resolve(&self, code: &str, locale: &Locale, fallback: &str) -> String;

    /// Look up `code`, falling back to the code itself.
    fn message(&self, code: &str, locale: &Locale) -> String {
        self.resolve(code, locale, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_and_region() {
        let locale: Locale = "ru-RU".parse().unwrap();
        assert_eq!(locale.language(), "ru");
        assert_eq!(locale.region(), Some("ru"));
        assert_eq!(locale.tag(), "ru-ru");
        assert_eq!(locale.to_string(), "ru-RU");
    }

    #[test]
    fn accepts_underscore_separator() {
        let locale: Locale = "en_GB".parse().unwrap();
        assert_eq!(locale.tag(), "en-gb");
    }

    #[test]
    fn rejects_wildcard_and_garbage() {
        assert!("*".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
        assert!("en-".parse::<Locale>().is_err());
    }

    struct Echo;

    impl MessageResolver for Echo {
        fn resolve(&self, _code: &str, _locale: &Locale, fallback: &str) -> String {
            fallback.to_string()
        }
    }

    #[test]
    fn message_falls_back_to_code() {
        assert_eq!(Echo.message("some.code", &Locale::default()), "some.code");
    }
}

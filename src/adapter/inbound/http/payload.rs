//! Request payloads and their validation.
//!
//! Both payloads carry the same fields and share the same rules. `title` is
//! optional at the JSON level so that a missing or `null` title is reported
//! as a validation message rather than as an unreadable body.

use serde::Deserialize;

/// Shortest accepted title, in characters after trimming.
pub const TITLE_MIN_CHARS: usize = 3;
/// Longest accepted title, in characters after trimming.
pub const TITLE_MAX_CHARS: usize = 50;

const TITLE_IS_NULL: &str = "catalogue.errors.product.title_is_null";
const TITLE_SIZE_IS_INVALID: &str = "catalogue.errors.product.title_size_is_invalid";

/// A constraint violated by one payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    /// Message code resolved against the request locale.
    pub code: &'static str,
}

/// Payload fields after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub title: String,
    pub details: Option<String>,
}

/// Body of `POST /products`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProductPayload {
    pub title: Option<String>,
    pub details: Option<String>,
}

/// Body of `PATCH /products/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductPayload {
    pub title: Option<String>,
    pub details: Option<String>,
}

impl NewProductPayload {
    /// Check every field, reporting all violations at once.
    ///
    /// # Errors
    /// Returns the violated constraints, one per field.
    pub fn validate(self) -> Result<ProductFields, Vec<FieldViolation>> {
        validate_fields(self.title, self.details)
    }
}

impl UpdateProductPayload {
    /// Check every field, reporting all violations at once.
    ///
    /// # Errors
    /// Returns the violated constraints, one per field.
    pub fn validate(self) -> Result<ProductFields, Vec<FieldViolation>> {
        validate_fields(self.title, self.details)
    }
}

fn validate_fields(
    title: Option<String>,
    details: Option<String>,
) -> Result<ProductFields, Vec<FieldViolation>> {
    let mut violations = Vec::new();
    if let Some(code) = check_title(title.as_deref()) {
        violations.push(FieldViolation { field: "title", code });
    }

    match title {
        Some(title) if violations.is_empty() => Ok(ProductFields { title, details }),
        _ => Err(violations),
    }
}

/// The message code of the constraint `title` violates, if any.
#[must_use]
pub fn check_title(title: Option<&str>) -> Option<&'static str> {
    let Some(title) = title else {
        return Some(TITLE_IS_NULL);
    };
    let chars = title.trim().chars().count();
    if (TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&chars) {
        None
    } else {
        Some(TITLE_SIZE_IS_INVALID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_payload(title: Option<&str>) -> NewProductPayload {
        NewProductPayload {
            title: title.map(str::to_string),
            details: Some("details".to_string()),
        }
    }

    #[test]
    fn accepts_titles_within_bounds() {
        let longest = "x".repeat(50);
        for title in ["abc", "New name", longest.as_str(), "  abc  "] {
            assert_eq!(check_title(Some(title)), None, "title {title:?}");
        }
    }

    #[test]
    fn rejects_titles_out_of_bounds_after_trim() {
        let too_long = "x".repeat(51);
        for title in ["", " ", "ab", "  ab  ", too_long.as_str()] {
            assert_eq!(
                check_title(Some(title)),
                Some(TITLE_SIZE_IS_INVALID),
                "title {title:?}"
            );
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 25 Cyrillic letters are 50 bytes but 25 characters.
        let title = "Т".repeat(25);
        assert_eq!(check_title(Some(&title)), None);
        assert_eq!(check_title(Some("Тов")), None);
        assert_eq!(check_title(Some("Тв")), Some(TITLE_SIZE_IS_INVALID));
    }

    #[test]
    fn missing_title_has_its_own_code() {
        let err = new_payload(None).validate().unwrap_err();
        assert_eq!(
            err,
            [FieldViolation {
                field: "title",
                code: TITLE_IS_NULL
            }]
        );
    }

    #[test]
    fn valid_payload_keeps_fields_as_sent() {
        let fields = new_payload(Some("New name")).validate().unwrap();
        assert_eq!(fields.title, "New name");
        assert_eq!(fields.details.as_deref(), Some("details"));
    }

    #[test]
    fn update_payload_reports_blank_title() {
        let payload: UpdateProductPayload =
            serde_json::from_str(r#"{"title": " ", "details": null}"#).unwrap();
        let err = payload.validate().unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err[0].code, TITLE_SIZE_IS_INVALID);
    }

    #[test]
    fn absent_fields_deserialize_as_none() {
        let payload: NewProductPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.title.is_none());
        assert!(payload.details.is_none());
    }
}

//! Request locale negotiation from `Accept-Language`.

use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::HeaderMap;

use crate::port::outbound::message::Locale;

/// Pick the preferred locale from an `Accept-Language` value.
///
/// The highest quality wins; ties keep header order. Wildcards, entries
/// with `q=0` and entries whose `q` does not parse are ignored. Qualities
/// above 1 count as 1.
#[must_use]
pub fn parse_accept_language(value: &str) -> Option<Locale> {
    let mut best: Option<(f32, Locale)> = None;

    for entry in value.split(',') {
        let mut parts = entry.split(';');
        let tag = parts.next().unwrap_or_default().trim();
        let quality = match parts.find_map(|param| param.trim().strip_prefix("q=")) {
            Some(raw) => match raw.trim().parse::<f32>() {
                Ok(q) if q.is_finite() => q.clamp(0.0, 1.0),
                _ => continue,
            },
            None => 1.0,
        };

        if quality <= 0.0 {
            continue;
        }
        let Ok(locale) = tag.parse::<Locale>() else {
            continue;
        };
        if best.as_ref().map_or(true, |(q, _)| quality > *q) {
            best = Some((quality, locale));
        }
    }

    best.map(|(_, locale)| locale)
}

/// The locale a request asked for, or `default` when it expressed none.
#[must_use]
pub fn request_locale(headers: &HeaderMap, default: &Locale) -> Locale {
    headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_accept_language)
        .unwrap_or_else(|| default.clone())
}

//! Default request headers and header merging.
//!
//! Every request carries the same base set:
//!
//! | Header | Value |
//! |--------|-------|
//! | `Accept` | `application/json` |
//! | `Content-Type` | `application/json` |
//! | `Authorization` | `Bearer <token>` |
//!
//! Call-specific headers are merged over that set and win on collision.

use crate::error::{GitterError, Result};
use http::{header, HeaderMap, HeaderValue};

/// Media type of every request and response body.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Build the default header set for a bearer token.
///
/// # Errors
///
/// Returns [`GitterError::Config`] if the token contains characters that are not
/// allowed in a header value.
///
/// # Examples
///
/// ```
/// use gitter_api::transport::default_headers;
///
/// let headers = default_headers("1a2b3c").unwrap();
/// assert_eq!(headers["authorization"], "Bearer 1a2b3c");
/// assert_eq!(headers["accept"], "application/json");
/// ```
pub fn default_headers(token: &str) -> Result<HeaderMap> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| GitterError::Config("auth token is not a valid header value".into()))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(header::ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
    headers.insert(header::AUTHORIZATION, auth);
    Ok(headers)
}

/// Merge `overrides` over `defaults`.
///
/// A header present in both keeps only the values from `overrides`.
pub fn merge_headers(defaults: &HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    let mut merged = defaults.clone();
    for name in overrides.keys() {
        merged.remove(name);
        for value in overrides.get_all(name) {
            merged.append(name.clone(), value.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let headers = default_headers("abc").unwrap();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers[header::CONTENT_TYPE], JSON_MEDIA_TYPE);
        assert!(headers[header::AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_invalid_token_rejected() {
        let result = default_headers("bad\ntoken");
        assert!(matches!(result, Err(GitterError::Config(_))));
    }

    #[test]
    fn test_override_wins() {
        let defaults = default_headers("abc").unwrap();
        let mut overrides = HeaderMap::new();
        overrides.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer other"));
        overrides.insert("x-request-id", HeaderValue::from_static("42"));

        let merged = merge_headers(&defaults, &overrides);
        assert_eq!(merged.len(), 4);
        assert_eq!(merged.get_all(header::AUTHORIZATION).iter().count(), 1);
        assert_eq!(merged[header::AUTHORIZATION], "Bearer other");
        assert_eq!(merged["x-request-id"], "42");
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let defaults = default_headers("abc").unwrap();
        let merged = merge_headers(&defaults, &HeaderMap::new());
        assert_eq!(merged, defaults);
    }
}

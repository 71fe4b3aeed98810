//! Query encoding and status helpers for the transport.
//!
//! Query strings use `application/x-www-form-urlencoded` encoding (spaces become
//! `+`). Parameters without a value, or with an empty one, are dropped before
//! encoding.

use url::form_urlencoded;

/// Ordered query parameters whose values may be absent.
///
/// Insertion order is kept so the encoded query is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn with<V: ToString>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.push(name, value);
        self
    }

    /// Append a parameter in place.
    pub fn push<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) {
        self.pairs
            .push((name.into(), value.map(|v| v.to_string())));
    }

    /// Parameters that survive filtering, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().filter_map(|(name, value)| match value.as_deref() {
            Some(v) if !v.is_empty() => Some((name.as_str(), v)),
            _ => None,
        })
    }

    /// Whether no parameter would be encoded.
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, Option<V>)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (name, value) in iter {
            params.push(name, value);
        }
        params
    }
}

/// Encode the present parameters, or `None` when nothing remains.
pub fn encode_query(params: &QueryParams) -> Option<String> {
    if params.is_empty() {
        return None;
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in params.present() {
        serializer.append_pair(name, value);
    }
    Some(serializer.finish())
}

/// Append the encoded query to `path`; the path is returned unchanged when no
/// parameter is present.
pub fn path_with_query(path: &str, params: &QueryParams) -> String {
    match encode_query(params) {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    }
}

/// Check if status code indicates success
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Check if status code indicates access denied
pub fn is_access_denied_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_values_dropped() {
        let params = QueryParams::new()
            .with("skip", Some(10))
            .with("beforeId", None::<String>)
            .with("q", Some(""))
            .with("limit", Some(2));
        assert_eq!(encode_query(&params).as_deref(), Some("skip=10&limit=2"));
    }

    #[test]
    fn test_all_empty_leaves_path_unmodified() {
        let params: QueryParams = vec![("skip", None::<u32>), ("limit", None)].into_iter().collect();
        assert!(params.is_empty());
        assert_eq!(path_with_query("/v1/rooms", &params), "/v1/rooms");
        assert_eq!(path_with_query("/v1/rooms", &QueryParams::new()), "/v1/rooms");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let params = QueryParams::new().with("q", Some("hello world&more=1"));
        assert_eq!(
            path_with_query("/v1/rooms/1/users", &params),
            "/v1/rooms/1/users?q=hello+world%26more%3D1"
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let params = QueryParams::new()
            .with("limit", Some(1))
            .with("aroundId", Some("abc"))
            .with("skip", Some(0));
        assert_eq!(encode_query(&params).as_deref(), Some("limit=1&aroundId=abc&skip=0"));
    }

    #[test]
    fn test_status_classification() {
        assert!(is_success_status(200));
        assert!(is_success_status(204));
        assert!(!is_success_status(301));
        assert!(!is_success_status(404));
        assert!(is_access_denied_status(401));
        assert!(is_access_denied_status(403));
        assert!(!is_access_denied_status(404));
    }
}

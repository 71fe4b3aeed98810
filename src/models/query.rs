//! Listing options for room users and room messages.

use crate::transport::QueryParams;

/// Options of [`Room::messages`](crate::models::Room::messages).
///
/// | Option | Query key |
/// |--------|-----------|
/// | `skip` | `skip` |
/// | `before_id` | `beforeId` |
/// | `after_id` | `afterId` |
/// | `around_id` | `aroundId` |
/// | `limit` | `limit` |
/// | `search` | `q` |
///
/// # Examples
///
/// ```
/// use gitter_api::models::MessageQuery;
/// use gitter_api::transport::encode_query;
///
/// let query = MessageQuery::new().limit(5).before_id("5f1").search("release");
/// assert_eq!(
///     encode_query(&query.to_query()).as_deref(),
///     Some("beforeId=5f1&limit=5&q=release")
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageQuery {
    /// Skip the N most recent messages
    pub skip: Option<u32>,
    /// Only messages sent before this message id
    pub before_id: Option<String>,
    /// Only messages sent after this message id
    pub after_id: Option<String>,
    /// Messages around this message id
    pub around_id: Option<String>,
    /// Maximum number of messages
    pub limit: Option<u32>,
    /// Full-text search
    pub search: Option<String>,
}

impl MessageQuery {
    /// No option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `skip`.
    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Set `beforeId`.
    pub fn before_id(mut self, id: impl Into<String>) -> Self {
        self.before_id = Some(id.into());
        self
    }

    /// Set `afterId`.
    pub fn after_id(mut self, id: impl Into<String>) -> Self {
        self.after_id = Some(id.into());
        self
    }

    /// Set `aroundId`.
    pub fn around_id(mut self, id: impl Into<String>) -> Self {
        self.around_id = Some(id.into());
        self
    }

    /// Set `limit`.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set `q`.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Query parameters sent to the server.
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("skip", self.skip)
            .with("beforeId", self.before_id.as_deref())
            .with("afterId", self.after_id.as_deref())
            .with("aroundId", self.around_id.as_deref())
            .with("limit", self.limit)
            .with("q", self.search.as_deref())
    }
}

/// Options of [`Room::users`](crate::models::Room::users).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserQuery {
    /// Skip the first N users
    pub skip: Option<u32>,
    /// Maximum number of users
    pub limit: Option<u32>,
    /// Filter on a search term (`q`)
    pub search: Option<String>,
}

impl UserQuery {
    /// No option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `skip`.
    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Set `limit`.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set `q`.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Query parameters sent to the server.
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("skip", self.skip)
            .with("limit", self.limit)
            .with("q", self.search.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::encode_query;

    #[test]
    fn test_message_query_keys() {
        let query = MessageQuery::new()
            .skip(1)
            .before_id("b")
            .after_id("a")
            .around_id("r")
            .limit(2)
            .search("hi there");
        assert_eq!(
            encode_query(&query.to_query()).as_deref(),
            Some("skip=1&beforeId=b&afterId=a&aroundId=r&limit=2&q=hi+there")
        );
    }

    #[test]
    fn test_empty_queries_encode_nothing() {
        assert!(MessageQuery::new().to_query().is_empty());
        assert!(UserQuery::new().to_query().is_empty());
    }

    #[test]
    fn test_user_query_keys() {
        let query = UserQuery::new().limit(30).search("bob");
        assert_eq!(encode_query(&query.to_query()).as_deref(), Some("limit=30&q=bob"));
    }
}

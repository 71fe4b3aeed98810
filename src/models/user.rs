//! Users: `/user/*` routes.

use super::{parse_fields, Room};
use crate::client::GitterClient;
use crate::error::Result;
use crate::resource::{client_args, ClientArgs, Collectable, Collection, Parent, Record};
use crate::transport::QueryParams;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserFields {
    #[serde(default)]
    id: Option<String>,
    // Mention records name the id `userId` and the username `screenName`.
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    screen_name: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
}

/// A Gitter user.
///
/// Returned by [`GitterClient::current_user`], [`Room::users`], and as the sender
/// and mentions of a [`Message`](crate::models::Message).
#[derive(Clone, Debug)]
pub struct User {
    record: Record,
    id: Option<String>,
    display_name: Option<String>,
    username: Option<String>,
    url: Option<String>,
    avatar_url: Option<String>,
}

impl User {
    /// Build a user from a raw record.
    ///
    /// # Errors
    ///
    /// Returns [`GitterError::Record`](crate::GitterError::Record) if the record is
    /// not a user object.
    pub fn new(client: GitterClient, data: Value) -> Result<Self> {
        let fields: UserFields = parse_fields("user", &data)?;

        Ok(User {
            id: fields.id.or(fields.user_id),
            display_name: fields.display_name,
            username: fields.username.or(fields.screen_name),
            url: fields.url,
            avatar_url: fields.avatar_url,
            record: Record::new(client, data),
        })
    }

    /// User id.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Real name.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Username, without the leading `@`.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Path of the user's page in the web app.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Avatar URL.
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Rooms of this user, one-to-one conversations included.
    ///
    /// Not memoized; see [`GitterClient::rooms`] for the cached variant.
    pub async fn rooms(&self) -> Result<Collection<Room>> {
        let data = self.client().get("/rooms", &QueryParams::new()).await?;
        Collection::new(self.clone(), data)
    }

    /// Client that fetched this user.
    pub fn client(&self) -> &GitterClient {
        self.record.client()
    }
}

impl AsRef<Record> for User {
    fn as_ref(&self) -> &Record {
        &self.record
    }
}

impl Parent for User {
    fn client(&self) -> &GitterClient {
        self.record.client()
    }
}

impl Collectable for User {
    type Args = ClientArgs;

    fn collectable_args(parent: &dyn Parent, record: Value) -> Self::Args {
        client_args(parent, record)
    }

    fn from_args((client, record): Self::Args) -> Result<Self> {
        User::new(client, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use serde_json::json;
    use url::Url;

    fn client() -> GitterClient {
        let config = SessionConfig {
            base_url: Url::parse("http://localhost:5000").unwrap(),
            path_prefix: "/v1".into(),
            verify_tls: true,
            request_timeout: None,
        };
        GitterClient::with_config("token", config).unwrap()
    }

    #[test]
    fn test_user_fields() {
        let user = User::new(
            client(),
            json!({
                "id": "53307734c3599d1de448e192",
                "username": "malditogeek",
                "displayName": "Mauro Pompilio",
                "url": "/malditogeek",
                "avatarUrl": "https://avatars.example/malditogeek"
            }),
        )
        .unwrap();

        assert_eq!(user.id(), Some("53307734c3599d1de448e192"));
        assert_eq!(user.username(), Some("malditogeek"));
        assert_eq!(user.display_name(), Some("Mauro Pompilio"));
        assert_eq!(user.url(), Some("/malditogeek"));
        assert!(user.avatar_url().is_some());
    }

    #[test]
    fn test_mention_record_aliases() {
        let user = User::new(client(), json!({"screenName": "suprememoocow", "userId": "7"})).unwrap();
        assert_eq!(user.id(), Some("7"));
        assert_eq!(user.username(), Some("suprememoocow"));
        assert_eq!(user.display_name(), None);
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(User::new(client(), json!("bob")).is_err());
    }
}

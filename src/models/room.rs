//! Rooms: `/rooms/{id}/*` routes.

use super::{parse_fields, Message, MessageQuery, User, UserQuery};
use crate::client::GitterClient;
use crate::error::Result;
use crate::resource::{client_args, ClientArgs, Collectable, Collection, Parent, Record};
use crate::transport::QueryParams;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RoomFields {
    id: String,
    name: Option<String>,
    topic: Option<String>,
    uri: Option<String>,
    url: Option<String>,
    one_on_one: Option<bool>,
    lurk: Option<bool>,
    public: Option<bool>,
    mentions: Option<u64>,
    user_count: Option<u64>,
    unread_items: Option<u64>,
    tags: Option<Vec<String>>,
}

/// A room, or a one-to-one conversation.
///
/// # Examples
///
/// ```ignore
/// let room = client.find_room("gitterhq/sandbox").await?;
/// let recent = room.messages(MessageQuery::new().limit(5)).await?;
/// let reply = room.send_message("hello").await?;
/// assert_eq!(reply.room_id(), Some(room.id()));
/// ```
#[derive(Clone, Debug)]
pub struct Room {
    record: Record,
    fields: RoomFields,
}

impl Room {
    /// Build a room from a raw record.
    ///
    /// # Errors
    ///
    /// Returns [`GitterError::Record`](crate::GitterError::Record) if the record has
    /// no string `id`.
    pub fn new(client: GitterClient, data: Value) -> Result<Self> {
        let fields: RoomFields = parse_fields("room", &data)?;
        if fields.id.is_empty() {
            return Err(crate::GitterError::Record {
                kind: "room",
                message: "missing field `id`".into(),
            });
        }

        Ok(Room {
            record: Record::new(client, data),
            fields,
        })
    }

    /// Room id.
    pub fn id(&self) -> &str {
        &self.fields.id
    }

    /// Room name.
    pub fn name(&self) -> Option<&str> {
        self.fields.name.as_deref()
    }

    /// Room topic.
    pub fn topic(&self) -> Option<&str> {
        self.fields.topic.as_deref()
    }

    /// Room URI, such as `gitterhq/sandbox`.
    pub fn uri(&self) -> Option<&str> {
        self.fields.uri.as_deref()
    }

    /// Path of the room in the web app.
    pub fn url(&self) -> Option<&str> {
        self.fields.url.as_deref()
    }

    /// Whether this is a one-to-one conversation.
    pub fn one_on_one(&self) -> Option<bool> {
        self.fields.one_on_one
    }

    /// Whether notifications are disabled for the current user.
    pub fn lurk(&self) -> Option<bool> {
        self.fields.lurk
    }

    /// Whether the room is public.
    pub fn public(&self) -> Option<bool> {
        self.fields.public
    }

    /// Unread mentions for the current user.
    pub fn mentions(&self) -> Option<u64> {
        self.fields.mentions
    }

    /// Number of users in the room.
    pub fn user_count(&self) -> Option<u64> {
        self.fields.user_count
    }

    /// Unread messages for the current user.
    pub fn unread_items(&self) -> Option<u64> {
        self.fields.unread_items
    }

    /// Room tags.
    pub fn tags(&self) -> &[String] {
        self.fields.tags.as_deref().unwrap_or(&[])
    }

    /// Users of the room.
    pub async fn users(&self, options: UserQuery) -> Result<Collection<User>> {
        let route = format!("/rooms/{}/users", self.id());
        let data = self.client().get(&route, &options.to_query()).await?;
        Collection::new(self.clone(), data)
    }

    /// Messages of the room, oldest first.
    pub async fn messages(&self, options: MessageQuery) -> Result<Collection<Message>> {
        let route = format!("/rooms/{}/chatMessages", self.id());
        let data = self.client().get(&route, &options.to_query()).await?;
        Collection::new(self.clone(), data)
    }

    /// Join the room as the current user.
    ///
    /// Returns the room as reported by the server after joining.
    pub async fn join(&self) -> Result<Room> {
        let user_id = self.client().current_user_id().await?;
        let payload = serde_json::to_string(&json!({ "id": self.id() }))?;
        let data = self
            .client()
            .post(&format!("/user/{}/rooms", user_id), payload)
            .await?;
        Room::new(self.client().clone(), data)
    }

    /// Send a plain-text or markdown message to the room.
    pub async fn send_message(&self, text: &str) -> Result<Message> {
        let payload = serde_json::to_string(&json!({ "text": text }))?;
        let data = self
            .client()
            .post(&format!("/rooms/{}/chatMessages", self.id()), payload)
            .await?;
        Message::new(self.client().clone(), Some(self.id().to_string()), data)
    }

    /// Unread messages of the room for the current user.
    pub async fn unread_messages(&self) -> Result<Collection<Message>> {
        let user_id = self.client().current_user_id().await?;
        let route = format!("/user/{}/rooms/{}/unreadItems", user_id, self.id());
        let data = self.client().get(&route, &QueryParams::new()).await?;
        Collection::new(self.clone(), data)
    }

    /// Client that fetched this room.
    pub fn client(&self) -> &GitterClient {
        self.record.client()
    }
}

impl AsRef<Record> for Room {
    fn as_ref(&self) -> &Record {
        &self.record
    }
}

impl Parent for Room {
    fn client(&self) -> &GitterClient {
        self.record.client()
    }

    fn room_id(&self) -> Option<&str> {
        Some(self.id())
    }
}

impl Collectable for Room {
    type Args = ClientArgs;

    fn collectable_args(parent: &dyn Parent, record: Value) -> Self::Args {
        client_args(parent, record)
    }

    fn from_args((client, record): Self::Args) -> Result<Self> {
        Room::new(client, record)
    }
}

//! Chat messages: `/rooms/{roomId}/chatMessages/*` routes.
//!
//! Message records do not name the room they belong to, so a [`Message`] is
//! built with the room id of the context it was fetched from: the room passed
//! as collection parent, or the room a message was sent to.

use super::{parse_fields, User};
use crate::client::GitterClient;
use crate::error::{GitterError, Result};
use crate::resource::{Collectable, Parent, Record};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageFields {
    id: String,
    from_user: Value,
    #[serde(default)]
    text: String,
    #[serde(default)]
    html: String,
    #[serde(default)]
    unread: Option<bool>,
    #[serde(default)]
    read_by: Option<u64>,
    #[serde(default)]
    sent: Option<DateTime<Utc>>,
    #[serde(default)]
    edited_at: Option<DateTime<Utc>>,
    #[serde(default)]
    mentions: Vec<Value>,
    #[serde(default)]
    issues: Vec<Value>,
    #[serde(default)]
    urls: Vec<Value>,
}

/// A chat message.
#[derive(Clone, Debug)]
pub struct Message {
    record: Record,
    room_id: Option<String>,
    id: String,
    user: User,
    text: String,
    html: String,
    unread: Option<bool>,
    read_by: Option<u64>,
    sent: Option<DateTime<Utc>>,
    edited_at: Option<DateTime<Utc>>,
    mentions: Vec<User>,
    issues: Vec<Value>,
    urls: Vec<Value>,
}

impl Message {
    /// Build a message from a raw record and the id of its room.
    ///
    /// # Errors
    ///
    /// Returns [`GitterError::Record`] if the record has no `id`, no `fromUser`,
    /// or fields of the wrong type.
    pub fn new(client: GitterClient, room_id: Option<String>, data: Value) -> Result<Self> {
        let fields: MessageFields = parse_fields("message", &data)?;

        let user = User::new(client.clone(), fields.from_user)?;
        let mentions = fields
            .mentions
            .into_iter()
            .map(|mention| User::new(client.clone(), mention))
            .collect::<Result<Vec<_>>>()?;

        Ok(Message {
            room_id,
            id: fields.id,
            user,
            text: fields.text,
            html: fields.html,
            unread: fields.unread,
            read_by: fields.read_by,
            sent: fields.sent,
            edited_at: fields.edited_at,
            mentions,
            issues: fields.issues,
            urls: fields.urls,
            record: Record::new(client, data),
        })
    }

    /// Message id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the room the message was fetched from.
    pub fn room_id(&self) -> Option<&str> {
        self.room_id.as_deref()
    }

    /// Sender.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Original plain-text or markdown text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// HTML rendering produced by the server.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Whether the current user has not read the message yet.
    pub fn unread(&self) -> Option<bool> {
        self.unread
    }

    /// Number of users that read the message.
    pub fn read_by(&self) -> Option<u64> {
        self.read_by
    }

    /// When the message was sent.
    pub fn sent(&self) -> Option<DateTime<Utc>> {
        self.sent
    }

    /// When the message was last edited.
    pub fn edited_at(&self) -> Option<DateTime<Utc>> {
        self.edited_at
    }

    /// Users mentioned in the message.
    pub fn mentions(&self) -> &[User] {
        &self.mentions
    }

    /// Issues referenced by the message.
    pub fn issues(&self) -> &[Value] {
        &self.issues
    }

    /// URLs found in the message.
    pub fn urls(&self) -> &[Value] {
        &self.urls
    }

    /// Replace the text of the message.
    ///
    /// Returns the message as re-rendered by the server.
    pub async fn update(&self, text: &str) -> Result<Message> {
        let room_id = self.require_room_id()?;
        let payload = serde_json::to_string(&json!({ "text": text }))?;
        let data = self
            .client()
            .post(&format!("/rooms/{}/chatMessages/{}", room_id, self.id), payload)
            .await?;
        Message::new(self.client().clone(), Some(room_id.to_string()), data)
    }

    /// Mark the message as read for the current user.
    pub async fn mark_as_read(&self) -> Result<()> {
        let room_id = self.require_room_id()?;
        let user_id = self.client().current_user_id().await?;
        let payload = serde_json::to_string(&json!({ "chat": [self.id] }))?;
        self.client()
            .post(
                &format!("/user/{}/rooms/{}/unreadItems", user_id, room_id),
                payload,
            )
            .await?;
        Ok(())
    }

    /// Client that fetched this message.
    pub fn client(&self) -> &GitterClient {
        self.record.client()
    }

    fn require_room_id(&self) -> Result<&str> {
        self.room_id
            .as_deref()
            .ok_or(GitterError::MissingContext("message room id"))
    }
}

impl AsRef<Record> for Message {
    fn as_ref(&self) -> &Record {
        &self.record
    }
}

impl Collectable for Message {
    type Args = (GitterClient, Option<String>, Value);

    fn collectable_args(parent: &dyn Parent, record: Value) -> Self::Args {
        (
            parent.client().clone(),
            parent.room_id().map(str::to_owned),
            record,
        )
    }

    fn from_args((client, room_id, record): Self::Args) -> Result<Self> {
        Message::new(client, room_id, record)
    }
}

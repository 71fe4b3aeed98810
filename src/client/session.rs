//! The session-scoped client and its memo slots.

use crate::config::SessionConfig;
use crate::error::{GitterError, Result};
use crate::models::{Group, Room, User};
use crate::resource::Collection;
use crate::transport::{QueryParams, Transport};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;

/// Cached raw records of the session-scoped resources.
///
/// Slots hold the decoded JSON rather than models: models hold a client handle,
/// and caching them inside the client would keep it alive forever.
#[derive(Debug, Default)]
struct Slots {
    current_user: Option<Value>,
    rooms: Option<Vec<Value>>,
    groups: Option<Vec<Value>>,
}

struct ClientInner {
    auth_token: String,
    config: SessionConfig,
    transport: Transport,
    slots: Mutex<Slots>,
}

/// Entry point of the Gitter API.
///
/// Cloning yields another handle to the same session: same token, transport and
/// memo slots. Every model keeps such a handle for its follow-up calls.
#[derive(Clone)]
pub struct GitterClient {
    inner: Arc<ClientInner>,
}

impl GitterClient {
    /// Create a client using the process-wide default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GitterError::Config`] if `token` is blank.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(token, SessionConfig::from_defaults())
    }

    /// Create a client with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GitterError::Config`] if `token` is blank or cannot be sent as a
    /// header.
    pub fn with_config(token: impl Into<String>, config: SessionConfig) -> Result<Self> {
        let auth_token = token.into().trim().to_string();
        if auth_token.is_empty() {
            return Err(GitterError::Config("an auth token is required".into()));
        }

        let transport = Transport::new(&config, &auth_token)?;

        Ok(GitterClient {
            inner: Arc::new(ClientInner {
                auth_token,
                config,
                transport,
                slots: Mutex::new(Slots::default()),
            }),
        })
    }

    /// Current user, fetched from `/user/me` once per session.
    ///
    /// Pass `refresh = true` to fetch again and replace the cached record.
    pub async fn current_user(&self, refresh: bool) -> Result<User> {
        let cached = if refresh {
            None
        } else {
            self.inner.slots.lock().current_user.clone()
        };
        if let Some(record) = cached {
            return User::new(self.clone(), record);
        }

        let data = self.get("/user/me", &QueryParams::new()).await?;
        let user = User::new(self.clone(), data.clone())?;
        self.inner.slots.lock().current_user = Some(data);
        Ok(user)
    }

    /// Rooms of the current user, memoized.
    ///
    /// Same listing as [`User::rooms`]; pass `refresh = true` to fetch again.
    pub async fn rooms(&self, refresh: bool) -> Result<Collection<Room>> {
        let cached = if refresh {
            None
        } else {
            self.inner.slots.lock().rooms.clone()
        };

        let user = self.current_user(false).await?;
        if let Some(records) = cached {
            return Collection::from_records(user, records);
        }

        let rooms = user.rooms().await?;
        self.inner.slots.lock().rooms = Some(rooms.records());
        Ok(rooms)
    }

    /// Groups of the current user, memoized.
    pub async fn groups(&self, refresh: bool) -> Result<Collection<Group>> {
        let cached = if refresh {
            None
        } else {
            self.inner.slots.lock().groups.clone()
        };
        if let Some(records) = cached {
            return Collection::from_records(self.clone(), records);
        }

        let data = self.get("/groups", &QueryParams::new()).await?;
        let groups = Collection::<Group>::new(self.clone(), data)?;
        self.inner.slots.lock().groups = Some(groups.records());
        Ok(groups)
    }

    /// Find a room by URI, creating it server-side if needed.
    ///
    /// Always issues a request.
    pub async fn find_room(&self, uri: &str) -> Result<Room> {
        let payload = serde_json::to_string(&json!({ "uri": uri }))?;
        let data = self.post("/rooms", payload).await?;
        Room::new(self.clone(), data)
    }

    /// Join a room by URI as the current user.
    ///
    /// A room already in the memoized list is returned as is. Otherwise the
    /// memoized list is dropped, the room is looked up with
    /// [`find_room`](Self::find_room) and joined.
    pub async fn join_room(&self, uri: &str) -> Result<Room> {
        let rooms = self.rooms(false).await?;
        if let Some(room) = rooms.iter().find(|room| room.uri() == Some(uri)) {
            return Ok(room.clone());
        }

        self.inner.slots.lock().rooms = None;
        tracing::debug!("room {} not joined yet, looking it up", uri);

        self.find_room(uri).await?.join().await
    }

    /// Id of the current user, used to build `/user/{id}/...` routes.
    pub(crate) async fn current_user_id(&self) -> Result<String> {
        self.current_user(false)
            .await?
            .id()
            .map(str::to_owned)
            .ok_or(GitterError::MissingContext("current user id"))
    }

    /// `GET` a prefix-relative route.
    pub(crate) async fn get(&self, route: &str, query: &QueryParams) -> Result<Value> {
        self.inner
            .transport
            .get(&self.inner.config.path(route), query)
            .await
    }

    /// `POST` a serialized payload to a prefix-relative route.
    pub(crate) async fn post(&self, route: &str, payload: String) -> Result<Value> {
        self.inner
            .transport
            .post(&self.inner.config.path(route), payload)
            .await
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    /// Transport shared by every request of this session.
    pub fn transport(&self) -> &Transport {
        &self.inner.transport
    }

    /// Bearer token of this session.
    pub fn auth_token(&self) -> &str {
        &self.inner.auth_token
    }

    /// Whether both handles refer to the same session.
    pub fn ptr_eq(&self, other: &GitterClient) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for GitterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitterClient")
            .field("config", &self.inner.config)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

//! Typed models of the Gitter REST resources.
//!
//! | Model | Routes |
//! |-------|--------|
//! | [`User`] | `/user/me`, `/rooms` |
//! | [`Room`] | `/rooms/{id}/users`, `/rooms/{id}/chatMessages`, `/user/{id}/rooms` |
//! | [`Message`] | `/rooms/{roomId}/chatMessages/{id}`, `/user/{id}/rooms/{roomId}/unreadItems` |
//! | [`Group`] | `/groups`, `/groups/{id}/rooms` |
//!
//! Fields are copied out of the raw record when a model is built; a model never
//! changes afterwards. Operations that change server state return a new model
//! built from the response.

mod group;
mod message;
mod query;
mod room;
mod user;

pub use group::Group;
pub use message::Message;
pub use query::{MessageQuery, UserQuery};
pub use room::Room;
pub use user::User;

use crate::error::{GitterError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Map a raw record onto a model's field set.
fn parse_fields<F: DeserializeOwned>(kind: &'static str, record: &Value) -> Result<F> {
    F::deserialize(record).map_err(|e| GitterError::record(kind, e))
}

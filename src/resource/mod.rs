//! Shared building blocks of the resource models.
//!
//! Each model ([`User`](crate::models::User), [`Room`](crate::models::Room),
//! [`Message`](crate::models::Message), [`Group`](crate::models::Group)) composes a
//! [`Record`] holding the client that fetched it and the raw JSON it was built
//! from. Lists of models are [`Collection`]s, built generically through the
//! [`Collectable`] construction-argument hook.
//!
//! # How a collection is built
//!
//! 1. The operation fetches a JSON array and hands it to [`Collection::new`]
//!    together with the resource that issued the call (the [`Parent`]).
//! 2. For every record, `T::collectable_args(parent, record)` assembles the
//!    constructor arguments. Most models take `(client, record)`; a message also
//!    needs the id of the room it was listed from, which the message record does
//!    not carry.
//! 3. `T::from_args(args)` builds the model.
//!
//! # Examples
//!
//! ```ignore
//! let room = client.find_room("gitterhq/sandbox").await?;
//! let messages = room.messages(MessageQuery::new().limit(5)).await?;
//! for message in &messages {
//!     assert_eq!(message.room_id(), Some(room.id()));
//! }
//! ```

mod collection;

pub use collection::{Collection, IntoIter, Iter};

use crate::client::GitterClient;
use serde_json::Value;

/// Base state of every model: the client that fetched it and its raw record.
#[derive(Clone, Debug)]
pub struct Record {
    client: GitterClient,
    data: Value,
}

impl Record {
    /// Wrap a raw record fetched by `client`.
    pub fn new(client: GitterClient, data: Value) -> Self {
        Self { client, data }
    }

    /// Client used for follow-up calls.
    pub fn client(&self) -> &GitterClient {
        &self.client
    }

    /// Raw record as received from the server.
    pub fn data(&self) -> &Value {
        &self.data
    }
}

/// Something that produces collections: the client itself or a model.
///
/// Collected items derive their construction context from it.
pub trait Parent: Send + Sync {
    /// Client shared with every collected item.
    fn client(&self) -> &GitterClient;

    /// Id of the room this parent represents, if any.
    fn room_id(&self) -> Option<&str> {
        None
    }
}

impl Parent for GitterClient {
    fn client(&self) -> &GitterClient {
        self
    }
}

/// Constructor arguments used by models without extra context.
pub type ClientArgs = (GitterClient, Value);

/// The default construction-argument hook: `(parent.client, record)`.
pub fn client_args(parent: &dyn Parent, record: Value) -> ClientArgs {
    (parent.client().clone(), record)
}

/// A model that can be collected from an array of raw records.
pub trait Collectable: Sized {
    /// Constructor arguments.
    type Args;

    /// Assemble the constructor arguments for one record listed by `parent`.
    fn collectable_args(parent: &dyn Parent, record: Value) -> Self::Args;

    /// Build the model.
    fn from_args(args: Self::Args) -> crate::Result<Self>;
}

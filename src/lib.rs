#![warn(missing_docs)]

//! # gitter_api: a typed client for the Gitter REST API
//!
//! This crate wraps the Gitter chat API (users, groups, rooms, messages) in typed
//! models built on top of a small generic core:
//!
//! 1. **Transport** - authenticated `GET`/`POST`/`PUT` with query encoding, header
//!    merging and JSON decoding, shared by every resource
//! 2. **Client** - owns the token and the session configuration, memoizes the
//!    current user, their rooms and their groups
//! 3. **Collections** - one generic [`Collection<T>`] for every model, with a
//!    per-type hook deciding what context each item is built with
//! 4. **Models** - [`User`], [`Room`], [`Message`], [`Group`]
//!
//! ## Usage
//!
//! ```ignore
//! use gitter_api::{GitterClient, MessageQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GitterClient::new("1a2b3c4d5e6f7a8b9c0d")?;
//!
//!     for room in client.rooms(false).await?.iter().take(2) {
//!         println!("{}", room.name().unwrap_or_default());
//!         for message in &room.messages(MessageQuery::new().limit(5)).await? {
//!             println!("@{}: {}", message.user().username().unwrap_or("?"), message.text());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Local development
//!
//! A local Gitter webapp serves the API under `/api/v1`, usually without a valid
//! certificate:
//!
//! ```
//! gitter_api::config::set_base_url("https://localhost:5000");
//! gitter_api::config::set_path_prefix("/api/v1");
//! gitter_api::config::set_verify_tls(false);
//!
//! let client = gitter_api::GitterClient::new("token").unwrap();
//! assert_eq!(client.config().path("/user/me"), "/api/v1/user/me");
//! ```
//!
//! ## Error handling
//!
//! Non-2xx responses become [`GitterError::Server`] before the body is decoded.
//! Nothing is retried.
//!
//! ## Module Structure
//!
//! - **[config]** - Process-wide defaults and per-session configuration
//! - **[error]** - Error types and result handling
//! - **[transport]** - Authenticated HTTP requests and response decoding
//! - **[client]** - Session client with memoized resources
//! - **[resource]** - Record base, construction hook and collections
//! - **[models]** - User, Room, Message and Group

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod resource;
pub mod transport;

pub use client::GitterClient;
pub use config::SessionConfig;
pub use error::{GitterError, Result};
pub use models::{Group, Message, MessageQuery, Room, User, UserQuery};
pub use resource::{Collectable, Collection, Parent, Record};
pub use transport::{QueryParams, Transport};

//! Gitter API client.
//!
//! The [`GitterClient`] owns the auth token and the [`SessionConfig`] of one
//! session, sends every request through a shared
//! [`Transport`](crate::transport::Transport), and memoizes the resources scoped
//! to that session.
//!
//! # Memoized resources
//!
//! | Accessor | Route | Invalidated by |
//! |----------|-------|----------------|
//! | [`GitterClient::current_user`] | `GET /user/me` | `refresh = true` |
//! | [`GitterClient::rooms`] | `GET /rooms` | `refresh = true`, [`GitterClient::join_room`] |
//! | [`GitterClient::groups`] | `GET /groups` | `refresh = true` |
//!
//! [`GitterClient::find_room`] is never memoized.
//!
//! # Examples
//!
//! ## Creating a Client
//!
//! ```
//! use gitter_api::client::GitterClient;
//! use gitter_api::config::SessionConfig;
//! use url::Url;
//!
//! // Process-wide defaults
//! let client = GitterClient::new("1a2b3c4d5e6f7a8b9c0d").unwrap();
//!
//! // Local development server
//! let config = SessionConfig::from_defaults()
//!     .with_base_url(Url::parse("http://localhost:5000").unwrap())
//!     .with_path_prefix("/api/v1");
//! let client = GitterClient::with_config("1a2b3c4d5e6f7a8b9c0d", config).unwrap();
//!
//! // A token is required
//! assert!(GitterClient::new("  ").is_err());
//! ```
//!
//! ## Querying
//!
//! ```ignore
//! let me = client.current_user(false).await?;
//! let uris: Vec<_> = client.rooms(false).await?.iter().filter_map(|r| r.uri()).collect();
//! let room = client.join_room("gitterhq/sandbox").await?;
//! ```
//!
//! # Concurrency
//!
//! A client is cheap to clone and safe to share between tasks. The memo slots are
//! plain cached values: two tasks racing on an empty slot may both fetch it, and
//! the last response wins.

mod session;

pub use session::GitterClient;

pub use crate::config::SessionConfig;

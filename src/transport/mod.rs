//! Authenticated HTTP transport shared by every resource.
//!
//! A single [`Transport`] performs each request of a client, so the header, auth
//! and TLS policy is defined exactly once.
//!
//! # Module Organization
//!
//! ```text
//! transport/
//! ├── fetch   - Transport and the GET/POST/PUT operations
//! ├── headers - default header set and header merging
//! └── utils   - query encoding and status classification
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Transport`] | Sends one request and decodes the JSON response |
//! | [`QueryParams`] | Ordered query parameters with optional values |
//!
//! # Examples
//!
//! ## Encoding a query
//!
//! ```
//! use gitter_api::transport::{path_with_query, QueryParams};
//!
//! let query = QueryParams::new()
//!     .with("limit", Some(5))
//!     .with("q", None::<String>)
//!     .with("beforeId", Some(""));
//!
//! assert_eq!(path_with_query("/v1/rooms/1/chatMessages", &query), "/v1/rooms/1/chatMessages?limit=5");
//! ```
//!
//! ## Merging headers
//!
//! ```
//! use gitter_api::transport::{default_headers, merge_headers};
//! use http::{HeaderMap, HeaderValue, header};
//!
//! let defaults = default_headers("token").unwrap();
//! let mut extra = HeaderMap::new();
//! extra.insert(header::ACCEPT, HeaderValue::from_static("text/plain"));
//!
//! let merged = merge_headers(&defaults, &extra);
//! assert_eq!(merged[header::ACCEPT], "text/plain");
//! assert_eq!(merged[header::AUTHORIZATION], "Bearer token");
//! ```

mod fetch;
mod headers;
mod utils;

pub use fetch::Transport;
pub use headers::{default_headers, merge_headers, JSON_MEDIA_TYPE};
pub use utils::*;

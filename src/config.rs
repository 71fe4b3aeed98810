//! Connection configuration for the Gitter API client.
//!
//! Two layers live here:
//!
//! - A process-wide **configuration store** holding the defaults every new
//!   client inherits (base URL, path prefix, TLS verification). It is meant to be
//!   set once at startup, before clients are created.
//! - [`SessionConfig`], the per-client snapshot taken at construction time and
//!   overridable through its builder methods.
//!
//! # Defaults
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `base_url` | `https://api.gitter.im` | Endpoint of the API |
//! | `path_prefix` | `/v1` | Route prefix (`/api/v1` for a local webapp) |
//! | `verify_tls` | `true` | Verify server certificates |
//! | `request_timeout` | none | Per-request timeout |
//!
//! # Examples
//!
//! ```
//! use gitter_api::config::SessionConfig;
//! use url::Url;
//!
//! let config = SessionConfig::from_defaults()
//!     .with_base_url(Url::parse("http://localhost:5000").unwrap())
//!     .with_path_prefix("/api/v1")
//!     .with_verify_tls(false);
//!
//! assert_eq!(config.path("/user/me"), "/api/v1/user/me");
//! ```

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::time::Duration;
use url::Url;

/// Path prefix for the production API.
pub const DEFAULT_API_PREFIX: &str = "/v1";

/// Endpoint URL of the production API.
pub const DEFAULT_API_URL: &str = "https://api.gitter.im";

#[derive(Debug, Default)]
struct Store {
    base_url: Option<String>,
    path_prefix: Option<String>,
    verify_tls: Option<bool>,
    /// Parsed form of `base_url`, cleared whenever `base_url` changes
    parsed: Option<Url>,
}

static STORE: Lazy<RwLock<Store>> = Lazy::new(|| RwLock::new(Store::default()));

fn default_url() -> Url {
    // Constant input, cannot fail.
    Url::parse(DEFAULT_API_URL).unwrap_or_else(|_| unreachable!("DEFAULT_API_URL is valid"))
}

/// Base URL new clients connect to.
///
/// The configured string is parsed on first use and cached. An unparseable value
/// falls back to [`DEFAULT_API_URL`].
pub fn base_url() -> Url {
    if let Some(url) = STORE.read().parsed.clone() {
        return url;
    }

    let mut store = STORE.write();
    if let Some(url) = store.parsed.clone() {
        return url;
    }

    let url = match store.base_url.as_deref() {
        None => default_url(),
        Some(raw) => Url::parse(raw).unwrap_or_else(|e| {
            tracing::warn!("ignoring invalid base URL {:?} ({}), using {}", raw, e, DEFAULT_API_URL);
            default_url()
        }),
    };
    store.parsed = Some(url.clone());
    url
}

/// Replace the default base URL and drop the cached parsed form.
pub fn set_base_url(url: impl Into<String>) {
    let mut store = STORE.write();
    store.base_url = Some(url.into());
    store.parsed = None;
}

/// Route prefix new clients use.
pub fn path_prefix() -> String {
    STORE
        .read()
        .path_prefix
        .clone()
        .unwrap_or_else(|| DEFAULT_API_PREFIX.to_string())
}

/// Replace the default route prefix.
pub fn set_path_prefix(prefix: impl Into<String>) {
    STORE.write().path_prefix = Some(prefix.into());
}

/// Whether new clients verify TLS certificates.
pub fn verify_tls() -> bool {
    STORE.read().verify_tls.unwrap_or(true)
}

/// Opt in or out of TLS verification for new clients.
///
/// Only meant for local development servers without valid certificates.
pub fn set_verify_tls(verify: bool) {
    STORE.write().verify_tls = Some(verify);
}

/// Restore every documented default.
pub fn reset() {
    *STORE.write() = Store::default();
}

/// Connection settings of a single client.
///
/// Taken from the process-wide store by [`SessionConfig::from_defaults`] and
/// never changed once the client is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Endpoint of the API
    pub base_url: Url,

    /// Prefix prepended to every route
    pub path_prefix: String,

    /// Verify server certificates.
    ///
    /// Disabling this is opt-in and logged by the transport.
    pub verify_tls: bool,

    /// Timeout applied to each request, none by default
    pub request_timeout: Option<Duration>,
}

impl SessionConfig {
    /// Snapshot the process-wide defaults.
    pub fn from_defaults() -> Self {
        Self {
            base_url: base_url(),
            path_prefix: path_prefix(),
            verify_tls: verify_tls(),
            request_timeout: None,
        }
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, url: Url) -> Self {
        self.base_url = url;
        self
    }

    /// Override the route prefix.
    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    /// Override TLS verification.
    pub fn with_verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Set a per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Join the prefix with a route such as `/rooms/1/users`.
    pub fn path(&self, route: &str) -> String {
        let prefix = self.path_prefix.trim_end_matches('/');
        let route = route.trim_start_matches('/');
        format!("{}/{}", prefix, route)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The store is process-wide; keep every mutation inside one test.
    #[test]
    fn test_store_defaults_and_overrides() {
        reset();
        assert_eq!(base_url().as_str(), "https://api.gitter.im/");
        assert_eq!(path_prefix(), "/v1");
        assert!(verify_tls());

        set_base_url("http://localhost:5000");
        assert_eq!(base_url().as_str(), "http://localhost:5000/");

        set_base_url("not a url");
        assert_eq!(base_url().as_str(), "https://api.gitter.im/");

        set_path_prefix("/api/v1");
        set_verify_tls(false);
        let config = SessionConfig::from_defaults();
        assert_eq!(config.path_prefix, "/api/v1");
        assert!(!config.verify_tls);

        reset();
        assert_eq!(path_prefix(), "/v1");
        assert!(verify_tls());
    }

    #[test]
    fn test_session_path_joining() {
        let config = SessionConfig {
            base_url: Url::parse("https://api.gitter.im").unwrap(),
            path_prefix: "/v1/".into(),
            verify_tls: true,
            request_timeout: None,
        };
        assert_eq!(config.path("/rooms"), "/v1/rooms");
        assert_eq!(config.path("user/me"), "/v1/user/me");
    }

    #[test]
    fn test_builder_overrides() {
        let config = SessionConfig {
            base_url: Url::parse("https://api.gitter.im").unwrap(),
            path_prefix: "/v1".into(),
            verify_tls: true,
            request_timeout: None,
        }
        .with_verify_tls(false)
        .with_request_timeout(Duration::from_secs(5));

        assert!(!config.verify_tls);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
    }
}

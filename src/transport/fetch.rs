//! The HTTP transport used by every client operation.
//!
//! # Examples
//!
//! ```ignore
//! use gitter_api::config::SessionConfig;
//! use gitter_api::transport::{QueryParams, Transport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = Transport::new(&SessionConfig::from_defaults(), "1a2b3c")?;
//!     let me = transport.get("/v1/user/me", &QueryParams::new()).await?;
//!     println!("{}", me["username"]);
//!     Ok(())
//! }
//! ```

use super::headers::{default_headers, merge_headers};
use super::utils::{encode_query, is_success_status, QueryParams};
use crate::config::SessionConfig;
use crate::error::{GitterError, Result};
use bytes::Bytes;
use http::HeaderMap;
use reqwest::Method;
use serde_json::Value;
use url::Url;

/// Sends authenticated requests and decodes JSON responses.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Transport {
    client: reqwest::Client,
    base_url: Url,
    default_headers: HeaderMap,
}

impl Transport {
    /// Create a transport for a session and bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`GitterError::Config`] if the token cannot be sent as a header or
    /// the HTTP client cannot be built.
    pub fn new(config: &SessionConfig, token: &str) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .pool_idle_timeout(std::time::Duration::from_secs(90));

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        if !config.verify_tls {
            tracing::warn!(
                "TLS certificate verification disabled for {}",
                config.base_url
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| GitterError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Transport {
            client,
            base_url: config.base_url.clone(),
            default_headers: default_headers(token)?,
        })
    }

    /// Send a `GET` request.
    ///
    /// Parameters without a value are dropped; with none left the path is sent
    /// unmodified.
    pub async fn get(&self, path: &str, query: &QueryParams) -> Result<Value> {
        self.get_with_headers(path, query, &HeaderMap::new()).await
    }

    /// Send a `GET` request with call-specific headers.
    pub async fn get_with_headers(
        &self,
        path: &str,
        query: &QueryParams,
        headers: &HeaderMap,
    ) -> Result<Value> {
        let mut url = self.url(path);
        url.set_query(encode_query(query).as_deref());
        self.execute(Method::GET, url, None, headers).await
    }

    /// Send a `POST` request with a pre-serialized JSON payload.
    pub async fn post(&self, path: &str, payload: impl Into<Bytes>) -> Result<Value> {
        self.post_with_headers(path, payload, &HeaderMap::new()).await
    }

    /// Send a `POST` request with call-specific headers.
    pub async fn post_with_headers(
        &self,
        path: &str,
        payload: impl Into<Bytes>,
        headers: &HeaderMap,
    ) -> Result<Value> {
        let url = self.url(path);
        self.execute(Method::POST, url, Some(payload.into()), headers)
            .await
    }

    /// Send a `PUT` request with a pre-serialized JSON payload.
    pub async fn put(&self, path: &str, payload: impl Into<Bytes>) -> Result<Value> {
        self.put_with_headers(path, payload, &HeaderMap::new()).await
    }

    /// Send a `PUT` request with call-specific headers.
    pub async fn put_with_headers(
        &self,
        path: &str,
        payload: impl Into<Bytes>,
        headers: &HeaderMap,
    ) -> Result<Value> {
        let url = self.url(path);
        self.execute(Method::PUT, url, Some(payload.into()), headers)
            .await
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Headers sent with every request.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    fn url(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }

    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<Bytes>,
        headers: &HeaderMap,
    ) -> Result<Value> {
        tracing::debug!("{} {}", method, url);

        let mut req_builder = self
            .client
            .request(method.clone(), url.clone())
            .headers(merge_headers(&self.default_headers, headers));

        if let Some(body) = body {
            req_builder = req_builder.body(body);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| GitterError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        tracing::debug!("{} {} -> {}", method, url, status);

        let body = response
            .bytes()
            .await
            .map_err(|e| GitterError::Transport(e.to_string()))?;

        if !is_success_status(status) {
            return Err(GitterError::Server {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        decode_body(&body)
    }
}

/// Parse a response body into a JSON value.
///
/// # Errors
///
/// Returns [`GitterError::Decode`] with the raw body when it is not JSON.
pub(crate) fn decode_body(body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).map_err(|e| GitterError::Decode {
        message: e.to_string(),
        body: String::from_utf8_lossy(body).into_owned(),
    })
}

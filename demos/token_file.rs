//! Builds a client from a `.gitter.token` file in the working directory.
//!
//! The file holds nothing but the token:
//!
//! ```text
//! $ cat .gitter.token
//! 1a2b3c4d5e6f7a8b9c0d
//! ```
//!
//! Meant for developer tools and demos, not production use.

use anyhow::Context;
use gitter_api::GitterClient;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const TOKEN_FILE: &str = ".gitter.token";

pub fn load_client() -> anyhow::Result<GitterClient> {
    let token = std::fs::read_to_string(TOKEN_FILE)
        .with_context(|| format!("reading {}", TOKEN_FILE))?;
    Ok(GitterClient::new(token.trim())?)
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();
}

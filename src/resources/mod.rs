//! Resource methods for both client personas
//!
//! - `PubClient`: public context, API key only (plus an optional visitor
//!   contact token)
//! - `UserClient`: authenticated context, API key plus session token
//!
//! Each method builds a path and hands off to [`ApiClient::request`]. Slugs
//! are percent-encoded before they are spliced into a path.

mod calendars;
mod content;
mod ecommerce;
mod profile;
mod taxonomy;
mod visit;
mod workflows;

pub use visit::VisitContext;

use crate::config::{ClientConfig, ConfigFile};
use crate::error::{Error, Result};
use crate::http::ApiClient;
use std::borrow::Cow;
use std::path::Path;

/// Client for the public API context
#[derive(Debug, Clone)]
pub struct PubClient {
    client: ApiClient,
}

impl PubClient {
    /// Create a public client from a config
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(config)?,
        })
    }

    /// Create a public client from `mints_config.yml` plus `MINTS_*` overrides
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = ConfigFile::load(path)?
            .with_env_overrides()
            .public_config()?;
        Self::new(config)
    }

    /// The underlying low-level client
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl From<ApiClient> for PubClient {
    fn from(client: ApiClient) -> Self {
        Self { client }
    }
}

/// Client for the authenticated user context
#[derive(Debug, Clone)]
pub struct UserClient {
    client: ApiClient,
}

impl UserClient {
    /// Create a user client from a config carrying a session token
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.auth_token().is_none() {
            return Err(Error::missing_field("auth_token"));
        }
        Ok(Self {
            client: ApiClient::new(config)?,
        })
    }

    /// Create a user client from `mints_config.yml` plus `MINTS_*` overrides
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = ConfigFile::load(path)?
            .with_env_overrides()
            .user_config()?;
        Self::new(config)
    }

    /// The underlying low-level client
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

/// Percent-encode a slug or key for use as one path segment
fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

//! Connection configuration for a single client

use crate::error::{Error, Result};
use reqwest::header::{HeaderName, HeaderValue};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Header used for the API key unless configured otherwise
pub const DEFAULT_API_KEY_HEADER: &str = "ApiKey";

/// Where the API key goes on each request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyPlacement {
    /// Send as a header with this name
    Header(String),
    /// Append as a query parameter with this name
    Query(String),
}

impl Default for ApiKeyPlacement {
    fn default() -> Self {
        ApiKeyPlacement::Header(DEFAULT_API_KEY_HEADER.to_string())
    }
}

/// How the optional auth token is attached
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TokenPlacement {
    /// `Authorization: Bearer <token>`
    #[default]
    Bearer,
    /// Raw value under a custom header (e.g. `ContactToken`)
    Header(String),
}

/// Immutable connection configuration
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    api_key: String,
    auth_token: Option<String>,
    api_key_placement: ApiKeyPlacement,
    token_placement: TokenPlacement,
    timeout: Option<Duration>,
    user_agent: String,
    default_headers: BTreeMap<String, String>,
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Shorthand for a validated config with only a base URL and API key
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::builder().base_url(base_url).api_key(api_key).build()
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn api_key_placement(&self) -> &ApiKeyPlacement {
        &self.api_key_placement
    }

    pub fn token_placement(&self) -> &TokenPlacement {
        &self.token_placement
    }

    /// Per-request timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn default_headers(&self) -> &BTreeMap<String, String> {
        &self.default_headers
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("has_auth_token", &self.auth_token.is_some())
            .field("api_key_placement", &self.api_key_placement)
            .field("token_placement", &self.token_placement)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("default_headers", &self.default_headers)
            .finish()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    auth_token: Option<String>,
    api_key_placement: ApiKeyPlacement,
    token_placement: TokenPlacement,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    default_headers: BTreeMap<String, String>,
}

impl ClientConfigBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the session or contact token
    #[must_use]
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set the token only when one is available
    #[must_use]
    pub fn maybe_auth_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token;
        self
    }

    /// Choose where the API key is sent
    #[must_use]
    pub fn api_key_placement(mut self, placement: ApiKeyPlacement) -> Self {
        self.api_key_placement = placement;
        self
    }

    /// Choose how the auth token is sent
    #[must_use]
    pub fn token_placement(mut self, placement: TokenPlacement) -> Self {
        self.token_placement = placement;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the timeout only when one is configured
    #[must_use]
    pub fn maybe_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Add a default header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<ClientConfig> {
        let base_url = self
            .base_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| Error::missing_field("base_url"))?;

        let parsed = Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::missing_field("api_key"))?;

        if self.auth_token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(Error::invalid_value("auth_token", "must not be empty"));
        }

        match &self.api_key_placement {
            ApiKeyPlacement::Header(name) | ApiKeyPlacement::Query(name) if name.is_empty() => {
                return Err(Error::invalid_value(
                    "api_key_placement",
                    "name must not be empty",
                ));
            }
            _ => {}
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(Error::invalid_value("timeout", "must be greater than zero"));
        }

        // Credentials and headers must be sendable as-is
        if let ApiKeyPlacement::Header(name) = &self.api_key_placement {
            check_header_name("api_key_placement", name)?;
            check_header_value("api_key", &api_key)?;
        }
        if let Some(token) = &self.auth_token {
            check_header_value("auth_token", token)?;
        }
        if let TokenPlacement::Header(name) = &self.token_placement {
            check_header_name("token_placement", name)?;
        }
        if let Some(agent) = &self.user_agent {
            check_header_value("user_agent", agent)?;
        }
        for (name, value) in &self.default_headers {
            check_header_name("default_headers", name)?;
            check_header_value("default_headers", value)?;
        }

        Ok(ClientConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            auth_token: self.auth_token,
            api_key_placement: self.api_key_placement,
            token_placement: self.token_placement,
            timeout: self.timeout,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| format!("mints-client/{}", env!("CARGO_PKG_VERSION"))),
            default_headers: self.default_headers,
        })
    }
}

fn check_header_name(field: &str, name: &str) -> Result<()> {
    HeaderName::from_bytes(name.as_bytes())
        .map(|_| ())
        .map_err(|_| Error::invalid_value(field, format!("'{name}' is not a valid header name")))
}

fn check_header_value(field: &str, value: &str) -> Result<()> {
    HeaderValue::from_str(value)
        .map(|_| ())
        .map_err(|_| Error::invalid_value(field, "contains characters not allowed in a header"))
}

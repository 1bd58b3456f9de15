//! Authenticator implementation
//!
//! Applies the configured credentials to outgoing requests.

use crate::config::{ApiKeyPlacement, ClientConfig, TokenPlacement};
use reqwest::RequestBuilder;

/// Authenticator handles applying credentials to HTTP requests
#[derive(Clone)]
pub struct Authenticator {
    api_key: String,
    api_key_placement: ApiKeyPlacement,
    token: Option<String>,
    token_placement: TokenPlacement,
}

impl Authenticator {
    /// Create an authenticator from a validated config
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            api_key: config.api_key().to_string(),
            api_key_placement: config.api_key_placement().clone(),
            token: config.auth_token().map(str::to_string),
            token_placement: config.token_placement().clone(),
        }
    }

    /// Whether a session or contact token is attached
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        let req = match &self.api_key_placement {
            ApiKeyPlacement::Header(name) => req.header(name.as_str(), self.api_key.as_str()),
            ApiKeyPlacement::Query(param) => req.query(&[(param.as_str(), self.api_key.as_str())]),
        };

        match (&self.token, &self.token_placement) {
            (None, _) => req,
            (Some(token), TokenPlacement::Bearer) => req.bearer_auth(token),
            (Some(token), TokenPlacement::Header(name)) => req.header(name.as_str(), token.as_str()),
        }
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("api_key_placement", &self.api_key_placement)
            .field("has_token", &self.token.is_some())
            .field("token_placement", &self.token_placement)
            .finish_non_exhaustive()
    }
}

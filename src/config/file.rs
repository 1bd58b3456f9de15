//! `mints_config.yml` loader

use super::client::{ClientConfig, TokenPlacement};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Overrides `mints.host`
pub const ENV_HOST: &str = "MINTS_HOST";
/// Overrides `mints.api_key`
pub const ENV_API_KEY: &str = "MINTS_API_KEY";
/// Overrides `mints.session_token`
pub const ENV_SESSION_TOKEN: &str = "MINTS_SESSION_TOKEN";

/// Header carrying the visitor's contact token in the public context
pub const CONTACT_TOKEN_HEADER: &str = "ContactToken";

/// Top-level layout of the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub mints: MintsSection,
}

/// The `mints:` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MintsSection {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub session_token: Option<String>,
    #[serde(default)]
    pub contact_token: Option<String>,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl ConfigFile {
    /// Load from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config(format!("Config file '{}' not found", path.display()))
            } else {
                Error::Io(e)
            }
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Self::from_yaml_str(&content)
    }

    /// Parse from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Apply `MINTS_*` environment overrides
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (environment, CLI flags, ...)
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = lookup(ENV_HOST) {
            self.mints.host = host;
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            self.mints.api_key = key;
        }
        if let Some(token) = lookup(ENV_SESSION_TOKEN) {
            self.mints.session_token = Some(token);
        }
        self
    }

    /// Config for the public persona; the contact token, if any, goes in `ContactToken`
    pub fn public_config(&self) -> Result<ClientConfig> {
        ClientConfig::builder()
            .base_url(&self.mints.host)
            .api_key(&self.mints.api_key)
            .maybe_auth_token(self.mints.contact_token.clone())
            .token_placement(TokenPlacement::Header(CONTACT_TOKEN_HEADER.to_string()))
            .maybe_timeout(self.mints.timeout_seconds.map(Duration::from_secs))
            .build()
    }

    /// Config for the authenticated persona; requires a session token
    pub fn user_config(&self) -> Result<ClientConfig> {
        let token = self
            .mints
            .session_token
            .clone()
            .ok_or_else(|| Error::missing_field("session_token"))?;
        ClientConfig::builder()
            .base_url(&self.mints.host)
            .api_key(&self.mints.api_key)
            .auth_token(token)
            .token_placement(TokenPlacement::Bearer)
            .maybe_timeout(self.mints.timeout_seconds.map(Duration::from_secs))
            .build()
    }
}

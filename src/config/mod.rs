//! Client configuration
//!
//! `ClientConfig` is the only state an `ApiClient` carries. It is built once,
//! validated, and never mutated afterwards.
//!
//! `ConfigFile` reads the `mints_config.yml` format and resolves it into a
//! `ClientConfig` for either persona.

mod client;
mod file;

pub use client::{ApiKeyPlacement, ClientConfig, ClientConfigBuilder, TokenPlacement};
pub use file::{
    ConfigFile, MintsSection, CONTACT_TOKEN_HEADER, ENV_API_KEY, ENV_HOST, ENV_SESSION_TOKEN,
};

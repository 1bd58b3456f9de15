//! # Mints Client
//!
//! A typed Rust client for the Mints content, commerce and CRM HTTP API.
//!
//! ## Features
//!
//! - **Two personas**: public (API key) and authenticated user (API key + session)
//! - **Typed options**: search, filters, field selection, sort, includes,
//!   plus a pass-through bag for anything else
//! - **Deterministic encoding**: identical options give identical query strings
//! - **Normalized results**: parsed JSON or raw text, typed errors otherwise
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mints_client::{ClientConfig, PubClient, RequestOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::new("https://demo.mints.cloud/api/v1", "api-key")?;
//!     let client = PubClient::new(config)?;
//!
//!     let options = RequestOptions::new().fields("id,title").sort("-id");
//!     let products = client.get_products(Some(&options)).await?;
//!     println!("{:?}", products.body);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │          PubClient / UserClient resource methods         │
//! └──────────────────────────────┬───────────────────────────┘
//!                                │
//! ┌──────────────────────────────┴───────────────────────────┐
//! │      ApiClient::request(method, path, options, data)     │
//! ├──────────────┬──────────────┬──────────────┬─────────────┤
//! │   Options    │    Auth      │   Config     │   Errors    │
//! │ query string │ API key      │ builder      │ Config      │
//! │ JSON body    │ bearer       │ YAML file    │ Transport   │
//! │ envelope     │ contact hdr  │ env vars     │ Http/Encode │
//! └──────────────┴──────────────┴──────────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Query option and payload encoding
pub mod options;

/// Client configuration and config file loading
pub mod config;

/// Credential injection
pub mod auth;

/// Low-level HTTP client
pub mod http;

/// Public and authenticated resource methods
pub mod resources;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{ApiKeyPlacement, ClientConfig, ConfigFile, TokenPlacement};
pub use error::{Error, ErrorKind, Result};
pub use http::ApiClient;
pub use options::{OptionValue, RequestOptions, Sort, SortOrder};
pub use resources::{PubClient, UserClient, VisitContext};
pub use types::{ApiResponse, HttpMethod, JsonValue, ResponseBody};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

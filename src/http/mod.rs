//! HTTP client module
//!
//! One call in, one normalized response or typed error out.
//!
//! # Behavior
//!
//! - **Authentication**: API key and optional token attached on every call
//! - **Encoding**: options become the query string, payloads a JSON body
//! - **Normalization**: JSON bodies parsed, other bodies kept as text
//! - **No retries**: every failure surfaces to the caller

mod client;

pub use client::ApiClient;

//! Common types used throughout the Mints client
//!
//! This module contains shared type definitions, type aliases,
//! and the normalized response returned by every request.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Upper-case wire name
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether requests with this method transmit a body
    pub fn carries_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(Error::invalid_value(
                "method",
                format!("unsupported HTTP method '{other}'"),
            )),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Body of a successful response
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Parsed JSON (response content-type mentioned `json`)
    Json(JsonValue),
    /// Raw text for any other content-type
    Text(String),
    /// No body at all (e.g. 204)
    Empty,
}

impl ResponseBody {
    /// Borrow the JSON value, if any
    pub fn as_json(&self) -> Option<&JsonValue> {
        match self {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the raw text, if the body was not JSON
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Convert to a JSON value; text becomes a JSON string and empty becomes null
    pub fn into_json(self) -> JsonValue {
        match self {
            ResponseBody::Json(value) => value,
            ResponseBody::Text(text) => JsonValue::String(text),
            ResponseBody::Empty => JsonValue::Null,
        }
    }
}

/// Normalized outcome of a successful call (status 200-399)
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed body
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Create a response
    pub fn new(status: u16, body: ResponseBody) -> Self {
        Self { status, body }
    }

    /// Deserialize the JSON body into a typed value
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        match &self.body {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value.clone())?),
            ResponseBody::Text(text) => Ok(serde_json::from_str(text)?),
            ResponseBody::Empty => Ok(serde_json::from_value(JsonValue::Null)?),
        }
    }

    /// Unwrap the platform's `{"data": ...}` envelope when present
    pub fn data(&self) -> Option<&JsonValue> {
        self.body.as_json().and_then(|value| value.get("data"))
    }
}

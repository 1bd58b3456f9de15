//! Query string and body encoding

use super::types::RequestOptions;
use crate::error::{Error, Result};
use crate::types::{HttpMethod, JsonValue};
use url::form_urlencoded;

/// Encode options as an `application/x-www-form-urlencoded` query string
///
/// Returns an empty string for absent or empty options.
pub fn encode_query(options: Option<&RequestOptions>) -> String {
    let Some(options) = options else {
        return String::new();
    };

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in options.pairs() {
        serializer.append_pair(&key, &value);
    }
    serializer.finish()
}

/// Strategy for turning a payload into a request body
pub trait PayloadEncoder: Send + Sync + std::fmt::Debug {
    /// Serialize the payload
    fn encode(&self, data: &JsonValue) -> Result<String>;
}

/// Plain JSON serialization
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPayload;

impl PayloadEncoder for JsonPayload {
    fn encode(&self, data: &JsonValue) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }
}

/// JSON serialization that first parses payloads given as JSON strings
///
/// Lets callers holding pre-serialized JSON pass it through without it being
/// sent as a quoted string.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedJson;

impl NormalizedJson {
    /// Parse a JSON string payload; other payloads are returned unchanged
    pub fn normalize(data: &JsonValue) -> Result<JsonValue> {
        match data {
            JsonValue::String(raw) => serde_json::from_str(raw)
                .map_err(|e| Error::encoding(format!("payload string is not valid JSON: {e}"))),
            other => Ok(other.clone()),
        }
    }
}

impl PayloadEncoder for NormalizedJson {
    fn encode(&self, data: &JsonValue) -> Result<String> {
        Ok(serde_json::to_string(&Self::normalize(data)?)?)
    }
}

/// Wraps the normalized payload as `{"data": ...}` unless it already is
#[derive(Debug, Clone, Copy, Default)]
pub struct DataEnvelope;

impl DataEnvelope {
    /// Normalize and wrap the payload without serializing it
    pub fn wrap(data: &JsonValue) -> Result<JsonValue> {
        let value = NormalizedJson::normalize(data)?;
        match &value {
            JsonValue::Object(map) if map.contains_key("data") => Ok(value),
            _ => Ok(serde_json::json!({ "data": value })),
        }
    }
}

impl PayloadEncoder for DataEnvelope {
    fn encode(&self, data: &JsonValue) -> Result<String> {
        Ok(serde_json::to_string(&Self::wrap(data)?)?)
    }
}

/// Encode the body for a request
///
/// GET and DELETE never carry a body, whatever `data` holds.
pub fn encode_body(
    method: HttpMethod,
    data: Option<&JsonValue>,
    encoder: &dyn PayloadEncoder,
) -> Result<Option<String>> {
    if !method.carries_body() {
        return Ok(None);
    }
    data.map(|d| encoder.encode(d)).transpose()
}

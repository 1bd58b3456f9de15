//! Low-level API client
//!
//! Every resource method funnels into [`ApiClient::request`]:
//! - Builds `base_url + path + ?query`
//! - Attaches credentials and JSON headers
//! - Sends a body only for POST/PUT/PATCH
//! - Maps transport failures and statuses >= 400 to typed errors

use crate::auth::Authenticator;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::options::{encode_body, encode_query, JsonPayload, PayloadEncoder, RequestOptions};
use crate::types::{ApiResponse, HttpMethod, JsonValue, ResponseBody};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, warn};

/// Client for the Mints HTTP API
///
/// Cheap to clone; clones share the connection pool and the immutable
/// config, so concurrent calls need no locking.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Arc<ClientConfig>,
    authenticator: Arc<Authenticator>,
}

impl ApiClient {
    /// Create a client that owns the given config
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        let authenticator = Authenticator::from_config(&config);

        Ok(Self {
            client,
            config: Arc::new(config),
            authenticator: Arc::new(authenticator),
        })
    }

    /// The config this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Make a GET request
    pub async fn get(&self, path: &str, options: Option<&RequestOptions>) -> Result<ApiResponse> {
        self.request(HttpMethod::Get, path, options, None).await
    }

    /// Make a POST request with a JSON body
    pub async fn post(&self, path: &str, data: &JsonValue) -> Result<ApiResponse> {
        self.request(HttpMethod::Post, path, None, Some(data)).await
    }

    /// Make a PUT request with a JSON body
    pub async fn put(&self, path: &str, data: &JsonValue) -> Result<ApiResponse> {
        self.request(HttpMethod::Put, path, None, Some(data)).await
    }

    /// Make a PATCH request with a JSON body
    pub async fn patch(&self, path: &str, data: &JsonValue) -> Result<ApiResponse> {
        self.request(HttpMethod::Patch, path, None, Some(data)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.request(HttpMethod::Delete, path, None, None).await
    }

    /// Make a generic request, serializing `data` as plain JSON
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        options: Option<&RequestOptions>,
        data: Option<&JsonValue>,
    ) -> Result<ApiResponse> {
        self.request_with(method, path, options, data, &JsonPayload)
            .await
    }

    /// Make a generic request with a custom payload strategy
    pub async fn request_with(
        &self,
        method: HttpMethod,
        path: &str,
        options: Option<&RequestOptions>,
        data: Option<&JsonValue>,
        encoder: &dyn PayloadEncoder,
    ) -> Result<ApiResponse> {
        let url = self.build_url(path, options);
        let body = encode_body(method, data, encoder)?;
        if data.is_some() && body.is_none() {
            debug!("Dropping payload on {} request", method);
        }

        let mut req = self
            .client
            .request(method.into(), &url)
            .header(ACCEPT, "application/json");

        for (key, value) in self.config.default_headers() {
            req = req.header(key.as_str(), value.as_str());
        }

        req = self.authenticator.apply(req);

        if let Some(body) = body {
            req = req.header(CONTENT_TYPE, "application/json").body(body);
        }

        debug!("Sending {} {}", method, url);

        let response = req.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status().as_u16();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("json"));
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if status >= 400 {
            warn!("Request failed with {}: {} {}", status, method, url);
            return Err(Error::http_status(status, text));
        }

        debug!("Request succeeded with {}: {} {}", status, method, url);
        Ok(ApiResponse::new(status, parse_body(text, is_json)))
    }

    /// Build the full URL for a path and its options
    ///
    /// With no options the result is exactly `base_url + path`.
    pub fn build_url(&self, path: &str, options: Option<&RequestOptions>) -> String {
        let base = self.config.base_url();
        let mut url = if path.is_empty() || path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        };

        let query = encode_query(options);
        if !query.is_empty() {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&query);
        }
        url
    }

    fn transport_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            let timeout_ms = self
                .config
                .timeout()
                .map_or(0, |t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX));
            warn!("Request timed out after {}ms", timeout_ms);
            return Error::Timeout { timeout_ms };
        }
        // The URL may carry the API key as a query parameter
        let error = error.without_url();
        warn!("Transport error: {}", error);
        Error::Transport(error)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("authenticator", &self.authenticator)
            .finish_non_exhaustive()
    }
}

/// Parse a response body; invalid JSON under a JSON content-type stays text
fn parse_body(text: String, is_json: bool) -> ResponseBody {
    if text.is_empty() {
        return ResponseBody::Empty;
    }
    if is_json {
        if let Ok(value) = serde_json::from_str(&text) {
            return ResponseBody::Json(value);
        }
    }
    ResponseBody::Text(text)
}

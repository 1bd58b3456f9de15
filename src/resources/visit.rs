//! Visit registration

use super::PubClient;
use crate::error::Result;
use crate::options::RequestOptions;
use crate::types::ApiResponse;
use serde::{Deserialize, Serialize};

/// Request metadata for a page visit
///
/// The caller fills this from whatever web framework it runs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitContext {
    pub ip_address: String,
    pub user_agent: String,
    pub url: String,
}

impl VisitContext {
    /// Create a visit context
    pub fn new(
        ip_address: impl Into<String>,
        user_agent: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            ip_address: ip_address.into(),
            user_agent: user_agent.into(),
            url: url.into(),
        }
    }
}

impl PubClient {
    /// Register a ghost or contact visit
    pub async fn register_visit(&self, visit: &VisitContext) -> Result<ApiResponse> {
        let data = serde_json::to_value(visit)?;
        self.client.post("/register-visit", &data).await
    }

    /// Register how long a visit lasted, in seconds
    pub async fn register_visit_timer(&self, visit: &str, time: u64) -> Result<ApiResponse> {
        let options = RequestOptions::new()
            .param("visit", visit)
            .param("time", time.to_string());
        self.client
            .get("/register-visit-timer", Some(&options))
            .await
    }
}

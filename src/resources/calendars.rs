use super::UserClient;
use crate::error::Result;
use crate::options::{DataEnvelope, RequestOptions};
use crate::types::{ApiResponse, HttpMethod, JsonValue};

impl UserClient {
    /// Get a collection of calendars
    pub async fn get_calendars(&self, options: Option<&RequestOptions>) -> Result<ApiResponse> {
        self.client.get("/config/calendars", options).await
    }

    /// Get a calendar by id
    pub async fn get_calendar(
        &self,
        id: u64,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        self.client
            .get(&format!("/config/calendars/{id}"), options)
            .await
    }

    /// Create a calendar; sent wrapped as `{"data": ...}`
    pub async fn create_calendar(&self, data: &JsonValue) -> Result<ApiResponse> {
        self.post_enveloped("/config/calendars", data).await
    }

    /// Update a calendar; sent wrapped as `{"data": ...}`
    pub async fn update_calendar(&self, id: u64, data: &JsonValue) -> Result<ApiResponse> {
        self.client
            .request_with(
                HttpMethod::Put,
                &format!("/config/calendars/{id}"),
                None,
                Some(data),
                &DataEnvelope,
            )
            .await
    }

    /// Delete a calendar
    pub async fn delete_calendar(&self, id: u64) -> Result<ApiResponse> {
        self.client
            .delete(&format!("/config/calendars/{id}"))
            .await
    }
}

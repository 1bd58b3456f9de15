//! Profile, preferences and notifications of the logged-in contact

use super::{segment, UserClient};
use crate::error::Result;
use crate::options::DataEnvelope;
use crate::types::{ApiResponse, HttpMethod, JsonValue};

impl UserClient {
    /// Info of the logged-in user
    pub async fn me(&self) -> Result<ApiResponse> {
        self.client.get("/profile/me", None).await
    }

    /// Get the contact's preferences
    pub async fn get_preferences(&self) -> Result<ApiResponse> {
        self.client.get("/profile/preferences", None).await
    }

    /// Create preferences; sent wrapped as `{"data": ...}`
    pub async fn create_preferences(&self, data: &JsonValue) -> Result<ApiResponse> {
        self.post_enveloped("/profile/preferences", data).await
    }

    /// Get preferences under one setting key
    pub async fn get_preferences_by_setting_key(&self, setting_key: &str) -> Result<ApiResponse> {
        let path = format!("/profile/preferences/{}", segment(setting_key));
        self.client.get(&path, None).await
    }

    /// Get all notifications
    pub async fn get_notifications(&self) -> Result<ApiResponse> {
        self.client.get("/profile/notifications", None).await
    }

    /// Get notifications one page at a time
    pub async fn get_paginated_notifications(&self) -> Result<ApiResponse> {
        self.client.get("/profile/notificationsp", None).await
    }

    /// Mark notifications read, e.g. `{"ids": [...], "read": true}`
    pub async fn read_notifications(&self, data: &JsonValue) -> Result<ApiResponse> {
        self.post_enveloped("/profile/notifications/read", data)
            .await
    }

    /// Delete notifications, e.g. `{"ids": [...]}`
    pub async fn delete_notifications(&self, data: &JsonValue) -> Result<ApiResponse> {
        self.post_enveloped("/profile/notifications/delete", data)
            .await
    }

    pub(super) async fn post_enveloped(&self, path: &str, data: &JsonValue) -> Result<ApiResponse> {
        self.client
            .request_with(HttpMethod::Post, path, None, Some(data), &DataEnvelope)
            .await
    }
}

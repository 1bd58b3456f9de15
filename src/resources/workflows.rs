//! CRM workflows and workflow steps

use super::UserClient;
use crate::error::Result;
use crate::options::{NormalizedJson, RequestOptions};
use crate::types::{ApiResponse, HttpMethod, JsonValue};

impl UserClient {
    /// Get a collection of workflows
    pub async fn get_workflows(&self, options: Option<&RequestOptions>) -> Result<ApiResponse> {
        self.client.get("/crm/workflows", options).await
    }

    /// Get a workflow by id
    pub async fn get_workflow(
        &self,
        id: u64,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        self.client
            .get(&format!("/crm/workflows/{id}"), options)
            .await
    }

    /// Create a workflow
    pub async fn create_workflow(&self, data: &JsonValue) -> Result<ApiResponse> {
        self.client.post("/crm/workflows", data).await
    }

    /// Update a workflow; a payload given as a JSON string is parsed first
    pub async fn update_workflow(&self, id: u64, data: &JsonValue) -> Result<ApiResponse> {
        self.client
            .request_with(
                HttpMethod::Put,
                &format!("/crm/workflows/{id}"),
                None,
                Some(data),
                &NormalizedJson,
            )
            .await
    }

    /// Create a workflow step
    pub async fn create_workflow_step(&self, data: &JsonValue) -> Result<ApiResponse> {
        self.client.post("/crm/steps", data).await
    }

    /// Update a workflow step
    pub async fn update_workflow_step(&self, id: u64, data: &JsonValue) -> Result<ApiResponse> {
        self.client.put(&format!("/crm/steps/{id}"), data).await
    }

    /// Delete a workflow step
    pub async fn delete_workflow_step(&self, id: u64) -> Result<ApiResponse> {
        self.client.delete(&format!("/crm/steps/{id}")).await
    }
}

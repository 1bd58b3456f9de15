use super::{segment, PubClient};
use crate::error::Result;
use crate::options::{DataEnvelope, RequestOptions};
use crate::types::{ApiResponse, HttpMethod, JsonValue};

impl PubClient {
    /// Get a content page by slug
    pub async fn get_content_page(
        &self,
        slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        let path = format!("/content/content-pages/{}", segment(slug));
        self.client.get(&path, options).await
    }

    /// Get a collection of content templates
    pub async fn get_content_templates(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        self.client.get("/content/content-templates", options).await
    }

    /// Get a content template by slug
    pub async fn get_content_template(
        &self,
        slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        let path = format!("/content/content-templates/{}", segment(slug));
        self.client.get(&path, options).await
    }

    /// Content instances; the server expects at least a `template` option
    pub async fn get_content_instances(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        self.client.get("/content/content-instances", options).await
    }

    /// Get a content instance by slug
    pub async fn get_content_instance(
        &self,
        slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        let path = format!("/content/content-instances/{}", segment(slug));
        self.client.get(&path, options).await
    }

    /// Get a collection of stories
    pub async fn get_stories(&self, options: Option<&RequestOptions>) -> Result<ApiResponse> {
        self.client.get("/content/stories", options).await
    }

    /// Get a story by slug
    pub async fn get_story(
        &self,
        slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        let path = format!("/content/stories/{}", segment(slug));
        self.client.get(&path, options).await
    }

    /// Get a collection of forms
    pub async fn get_forms(&self, options: Option<&RequestOptions>) -> Result<ApiResponse> {
        self.client.get("/content/forms", options).await
    }

    /// Get a form by slug
    pub async fn get_form(
        &self,
        slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        let path = format!("/content/forms/{}", segment(slug));
        self.client.get(&path, options).await
    }

    /// Submit form answers; sent wrapped as `{"data": ...}`
    pub async fn submit_form(&self, data: &JsonValue) -> Result<ApiResponse> {
        self.client
            .request_with(
                HttpMethod::Post,
                "/content/forms/submit",
                None,
                Some(data),
                &DataEnvelope,
            )
            .await
    }
}

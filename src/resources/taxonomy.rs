//! Categories, tags, attributes and taxonomies

use super::{segment, PubClient};
use crate::error::Result;
use crate::options::RequestOptions;
use crate::types::ApiResponse;

impl PubClient {
    /// Get a collection of categories
    pub async fn get_categories(&self, options: Option<&RequestOptions>) -> Result<ApiResponse> {
        self.client.get("/config/categories", options).await
    }

    /// Get a category by slug
    pub async fn get_category(
        &self,
        slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        let path = format!("/config/categories/{}", segment(slug));
        self.client.get(&path, options).await
    }

    /// Get a collection of tags
    pub async fn get_tags(&self, options: Option<&RequestOptions>) -> Result<ApiResponse> {
        self.client.get("/config/tags", options).await
    }

    /// Get a tag by slug
    pub async fn get_tag(
        &self,
        slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        let path = format!("/config/tags/{}", segment(slug));
        self.client.get(&path, options).await
    }

    /// Get a collection of attributes
    pub async fn get_attributes(&self, options: Option<&RequestOptions>) -> Result<ApiResponse> {
        self.client.get("/config/attributes", options).await
    }

    /// Get a collection of taxonomies
    pub async fn get_taxonomies(&self, options: Option<&RequestOptions>) -> Result<ApiResponse> {
        self.client.get("/config/taxonomies", options).await
    }

    /// Get a taxonomy by slug
    pub async fn get_taxonomy(
        &self,
        slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        let path = format!("/config/taxonomies/{}", segment(slug));
        self.client.get(&path, options).await
    }
}

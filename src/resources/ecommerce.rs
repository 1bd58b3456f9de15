use super::{segment, PubClient};
use crate::error::Result;
use crate::options::RequestOptions;
use crate::types::ApiResponse;

impl PubClient {
    /// Get a collection of products
    pub async fn get_products(&self, options: Option<&RequestOptions>) -> Result<ApiResponse> {
        self.client.get("/ecommerce/products", options).await
    }

    /// Get a product by slug
    pub async fn get_product(
        &self,
        slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        let path = format!("/ecommerce/products/{}", segment(slug));
        self.client.get(&path, options).await
    }

    /// Get a collection of product brands
    pub async fn get_product_brands(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        self.client.get("/ecommerce/product-brands", options).await
    }

    /// Get a product brand by slug
    pub async fn get_product_brand(
        &self,
        slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        let path = format!("/ecommerce/product-brands/{}", segment(slug));
        self.client.get(&path, options).await
    }

    /// Get a collection of SKUs
    pub async fn get_skus(&self, options: Option<&RequestOptions>) -> Result<ApiResponse> {
        self.client.get("/ecommerce/skus", options).await
    }

    /// Get a SKU by slug
    pub async fn get_sku(
        &self,
        slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        let path = format!("/ecommerce/skus/{}", segment(slug));
        self.client.get(&path, options).await
    }
}

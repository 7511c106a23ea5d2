use serde::Deserialize;

use super::CatalogError;
use crate::models::Product;

/// Public catalog used when none is configured.
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com";

#[derive(Debug, Deserialize)]
struct ProductPage {
    #[serde(default)]
    products: Vec<Product>,
}

/// HTTP client for the product catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches up to `limit` products.
    ///
    /// The HTTP status is not inspected: any JSON body without a `products`
    /// array reads as an empty listing. Transport and decode errors
    /// propagate.
    pub async fn list_products(&self, limit: u32) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/products", self.base_url);
        tracing::info!(%url, limit, "fetching product listing");

        let page: ProductPage = self
            .http
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await?
            .json()
            .await?;

        tracing::debug!(count = page.products.len(), "product listing received");
        Ok(page.products)
    }

    /// Fetches one product. A non-success status is an error.
    pub async fn get_product(&self, id: u64) -> Result<Product, CatalogError> {
        let url = format!("{}/products/{}", self.base_url, id);
        tracing::info!(%url, "fetching product");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(id, %status, "product fetch failed");
            return Err(CatalogError::Status { id, status });
        }

        Ok(response.json().await?)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

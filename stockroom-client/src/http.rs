//! HTTP client for the Catalog Service

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult, ProductQuery};
use shared::models::{Category, Product, Tag};

/// HTTP client for the Catalog Service read endpoints
///
/// All three endpoints return a direct JSON array of the entity shape;
/// there is no envelope and no pagination metadata.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full product catalog, or the filtered subset when the query is non-empty
    pub async fn list_products(&self, query: &ProductQuery) -> ClientResult<Vec<Product>> {
        self.get("products/", &query.params()).await
    }

    /// Full universe of categories
    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.get("categories/", &[]).await
    }

    /// Full universe of tags
    pub async fn list_tags(&self) -> ClientResult<Vec<Tag>> {
        self.get("tags/", &[]).await
    }

    /// Make a GET request
    ///
    /// Resource paths keep their trailing slash; the service redirects
    /// otherwise.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("GET {} ({} params)", url, params.len());

        let mut request = self.client.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        response.json().await.map_err(Into::into)
    }
}

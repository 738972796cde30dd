//! HTTP catalog client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::catalog::{
    errors::CatalogError,
    models::{CatalogProduct, ProductId, Stock},
    service::Catalog,
};

const STOCK_RESOURCE: &str = "stock";
const PRODUCTS_RESOURCE: &str = "products";

/// Configuration for connecting to the catalog API.
#[derive(Debug, Clone)]
pub struct HttpCatalogConfig {
    /// Catalog base address, e.g. `"http://localhost:3333"`.
    pub base_url: String,

    /// Per-request timeout. Requests never time out when unset.
    pub timeout: Option<Duration>,
}

/// HTTP client for the catalog's `stock` and `products` resources.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
    http: Client,
}

impl HttpCatalog {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: HttpCatalogConfig) -> Result<Self, CatalogError> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: builder.build()?,
        })
    }

    fn url(&self, resource: &str, id: ProductId) -> String {
        format!("{}/{resource}/{id}", self.base_url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        id: ProductId,
    ) -> Result<T, CatalogError> {
        let url = self.url(resource, id);

        debug!(%url, "fetching catalog resource");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound { resource, id });
        }

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                resource,
                id,
                status,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn get_stock(&self, product: ProductId) -> Result<Stock, CatalogError> {
        self.fetch(STOCK_RESOURCE, product).await
    }

    async fn get_product(&self, product: ProductId) -> Result<CatalogProduct, CatalogError> {
        self.fetch(PRODUCTS_RESOURCE, product).await
    }
}

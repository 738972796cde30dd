//! Catalog service.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::catalog::{
    errors::CatalogError,
    models::{CatalogProduct, ProductId, Stock},
};

#[automock]
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch the current stock level for a product.
    async fn get_stock(&self, product: ProductId) -> Result<Stock, CatalogError>;

    /// Fetch the catalog record for a product.
    async fn get_product(&self, product: ProductId) -> Result<CatalogProduct, CatalogError>;
}

//! Catalog Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<CatalogProduct>;

/// Product as served by `GET products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
}

/// Stock level as served by `GET stock/{id}`.
///
/// A missing or `null` amount reads as no stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    #[serde(default)]
    pub amount: Option<u32>,
}

impl Stock {
    /// Units available for purchase.
    #[must_use]
    pub fn available(&self) -> u32 {
        self.amount.unwrap_or(0)
    }

    /// Whether `requested` units can be held in a cart.
    #[must_use]
    pub fn covers(&self, requested: u64) -> bool {
        requested >= 1 && requested <= u64::from(self.available())
    }
}
